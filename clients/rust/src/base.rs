use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use wf_review_api_structs::{ErrorResponse, MessageRequest};

pub(crate) struct BaseClient {
    address: String,
    client: Client,
}

#[derive(Debug)]
pub enum APIError {
    Network,
    MalformedResponse,
    /// The service answered with an `{error}` body
    Rejected { status: StatusCode, error: String },
    UnexpectedStatusCode(StatusCode),
}

impl APIError {
    /// The error message of a rejected request
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { error, .. } => Some(error),
            _ => None,
        }
    }
}

pub type APIResponse<T> = Result<T, APIError>;

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            address,
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1/{}", self.address, path)
    }

    async fn handle_api_response<T: for<'de> Deserialize<'de>>(
        &self,
        res: Response,
    ) -> APIResponse<T> {
        let status = res.status();
        if status == StatusCode::OK {
            return res
                .json::<T>()
                .await
                .map_err(|_| APIError::MalformedResponse);
        }
        match res.json::<ErrorResponse>().await {
            Ok(body) => Err(APIError::Rejected {
                status,
                error: body.error,
            }),
            Err(_) => Err(APIError::UnexpectedStatusCode(status)),
        }
    }

    pub async fn get<T: for<'de> Deserialize<'de>>(&self, path: &str) -> APIResponse<T> {
        let res = match self.client.get(&self.url(path)).send().await {
            Ok(res) => res,
            Err(_) => return Err(APIError::Network),
        };
        self.handle_api_response(res).await
    }

    pub async fn post<T: for<'de> Deserialize<'de>, S: Serialize>(
        &self,
        body: &S,
        path: &str,
    ) -> APIResponse<T> {
        let res = match self.client.post(&self.url(path)).json(body).send().await {
            Ok(res) => res,
            Err(_) => return Err(APIError::Network),
        };
        self.handle_api_response(res).await
    }

    /// Sends one `{action, payload}` message
    pub async fn message<T: for<'de> Deserialize<'de>, P: Serialize>(
        &self,
        action: &str,
        payload: P,
    ) -> APIResponse<T> {
        let payload = serde_json::to_value(payload).map_err(|_| APIError::MalformedResponse)?;
        self.post(&MessageRequest::new(action, payload), "message")
            .await
    }
}
