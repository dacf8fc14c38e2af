use actix_web::{http::StatusCode, HttpResponse};
use thiserror::Error;
use wf_review_api_structs::ErrorResponse;
use wf_review_domain::InvalidInterval;

#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("Internal server error")]
    InternalError,
    #[error("{0}")]
    InvalidInterval(#[from] InvalidInterval),
    #[error("Unable to read or write settings. Error message: `{0}`")]
    PersistenceFailure(String),
    #[error("The alarm facility rejected the request. Error message: `{0}`")]
    TimerFacilityFailure(String),
    #[error("Outbound request failed. Error message: `{0}`")]
    NetworkFailure(String),
    #[error("invalid_message")]
    InvalidMessage,
    #[error("invalid_payload: {0}")]
    InvalidPayload(String),
    #[error("unknown_action")]
    UnknownAction,
}

impl actix_web::error::ResponseError for ReviewError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidInterval(_) => StatusCode::BAD_REQUEST,
            Self::PersistenceFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::TimerFacilityFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NetworkFailure(_) => StatusCode::BAD_GATEWAY,
            Self::InvalidMessage => StatusCode::BAD_REQUEST,
            Self::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            Self::UnknownAction => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
