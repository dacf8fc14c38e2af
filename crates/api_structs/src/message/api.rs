use crate::dtos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope of every message sent to the router
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRequest {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub payload: Value,
}

impl MessageRequest {
    pub fn new(action: &str, payload: Value) -> Self {
        Self {
            action: Some(action.into()),
            payload,
        }
    }
}

/// Returned instead of the success body when a message fails
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub mod get_review_url {
    use super::*;

    pub const ACTION: &str = "getReviewUrl";

    pub type RequestBody = PreferencesInput;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub url: String,
    }
}

pub mod set_reminder {
    use super::*;

    pub const ACTION: &str = "setReminder";

    pub type RequestBody = PreferencesInput;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub ok: bool,
    }
}

pub mod get_stored_data {
    use super::*;

    pub const ACTION: &str = "getStoredData";

    pub type APIResponse = SettingsRecordDTO;
}

pub mod get_all_alarms {
    use super::*;

    pub const ACTION: &str = "getAllAlarms";

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub alarms: Vec<AlarmDTO>,
    }
}

pub mod get_default_data {
    use super::*;

    pub const ACTION: &str = "getDefaultData";

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub data: DefaultSettingsDTO,
    }
}

pub mod trans_to_user_data {
    use super::*;

    pub const ACTION: &str = "transToUserData";

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub data: UserPreferencesDTO,
    }
}

pub mod build_user_storage_data {
    use super::*;

    pub const ACTION: &str = "buildUserStorageData";

    pub type RequestBody = PreferencesInput;

    pub type APIResponse = UserPreferencesDTO;
}

pub mod send_test {
    use super::*;

    pub const ACTION: &str = "sendTest";

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub result: String,
    }
}

pub mod send_lark_msg {
    use super::*;

    pub const ACTION: &str = "sendLarkMsg";

    /// The payload is the message text itself
    pub type RequestBody = String;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub result: Value,
    }
}
