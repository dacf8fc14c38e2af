use crate::error::ReviewError;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub struct Guard {}

impl Guard {
    /// Reads the typed payload of a message. A missing payload is read as
    /// the payload's default.
    pub fn against_malformed_payload<T>(payload: Value) -> Result<T, ReviewError>
    where
        T: DeserializeOwned + Default,
    {
        if payload.is_null() {
            return Ok(T::default());
        }
        serde_json::from_value(payload).map_err(|e| ReviewError::InvalidPayload(e.to_string()))
    }
}
