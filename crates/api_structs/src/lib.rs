mod message;
mod status;

pub mod dtos {
    pub use crate::message::dtos::*;
}

pub use crate::message::api::*;
pub use crate::status::api::*;
