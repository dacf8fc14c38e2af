pub mod build_user_storage_data;
pub mod get_default_data;
pub mod get_stored_data;
pub mod trans_to_user_data;
