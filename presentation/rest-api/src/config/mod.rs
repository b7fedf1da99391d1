pub mod app_config;
pub mod cors_config;
pub mod identity_config;
pub mod server_config;
pub mod storage_config;
pub mod users_config;
