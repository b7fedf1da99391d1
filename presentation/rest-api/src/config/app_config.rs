use super::{
    cors_config, identity_config::IdentityConfig, server_config::ServerConfig,
    storage_config::StorageConfig, users_config::UsersConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub identity: IdentityConfig,
    pub storage: StorageConfig,
    pub users: UsersConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            identity: IdentityConfig::from_env(),
            storage: StorageConfig::from_env(),
            users: UsersConfig::from_env(),
        }
    }
}
