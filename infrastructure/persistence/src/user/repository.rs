use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::user::model::User;
use business::domain::user::repository::UserRepository;

/// Process-local user store keyed by identity token.
pub struct UserRepositoryInMemory {
    users: RwLock<HashMap<String, User>>,
}

impl UserRepositoryInMemory {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Builds a store pre-populated with `users`. Later entries win on
    /// duplicate tokens.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users: HashMap<String, User> = users
            .into_iter()
            .map(|user| (user.token.clone(), user))
            .collect();
        tracing::info!(count = users.len(), "Seeded user store");
        Self {
            users: RwLock::new(users),
        }
    }
}

impl Default for UserRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for UserRepositoryInMemory {
    async fn get_by_token(&self, token: &str) -> Result<User, RepositoryError> {
        let users = self.users.read().await;
        users.get(token).cloned().ok_or_else(RepositoryError::not_found)
    }
}
