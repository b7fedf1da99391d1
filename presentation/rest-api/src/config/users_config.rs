use std::env;

use business::domain::user::model::User;

/// Users seeded into the in-memory user store at startup.
#[derive(Debug, Clone, Default)]
pub struct UsersConfig {
    pub admin_tokens: Vec<String>,
    pub user_tokens: Vec<String>,
}

impl UsersConfig {
    /// Environment variables:
    /// - ADMIN_TOKENS: comma-separated tokens of admin users
    /// - USER_TOKENS: comma-separated tokens of regular users
    pub fn from_env() -> Self {
        Self {
            admin_tokens: parse_tokens(&env::var("ADMIN_TOKENS").unwrap_or_default()),
            user_tokens: parse_tokens(&env::var("USER_TOKENS").unwrap_or_default()),
        }
    }

    /// Admin entries win over regular ones when a token appears in both lists.
    pub fn users(&self) -> Vec<User> {
        let regular = self.user_tokens.iter().map(|t| User::new(t.clone(), false));
        let admins = self.admin_tokens.iter().map(|t| User::new(t.clone(), true));
        regular.chain(admins).collect()
    }
}

fn parse_tokens(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
