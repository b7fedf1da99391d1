/// A user known to the catalog, keyed by the token the identity service issues.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub token: String,
    admin: bool,
}

impl User {
    pub fn new(token: impl Into<String>, admin: bool) -> Self {
        Self {
            token: token.into(),
            admin,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.admin
    }
}
