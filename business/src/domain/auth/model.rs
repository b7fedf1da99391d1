/// Identity established by the identity service for a credential.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub token: String,
}
