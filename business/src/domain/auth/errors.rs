#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("auth.unauthenticated")]
    Unauthenticated,
    #[error("auth.forbidden")]
    Forbidden,
    #[error("auth.identity_unavailable")]
    IdentityUnavailable,
}
