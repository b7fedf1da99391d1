use poem_openapi::{SecurityScheme, auth::ApiKey};

/// Raw `Authorization` header.
///
/// The value is not interpreted here; it is forwarded as-is to the identity
/// service, which decides whether it is valid. Requests without the header
/// are answered with 401 before reaching a handler.
#[derive(SecurityScheme)]
#[oai(ty = "api_key", key_name = "Authorization", key_in = "header")]
pub struct AuthorizationHeader(pub ApiKey);

impl AuthorizationHeader {
    pub fn credential(self) -> String {
        self.0.key
    }
}
