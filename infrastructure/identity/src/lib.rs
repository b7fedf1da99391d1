pub mod client;
pub mod whoami_verifier;
