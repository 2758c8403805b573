use std::env;

const DEFAULT_PRINCIPAL_HEADER: &str = "x-authenticated-user";

#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Bearer token the authentication gateway presents on every call.
    pub secret_key: String,
    /// Header carrying the username the gateway authenticated.
    pub principal_header: String,
}

impl ApiConfig {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            principal_header: DEFAULT_PRINCIPAL_HEADER.to_string(),
        }
    }

    pub fn from_env() -> Self {
        let secret_key = env::var("API_SECRET_KEY").unwrap_or_else(|_| {
            tracing::warn!("API_SECRET_KEY not set in environment, using default");
            "default-secret-key".to_string()
        });

        let principal_header = env::var("PRINCIPAL_HEADER")
            .map(|h| h.to_ascii_lowercase())
            .unwrap_or_else(|_| DEFAULT_PRINCIPAL_HEADER.to_string());

        Self {
            secret_key,
            principal_header,
        }
    }
}
