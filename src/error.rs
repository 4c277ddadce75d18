use miette::Diagnostic;
use thiserror::Error;

/// Main error type for the client
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Authentication error: {0}")]
    #[diagnostic(code(gancio::authentication))]
    Authentication(String),

    #[error("Validation error: {0}")]
    #[diagnostic(code(gancio::validation))]
    Validation(String),

    #[error("Not found: {0}")]
    #[diagnostic(code(gancio::not_found))]
    NotFound(String),

    #[error("Network error: {0}")]
    #[diagnostic(code(gancio::network))]
    Network(String),

    #[error("Server error: HTTP {status}: {body}")]
    #[diagnostic(code(gancio::server))]
    Server { status: u16, body: String },

    #[error("Serialization error: {0}")]
    #[diagnostic(code(gancio::serialization))]
    Serialization(String),

    #[error("Environment error: {0}")]
    #[diagnostic(code(gancio::environment))]
    Environment(String),
}

/// Type alias for Result with our Error type
pub type ClientResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create authentication errors
pub fn authentication_error(message: &str) -> Error {
    Error::Authentication(message.to_string())
}

/// Helper to create validation errors
pub fn validation_error(message: &str) -> Error {
    Error::Validation(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_produce_matching_variants() {
        assert!(matches!(env_error("GANCIO_URL"), Error::Environment(_)));
        assert!(matches!(
            authentication_error("no token"),
            Error::Authentication(_)
        ));
        assert!(matches!(validation_error("empty title"), Error::Validation(_)));
    }

    #[test]
    fn server_error_displays_status_and_body() {
        let err = Error::Server {
            status: 502,
            body: "bad gateway".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("502"));
        assert!(message.contains("bad gateway"));
    }
}
