use dotenvy::dotenv;
use std::env;

use crate::error::{env_error, ClientResult};

/// Default URL of a local Gancio instance
pub const DEFAULT_URL: &str = "http://localhost:13120";

/// Connection settings for a Gancio instance, read from the environment.
///
/// Used by test harnesses and example programs; constructing a
/// [`GancioClient`](crate::GancioClient) directly does not require it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Gancio instance
    pub url: String,
    /// Admin account email, when provided
    pub admin_email: Option<String>,
    /// Admin account password, when provided
    pub admin_password: Option<String>,
}

impl Config {
    /// Load configuration from the environment, reading `.env` if present.
    ///
    /// `GANCIO_URL` falls back to [`DEFAULT_URL`]; the admin credentials
    /// stay unset unless both variables are provided.
    pub fn load() -> Self {
        // Load .env file if it exists
        dotenv().ok();

        let url = env::var("GANCIO_URL").unwrap_or_else(|_| String::from(DEFAULT_URL));
        let admin_email = env::var("GANCIO_ADMIN_EMAIL").ok();
        let admin_password = env::var("GANCIO_ADMIN_PASSWORD").ok();

        Config {
            url,
            admin_email,
            admin_password,
        }
    }

    /// Admin credentials, when both variables are set.
    pub fn admin_credentials(&self) -> ClientResult<(String, String)> {
        let email = self
            .admin_email
            .clone()
            .ok_or_else(|| env_error("GANCIO_ADMIN_EMAIL"))?;
        let password = self
            .admin_password
            .clone()
            .ok_or_else(|| env_error("GANCIO_ADMIN_PASSWORD"))?;
        Ok((email, password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn admin_credentials_require_both_variables() {
        let config = Config {
            url: DEFAULT_URL.to_string(),
            admin_email: Some("admin@example.org".to_string()),
            admin_password: None,
        };
        assert!(matches!(
            config.admin_credentials(),
            Err(Error::Environment(_))
        ));
    }

    #[test]
    fn admin_credentials_return_both_when_set() {
        let config = Config {
            url: DEFAULT_URL.to_string(),
            admin_email: Some("admin@example.org".to_string()),
            admin_password: Some("hunter2".to_string()),
        };
        let (email, password) = config.admin_credentials().unwrap();
        assert_eq!(email, "admin@example.org");
        assert_eq!(password, "hunter2");
    }
}
