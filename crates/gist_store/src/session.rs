use std::env;

use reqwest::blocking::Client;

use crate::error::StoreError;

/// Environment variable consulted when no token is passed explicitly.
pub const TOKEN_ENV_VAR: &str = "GIST_ACCESS_TOKEN";

/// Authentication state for talking to the gist host: the OAuth access
/// token and the HTTP client that carries it. Constructed once by the
/// caller and passed by reference to the store client; there is no global
/// session.
pub struct Session {
    access_token: String,
    client: Client,
}

impl Session {
    pub fn new(access_token: impl Into<String>) -> Self {
        Session {
            access_token: access_token.into(),
            client: Client::new(),
        }
    }

    /// Builds a session from [`TOKEN_ENV_VAR`]. An unset or empty variable
    /// is an error; uploads cannot proceed anonymously.
    pub fn from_env() -> Result<Self, StoreError> {
        match env::var(TOKEN_ENV_VAR) {
            Ok(token) if !token.is_empty() => Ok(Session::new(token)),
            _ => Err(StoreError::MissingToken),
        }
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn token(&self) -> &str {
        &self.access_token
    }
}
