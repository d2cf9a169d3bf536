//! # Square Connect v1 API Client
//!
//! The primary way to interact with the Connect v1 API is through the
//! [`SquareContext`] struct, which carries the environment, the merchant
//! access token, and the endpoint base URL.
//!
//! ```no_run
//! use oxisquare::{Environment, SquareContext};
//!
//! // Create from explicit parameters
//! let context = SquareContext::new(
//!     Environment::Production,
//!     "access_token".to_string(),
//! );
//!
//! // Create from the SQUARE_ACCESS_TOKEN environment variable
//! let context = SquareContext::new_from_env(Environment::Sandbox).unwrap();
//! ```
use crate::{APIResult, Environment};

/// Connection settings for the Square Connect v1 API.
///
/// A context is immutable after construction; the `with_*` builders return a
/// new value. Contexts are freely shareable across threads and every
/// operation made with one is an independent synchronous round-trip.
///
/// For the OAuth-scoped endpoints (`/oauth2/clients/...`), construct the
/// context with the application secret as its access token; the transport
/// selects the `Client` authorization scheme for those paths automatically.
#[derive(Debug, Clone)]
pub struct SquareContext {
    pub(crate) environment: Environment,
    pub(crate) access_token: String,
    pub(crate) base_url: String,
}

impl SquareContext {
    #[must_use]
    pub fn new(environment: Environment, access_token: String) -> Self {
        Self {
            environment,
            access_token,
            base_url: environment.endpoint_url().to_string(),
        }
    }

    /// Creates a context with the access token read from the
    /// `SQUARE_ACCESS_TOKEN` environment variable.
    ///
    /// # Errors
    ///
    /// `EnvVar` if the variable is missing or not valid unicode.
    pub fn new_from_env(environment: Environment) -> APIResult<Self> {
        let access_token = std::env::var("SQUARE_ACCESS_TOKEN")?;
        Ok(Self::new(environment, access_token))
    }

    /// Returns a new context with the given access token, e.g. after a
    /// [`crate::oauth::renew_token`] call.
    #[must_use]
    pub fn with_access_token(self, access_token: String) -> Self {
        Self {
            access_token,
            ..self
        }
    }

    /// Overrides the endpoint base URL, e.g. to point at a local test server.
    #[must_use]
    pub fn with_base_url(self, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..self
        }
    }

    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    #[must_use]
    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub(crate) fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::SquareContext;
    use crate::Environment;

    #[test]
    fn url_for_joins_base_and_path() {
        let ctx = SquareContext::new(Environment::Production, "tok".to_string());
        assert_eq!(ctx.url_for("/v1/me"), "https://connect.squareup.com/v1/me");

        let ctx = ctx.with_base_url("http://127.0.0.1:8080/");
        assert_eq!(ctx.url_for("/v1/me"), "http://127.0.0.1:8080/v1/me");
    }
}
