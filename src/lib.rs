/*
 * A rust library for interacting with the Square Connect v1 API.
 *
 * For more information, you can check out their documentation at:
 * https://docs.connect.squareup.com/api/connect/v1/
 */
#![warn(clippy::pedantic)]

pub mod batch;
pub mod client;
pub use client::{NextPage, SquareContext};
use error::APIError;
use serde::{Deserialize, Serialize};
pub mod error;
pub mod oauth;
pub mod webhooks;

pub mod types {
    pub use square_types::*;
}

pub mod functions;

pub type APIResult<T> = Result<T, APIError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Environment {
    Production,
    #[default]
    Sandbox,
}

impl Environment {
    #[inline]
    #[must_use]
    pub fn endpoint_url(&self) -> &'static str {
        match self {
            Environment::Production => "https://connect.squareup.com",
            Environment::Sandbox => "https://connect.squareupsandbox.com",
        }
    }
}
