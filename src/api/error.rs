use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use crate::services::LookupError;

/// The one and only failure body. Clients get no more detail than this,
/// whatever actually went wrong; the cause goes to the logs.
pub const GENERIC_ERROR_BODY: &str = "This location is not a valid input";

#[derive(Debug)]
pub enum ApiError {
    Upstream { service: String, message: String },

    NoResults(String),

    Database(String),

    BadPayload(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upstream { service, message } => write!(f, "{} error: {}", service, message),
            Self::NoResults(query) => write!(f, "No results for: {}", query),
            Self::Database(msg) => write!(f, "Database error: {}", msg),
            Self::BadPayload(msg) => write!(f, "Bad payload: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::Upstream { service, message } => Self::Upstream {
                service: service.to_string(),
                message,
            },
            LookupError::NoResults(query) => Self::NoResults(query),
            LookupError::Database(msg) => Self::Database(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Upstream { service, message } => {
                tracing::error!("{} API error: {}", service, message);
            }
            Self::NoResults(query) => {
                tracing::warn!("No geocoder results for '{}'", query);
            }
            Self::Database(msg) => {
                tracing::error!("Database error: {}", msg);
            }
            Self::BadPayload(msg) => {
                tracing::warn!("Bad request payload: {}", msg);
            }
        }

        (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR_BODY).into_response()
    }
}
