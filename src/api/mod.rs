use axum::{Router, routing::get};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::models::Location;
use crate::state::SharedState;

mod error;
mod location;
mod movie;
mod restaurant;
mod weather;

pub use error::{ApiError, GENERIC_ERROR_BODY};

/// Every route takes its input through a single `data` query parameter.
/// `Option` keeps extraction from rejecting with a 400; a missing value is
/// turned into the uniform 500 by the handler instead.
#[derive(Debug, Deserialize)]
pub struct DataQuery {
    pub data: Option<String>,
}

impl DataQuery {
    fn require(&self) -> Result<&str, ApiError> {
        self.data
            .as_deref()
            .ok_or_else(|| ApiError::BadPayload("missing 'data' query parameter".to_string()))
    }

    /// The three child routes receive the already-resolved Location (with
    /// its database id) as JSON text; they never re-resolve the address.
    fn location(&self) -> Result<Location, ApiError> {
        let raw = self.require()?;
        serde_json::from_str(raw)
            .map_err(|e| ApiError::BadPayload(format!("invalid location payload: {e}")))
    }
}

pub fn router(state: Arc<SharedState>) -> Router {
    Router::new()
        .route("/location", get(location::get_location))
        .route("/weather", get(weather::get_weather))
        .route("/yelp", get(restaurant::get_restaurants))
        .route("/movies", get(movie::get_movies))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
