use axum::{
    Json,
    extract::{Query, State},
};
use std::sync::Arc;

use super::{ApiError, DataQuery};
use crate::models::MovieEntry;
use crate::state::SharedState;

pub async fn get_movies(
    State(state): State<Arc<SharedState>>,
    Query(query): Query<DataQuery>,
) -> Result<Json<Vec<MovieEntry>>, ApiError> {
    let location = query.location()?;

    let entries = state.movies.movies(&location).await?;

    Ok(Json(entries))
}
