use axum::{
    Json,
    extract::{Query, State},
};
use std::sync::Arc;

use super::{ApiError, DataQuery};
use crate::models::Location;
use crate::state::SharedState;

pub async fn get_location(
    State(state): State<Arc<SharedState>>,
    Query(query): Query<DataQuery>,
) -> Result<Json<Location>, ApiError> {
    let search_query = query.require()?;

    let location = state.locations.resolve(search_query).await?;

    Ok(Json(location))
}
