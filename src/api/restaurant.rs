use axum::{
    Json,
    extract::{Query, State},
};
use std::sync::Arc;

use super::{ApiError, DataQuery};
use crate::models::RestaurantEntry;
use crate::state::SharedState;

pub async fn get_restaurants(
    State(state): State<Arc<SharedState>>,
    Query(query): Query<DataQuery>,
) -> Result<Json<Vec<RestaurantEntry>>, ApiError> {
    let location = query.location()?;

    let entries = state.restaurants.restaurants(&location).await?;

    Ok(Json(entries))
}
