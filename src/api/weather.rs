use axum::{
    Json,
    extract::{Query, State},
};
use std::sync::Arc;

use super::{ApiError, DataQuery};
use crate::models::WeatherEntry;
use crate::state::SharedState;

pub async fn get_weather(
    State(state): State<Arc<SharedState>>,
    Query(query): Query<DataQuery>,
) -> Result<Json<Vec<WeatherEntry>>, ApiError> {
    let location = query.location()?;

    let entries = state.weather.forecasts(&location).await?;

    Ok(Json(entries))
}
