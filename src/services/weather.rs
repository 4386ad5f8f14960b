use std::sync::Arc;
use tracing::{debug, info, warn};

use super::{CacheLookup, LookupError};
use crate::clients::ForecastApi;
use crate::db::{Store, WeatherRepository};
use crate::models::{Location, WeatherEntry};

pub struct WeatherService {
    repo: WeatherRepository,
    client: Arc<dyn ForecastApi>,
}

impl WeatherService {
    pub fn new(store: &Store, client: Arc<dyn ForecastApi>) -> Self {
        Self {
            repo: WeatherRepository::new(store.conn.clone()),
            client,
        }
    }

    pub async fn forecasts(&self, location: &Location) -> Result<Vec<WeatherEntry>, LookupError> {
        let rows = self
            .repo
            .find_by_location(location.id)
            .await
            .map_err(|e| LookupError::database(&e))?;

        match CacheLookup::from_rows(rows) {
            CacheLookup::Hit(rows) => {
                debug!(location_id = location.id, "weather cache hit");
                Ok(rows.into_iter().map(WeatherEntry::from).collect())
            }
            CacheLookup::Miss => {
                let days = self
                    .client
                    .daily_forecast(location.latitude, location.longitude)
                    .await
                    .map_err(|e| LookupError::upstream("weather", &e))?;

                let entries: Vec<WeatherEntry> =
                    days.iter().map(WeatherEntry::from_daily).collect();

                // Lossy on purpose: a failed row insert is logged and the
                // response still carries the in-memory entry. The cache will
                // simply miss that row again next time.
                for entry in &entries {
                    if let Err(e) = self.repo.insert(location.id, entry).await {
                        warn!(location_id = location.id, error = %e, "weather row not persisted");
                    }
                }

                info!(
                    location_id = location.id,
                    count = entries.len(),
                    "weather fetched and cached"
                );
                Ok(entries)
            }
        }
    }
}
