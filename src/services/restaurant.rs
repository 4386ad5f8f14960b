use std::sync::Arc;
use tracing::{debug, info, warn};

use super::{CacheLookup, LookupError};
use crate::clients::BusinessSearch;
use crate::db::{RestaurantRepository, Store};
use crate::models::{Location, RestaurantEntry};

pub struct RestaurantService {
    repo: RestaurantRepository,
    client: Arc<dyn BusinessSearch>,
}

impl RestaurantService {
    pub fn new(store: &Store, client: Arc<dyn BusinessSearch>) -> Self {
        Self {
            repo: RestaurantRepository::new(store.conn.clone()),
            client,
        }
    }

    pub async fn restaurants(
        &self,
        location: &Location,
    ) -> Result<Vec<RestaurantEntry>, LookupError> {
        let rows = self
            .repo
            .find_by_location(location.id)
            .await
            .map_err(|e| LookupError::database(&e))?;

        match CacheLookup::from_rows(rows) {
            CacheLookup::Hit(rows) => {
                debug!(location_id = location.id, "restaurant cache hit");
                Ok(rows.into_iter().map(RestaurantEntry::from).collect())
            }
            CacheLookup::Miss => {
                // Yelp searches by the raw text, not the resolved coordinates.
                let businesses = self
                    .client
                    .search_businesses(&location.search_query)
                    .await
                    .map_err(|e| LookupError::upstream("yelp", &e))?;

                let entries: Vec<RestaurantEntry> = businesses
                    .iter()
                    .map(RestaurantEntry::from_business)
                    .collect();

                for entry in &entries {
                    if let Err(e) = self.repo.insert(location.id, entry).await {
                        warn!(location_id = location.id, error = %e, "restaurant row not persisted");
                    }
                }

                info!(
                    location_id = location.id,
                    count = entries.len(),
                    "restaurants fetched and cached"
                );
                Ok(entries)
            }
        }
    }
}
