use std::sync::Arc;
use tracing::{debug, info};

use super::{CacheLookup, LookupError};
use crate::clients::Geocoder;
use crate::db::{LocationRepository, Store};
use crate::models::Location;

/// Resolves free-text addresses, caching one row per distinct search string.
/// Unlike the list resources, the insert here is awaited and fatal on
/// failure: the generated id is the key for every downstream lookup.
pub struct LocationService {
    repo: LocationRepository,
    geocoder: Arc<dyn Geocoder>,
}

impl LocationService {
    pub fn new(store: &Store, geocoder: Arc<dyn Geocoder>) -> Self {
        Self {
            repo: LocationRepository::new(store.conn.clone()),
            geocoder,
        }
    }

    pub async fn resolve(&self, search_query: &str) -> Result<Location, LookupError> {
        let rows = self
            .repo
            .find_by_query(search_query)
            .await
            .map_err(|e| LookupError::database(&e))?;

        match CacheLookup::from_rows(rows) {
            CacheLookup::Hit(mut rows) => {
                debug!(search_query, "location cache hit");
                Ok(Location::from(rows.remove(0)))
            }
            CacheLookup::Miss => {
                let candidates = self
                    .geocoder
                    .geocode(search_query)
                    .await
                    .map_err(|e| LookupError::upstream("geocoder", &e))?;

                let Some(candidate) = candidates.first() else {
                    return Err(LookupError::NoResults(search_query.to_string()));
                };

                let mut location = Location::from_candidate(search_query, candidate);
                location.id = self
                    .repo
                    .insert(&location)
                    .await
                    .map_err(|e| LookupError::database(&e))?;

                info!(search_query, id = location.id, "location fetched and cached");
                Ok(location)
            }
        }
    }
}
