use std::sync::Arc;
use tracing::{debug, info, warn};

use super::{CacheLookup, LookupError};
use crate::clients::MovieSearch;
use crate::db::{MovieRepository, Store};
use crate::models::{Location, MovieEntry};

pub struct MovieService {
    repo: MovieRepository,
    client: Arc<dyn MovieSearch>,
}

impl MovieService {
    pub fn new(store: &Store, client: Arc<dyn MovieSearch>) -> Self {
        Self {
            repo: MovieRepository::new(store.conn.clone()),
            client,
        }
    }

    pub async fn movies(&self, location: &Location) -> Result<Vec<MovieEntry>, LookupError> {
        let rows = self
            .repo
            .find_by_location(location.id)
            .await
            .map_err(|e| LookupError::database(&e))?;

        match CacheLookup::from_rows(rows) {
            CacheLookup::Hit(rows) => {
                debug!(location_id = location.id, "movie cache hit");
                Ok(rows.into_iter().map(MovieEntry::from).collect())
            }
            CacheLookup::Miss => {
                let results = self
                    .client
                    .search_movies(&location.search_query)
                    .await
                    .map_err(|e| LookupError::upstream("moviedb", &e))?;

                let entries: Vec<MovieEntry> =
                    results.iter().map(MovieEntry::from_result).collect();

                for entry in &entries {
                    if let Err(e) = self.repo.insert(location.id, entry).await {
                        warn!(location_id = location.id, error = %e, "movie row not persisted");
                    }
                }

                info!(
                    location_id = location.id,
                    count = entries.len(),
                    "movies fetched and cached"
                );
                Ok(entries)
            }
        }
    }
}
