//! Read-through cache coordinators, one per resource.
//!
//! Each service probes its repository for previously persisted rows, and on
//! a miss fetches from the upstream client, normalizes, persists, and
//! returns the in-memory records without a second read.

use thiserror::Error;

pub mod location;
pub mod movie;
pub mod restaurant;
pub mod weather;

pub use location::LocationService;
pub use movie::MovieService;
pub use restaurant::RestaurantService;
pub use weather::WeatherService;

/// Result of the persisted-rows probe, consumed by plain branching.
pub enum CacheLookup<T> {
    Hit(Vec<T>),
    Miss,
}

impl<T> CacheLookup<T> {
    pub fn from_rows(rows: Vec<T>) -> Self {
        if rows.is_empty() {
            Self::Miss
        } else {
            Self::Hit(rows)
        }
    }
}

/// The three ways a lookup can fail. Handlers collapse all of them to the
/// same generic 500; the distinction only reaches the logs.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("{service} fetch failed: {message}")]
    Upstream {
        service: &'static str,
        message: String,
    },

    #[error("no geocoder results for '{0}'")]
    NoResults(String),

    #[error("database error: {0}")]
    Database(String),
}

impl LookupError {
    pub fn upstream(service: &'static str, err: &anyhow::Error) -> Self {
        Self::Upstream {
            service,
            message: err.to_string(),
        }
    }

    pub fn database(err: &anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_lookup_tagging() {
        assert!(matches!(
            CacheLookup::from_rows(vec![1, 2]),
            CacheLookup::Hit(_)
        ));
        assert!(matches!(
            CacheLookup::<i32>::from_rows(vec![]),
            CacheLookup::Miss
        ));
    }
}
