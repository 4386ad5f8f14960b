use serde::{Deserialize, Serialize};

use crate::clients::geocode::GeocodeCandidate;
use crate::entities::locations;

/// A resolved place. The id is database-assigned; callers pass the whole
/// record (id included) back in when asking for weather/restaurants/movies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub id: i32,
    pub search_query: String,
    pub formatted_query: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Normalizes the first geocoder candidate for `search_query`. The id is
    /// left at zero until the row is persisted.
    pub fn from_candidate(search_query: &str, candidate: &GeocodeCandidate) -> Self {
        Self {
            id: 0,
            search_query: search_query.to_string(),
            formatted_query: candidate.formatted_address.clone(),
            latitude: candidate.geometry.location.lat,
            longitude: candidate.geometry.location.lng,
        }
    }
}

impl From<locations::Model> for Location {
    fn from(row: locations::Model) -> Self {
        Self {
            id: row.id,
            search_query: row.search_query,
            formatted_query: row.formatted_query,
            latitude: row.latitude,
            longitude: row.longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::geocode::{Geometry, LatLng};

    #[test]
    fn test_from_candidate() {
        let candidate = GeocodeCandidate {
            formatted_address: Some("Bellevue, WA 98005, USA".to_string()),
            geometry: Geometry {
                location: LatLng {
                    lat: 47.615,
                    lng: -122.168,
                },
            },
        };

        let location = Location::from_candidate("98005", &candidate);
        assert_eq!(location.id, 0);
        assert_eq!(location.search_query, "98005");
        assert_eq!(
            location.formatted_query.as_deref(),
            Some("Bellevue, WA 98005, USA")
        );
        assert_eq!(location.latitude, 47.615);
        assert_eq!(location.longitude, -122.168);
    }

    #[test]
    fn test_missing_formatted_address() {
        let candidate = GeocodeCandidate {
            formatted_address: None,
            geometry: Geometry {
                location: LatLng { lat: 0.0, lng: 0.0 },
            },
        };

        let location = Location::from_candidate("nowhere", &candidate);
        assert_eq!(location.formatted_query, None);
    }
}
