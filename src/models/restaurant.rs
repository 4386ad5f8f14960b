use serde::{Deserialize, Serialize};

use crate::clients::yelp::Business;
use crate::entities::restaurants;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantEntry {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub price: Option<String>,
    pub rating: Option<f64>,
    pub url: Option<String>,
}

impl RestaurantEntry {
    pub fn from_business(business: &Business) -> Self {
        Self {
            name: business.name.clone(),
            image_url: business.image_url.clone(),
            price: business.price.clone(),
            rating: business.rating,
            url: business.url.clone(),
        }
    }
}

impl From<restaurants::Model> for RestaurantEntry {
    fn from(row: restaurants::Model) -> Self {
        Self {
            name: row.name,
            image_url: row.image_url,
            price: row.price,
            rating: row.rating,
            url: row.url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_business() {
        // Yelp omits price (and sometimes image) for unrated listings.
        let business = Business {
            name: Some("Chez Test".to_string()),
            image_url: None,
            price: None,
            rating: Some(4.5),
            url: None,
        };

        let entry = RestaurantEntry::from_business(&business);
        assert_eq!(entry.name.as_deref(), Some("Chez Test"));
        assert_eq!(entry.price, None);
        assert_eq!(entry.rating, Some(4.5));
    }
}
