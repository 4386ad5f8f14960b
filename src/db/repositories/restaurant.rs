use anyhow::Result;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::entities::{prelude::Restaurants, restaurants};
use crate::models::RestaurantEntry;

pub struct RestaurantRepository {
    conn: DatabaseConnection,
}

impl RestaurantRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn find_by_location(&self, location_id: i32) -> Result<Vec<restaurants::Model>> {
        let rows = Restaurants::find()
            .filter(restaurants::Column::LocationId.eq(location_id))
            .all(&self.conn)
            .await?;

        Ok(rows)
    }

    pub async fn insert(&self, location_id: i32, entry: &RestaurantEntry) -> Result<()> {
        let active = restaurants::ActiveModel {
            name: Set(entry.name.clone()),
            image_url: Set(entry.image_url.clone()),
            price: Set(entry.price.clone()),
            rating: Set(entry.rating),
            url: Set(entry.url.clone()),
            location_id: Set(location_id),
            ..Default::default()
        };

        Restaurants::insert(active).exec(&self.conn).await?;

        Ok(())
    }
}
