use anyhow::Result;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::entities::{prelude::Weathers, weathers};
use crate::models::WeatherEntry;

pub struct WeatherRepository {
    conn: DatabaseConnection,
}

impl WeatherRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn find_by_location(&self, location_id: i32) -> Result<Vec<weathers::Model>> {
        let rows = Weathers::find()
            .filter(weathers::Column::LocationId.eq(location_id))
            .all(&self.conn)
            .await?;

        Ok(rows)
    }

    pub async fn insert(&self, location_id: i32, entry: &WeatherEntry) -> Result<()> {
        let active = weathers::ActiveModel {
            forecast: Set(entry.forecast.clone()),
            time: Set(entry.time.clone()),
            location_id: Set(location_id),
            ..Default::default()
        };

        Weathers::insert(active).exec(&self.conn).await?;

        Ok(())
    }
}
