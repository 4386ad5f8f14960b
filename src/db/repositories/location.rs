use anyhow::Result;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::entities::{locations, prelude::Locations};
use crate::models::Location;

pub struct LocationRepository {
    conn: DatabaseConnection,
}

impl LocationRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Exact-match lookup on the raw search text. Spelling variants of the
    /// same place are distinct cache keys.
    pub async fn find_by_query(&self, search_query: &str) -> Result<Vec<locations::Model>> {
        let rows = Locations::find()
            .filter(locations::Column::SearchQuery.eq(search_query))
            .all(&self.conn)
            .await?;

        Ok(rows)
    }

    /// Inserts and returns the generated id; callers need it for child rows.
    pub async fn insert(&self, record: &Location) -> Result<i32> {
        let active = locations::ActiveModel {
            search_query: Set(record.search_query.clone()),
            formatted_query: Set(record.formatted_query.clone()),
            latitude: Set(record.latitude),
            longitude: Set(record.longitude),
            ..Default::default()
        };

        let result = Locations::insert(active).exec(&self.conn).await?;

        Ok(result.last_insert_id)
    }
}
