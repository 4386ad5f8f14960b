use anyhow::Result;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::entities::{movies, prelude::Movies};
use crate::models::MovieEntry;

pub struct MovieRepository {
    conn: DatabaseConnection,
}

impl MovieRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn find_by_location(&self, location_id: i32) -> Result<Vec<movies::Model>> {
        let rows = Movies::find()
            .filter(movies::Column::LocationId.eq(location_id))
            .all(&self.conn)
            .await?;

        Ok(rows)
    }

    pub async fn insert(&self, location_id: i32, entry: &MovieEntry) -> Result<()> {
        let active = movies::ActiveModel {
            title: Set(entry.title.clone()),
            overview: Set(entry.overview.clone()),
            average_votes: Set(entry.average_votes),
            total_votes: Set(entry.total_votes),
            image_url: Set(entry.image_url.clone()),
            popularity: Set(entry.popularity),
            released_on: Set(entry.released_on.clone()),
            location_id: Set(location_id),
            ..Default::default()
        };

        Movies::insert(active).exec(&self.conn).await?;

        Ok(())
    }
}
