use serde::{Deserialize, Serialize};

use crate::clients::moviedb::MovieResult;
use crate::entities::movies;

const POSTER_BASE: &str = "https://image.tmdb.org/t/p/w200_and_h300_bestv2/";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieEntry {
    pub title: Option<String>,
    pub overview: Option<String>,
    pub average_votes: Option<f64>,
    pub total_votes: Option<i32>,
    pub image_url: String,
    pub popularity: Option<f64>,
    pub released_on: Option<String>,
}

impl MovieEntry {
    pub fn from_result(movie: &MovieResult) -> Self {
        // A missing poster_path leaves the bare CDN base URL. That matches
        // the upstream contract this service has always exposed.
        let image_url = format!(
            "{}{}",
            POSTER_BASE,
            movie.poster_path.as_deref().unwrap_or_default()
        );

        Self {
            title: movie.title.clone(),
            overview: movie.overview.clone(),
            average_votes: movie.vote_average,
            total_votes: movie.vote_count,
            image_url,
            popularity: movie.popularity,
            released_on: movie.release_date.clone(),
        }
    }
}

impl From<movies::Model> for MovieEntry {
    fn from(row: movies::Model) -> Self {
        Self {
            title: row.title,
            overview: row.overview,
            average_votes: row.average_votes,
            total_votes: row.total_votes,
            image_url: row.image_url,
            popularity: row.popularity,
            released_on: row.released_on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MovieResult {
        MovieResult {
            title: Some("Bellevue".to_string()),
            overview: Some("A town with a past.".to_string()),
            vote_average: Some(6.8),
            vote_count: Some(42),
            poster_path: Some("/abc123.jpg".to_string()),
            popularity: Some(1.9),
            release_date: Some("2017-02-20".to_string()),
        }
    }

    #[test]
    fn test_poster_url_templating() {
        let entry = MovieEntry::from_result(&sample());
        assert_eq!(
            entry.image_url,
            "https://image.tmdb.org/t/p/w200_and_h300_bestv2//abc123.jpg"
        );
    }

    #[test]
    fn test_missing_poster_leaves_base_url() {
        let mut movie = sample();
        movie.poster_path = None;

        let entry = MovieEntry::from_result(&movie);
        assert_eq!(entry.image_url, POSTER_BASE);
    }

    #[test]
    fn test_field_mapping() {
        let entry = MovieEntry::from_result(&sample());
        assert_eq!(entry.title.as_deref(), Some("Bellevue"));
        assert_eq!(entry.average_votes, Some(6.8));
        assert_eq!(entry.total_votes, Some(42));
        assert_eq!(entry.released_on.as_deref(), Some("2017-02-20"));
    }
}
