use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;

const MOVIEDB_API: &str = "https://api.themoviedb.org/3/search/movie";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<MovieResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovieResult {
    pub title: Option<String>,
    pub overview: Option<String>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<i32>,
    pub poster_path: Option<String>,
    pub popularity: Option<f64>,
    pub release_date: Option<String>,
}

#[async_trait::async_trait]
pub trait MovieSearch: Send + Sync {
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieResult>>;
}

#[derive(Clone)]
pub struct MovieDbClient {
    client: Client,
    api_key: String,
}

impl MovieDbClient {
    pub const fn new(client: Client, api_key: String) -> Self {
        Self { client, api_key }
    }
}

#[async_trait::async_trait]
impl MovieSearch for MovieDbClient {
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieResult>> {
        let url = format!(
            "{}?api_key={}&query={}",
            MOVIEDB_API,
            self.api_key,
            urlencoding::encode(query)
        );
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("TMDb API error: {} - {}", status, body));
        }

        let response: SearchResponse = response.json().await?;

        Ok(response.results)
    }
}
