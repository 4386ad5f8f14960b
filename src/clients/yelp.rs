use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;

const YELP_API: &str = "https://api.yelp.com/v3/businesses/search";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    businesses: Vec<Business>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Business {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub price: Option<String>,
    pub rating: Option<f64>,
    pub url: Option<String>,
}

#[async_trait::async_trait]
pub trait BusinessSearch: Send + Sync {
    async fn search_businesses(&self, location: &str) -> Result<Vec<Business>>;
}

#[derive(Clone)]
pub struct YelpClient {
    client: Client,
    api_key: String,
}

impl YelpClient {
    pub const fn new(client: Client, api_key: String) -> Self {
        Self { client, api_key }
    }
}

#[async_trait::async_trait]
impl BusinessSearch for YelpClient {
    async fn search_businesses(&self, location: &str) -> Result<Vec<Business>> {
        let url = format!("{}?location={}", YELP_API, urlencoding::encode(location));
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Yelp API error: {} - {}", status, body));
        }

        let response: SearchResponse = response.json().await?;

        Ok(response.businesses)
    }
}
