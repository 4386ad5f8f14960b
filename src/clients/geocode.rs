use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;

const GEOCODE_API: &str = "https://maps.googleapis.com/maps/api/geocode/json";

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeCandidate>,
}

/// One geocoder match. An empty candidate list is not an error at this
/// layer; the caller decides what zero matches means.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeCandidate {
    pub formatted_address: Option<String>,
    pub geometry: Geometry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[async_trait::async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, address: &str) -> Result<Vec<GeocodeCandidate>>;
}

#[derive(Clone)]
pub struct GoogleGeocodeClient {
    client: Client,
    api_key: String,
}

impl GoogleGeocodeClient {
    pub const fn new(client: Client, api_key: String) -> Self {
        Self { client, api_key }
    }
}

#[async_trait::async_trait]
impl Geocoder for GoogleGeocodeClient {
    async fn geocode(&self, address: &str) -> Result<Vec<GeocodeCandidate>> {
        let url = format!(
            "{}?address={}&key={}",
            GEOCODE_API,
            urlencoding::encode(address),
            self.api_key
        );
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Geocode API error: {} - {}", status, body));
        }

        let response: GeocodeResponse = response.json().await?;

        Ok(response.results)
    }
}
