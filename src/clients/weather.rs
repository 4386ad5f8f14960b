use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;

const FORECAST_API: &str = "https://api.darksky.net/forecast";

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: Option<DailyBlock>,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    #[serde(default)]
    data: Vec<DailyForecast>,
}

/// One day of the upstream daily forecast.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyForecast {
    pub summary: Option<String>,
    /// Unix timestamp of the forecast day.
    pub time: i64,
}

#[async_trait::async_trait]
pub trait ForecastApi: Send + Sync {
    async fn daily_forecast(&self, latitude: f64, longitude: f64) -> Result<Vec<DailyForecast>>;
}

#[derive(Clone)]
pub struct DarkSkyClient {
    client: Client,
    api_key: String,
}

impl DarkSkyClient {
    pub const fn new(client: Client, api_key: String) -> Self {
        Self { client, api_key }
    }
}

#[async_trait::async_trait]
impl ForecastApi for DarkSkyClient {
    async fn daily_forecast(&self, latitude: f64, longitude: f64) -> Result<Vec<DailyForecast>> {
        // Key rides in the path on this API, not the query string.
        let url = format!("{}/{}/{},{}", FORECAST_API, self.api_key, latitude, longitude);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Weather API error: {} - {}", status, body));
        }

        let response: ForecastResponse = response.json().await?;

        Ok(response.daily.map(|d| d.data).unwrap_or_default())
    }
}
