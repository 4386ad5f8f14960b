use std::sync::Arc;

use crate::clients::{
    BusinessSearch, DarkSkyClient, ForecastApi, Geocoder, GoogleGeocodeClient, MovieDbClient,
    MovieSearch, YelpClient,
};
use crate::config::Config;
use crate::db::Store;
use crate::services::{LocationService, MovieService, RestaurantService, WeatherService};

/// One pooled HTTP client shared by every upstream call. Pooling only; there
/// is deliberately no request timeout on outbound calls.
fn build_shared_http_client() -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!("cityscout/", env!("CARGO_PKG_VERSION")))
        .pool_max_idle_per_host(10)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build shared HTTP client: {e}"))
}

#[derive(Clone)]
pub struct SharedState {
    pub config: Config,

    pub store: Store,

    pub locations: Arc<LocationService>,

    pub weather: Arc<WeatherService>,

    pub restaurants: Arc<RestaurantService>,

    pub movies: Arc<MovieService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::new(&config.database.url).await?;

        let http_client = build_shared_http_client()?;

        let geocoder = Arc::new(GoogleGeocodeClient::new(
            http_client.clone(),
            config.keys.geocode.clone(),
        ));
        let forecast = Arc::new(DarkSkyClient::new(
            http_client.clone(),
            config.keys.weather.clone(),
        ));
        let businesses = Arc::new(YelpClient::new(
            http_client.clone(),
            config.keys.yelp.clone(),
        ));
        let movie_search = Arc::new(MovieDbClient::new(
            http_client,
            config.keys.moviedb.clone(),
        ));

        Ok(Self::with_clients(
            config,
            store,
            geocoder,
            forecast,
            businesses,
            movie_search,
        ))
    }

    /// Injection constructor: tests swap the real clients for mocks here.
    pub fn with_clients(
        config: Config,
        store: Store,
        geocoder: Arc<dyn Geocoder>,
        forecast: Arc<dyn ForecastApi>,
        businesses: Arc<dyn BusinessSearch>,
        movie_search: Arc<dyn MovieSearch>,
    ) -> Self {
        let locations = Arc::new(LocationService::new(&store, geocoder));
        let weather = Arc::new(WeatherService::new(&store, forecast));
        let restaurants = Arc::new(RestaurantService::new(&store, businesses));
        let movies = Arc::new(MovieService::new(&store, movie_search));

        Self {
            config,
            store,
            locations,
            weather,
            restaurants,
            movies,
        }
    }
}
