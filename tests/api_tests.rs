use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use cityscout::api::{self, GENERIC_ERROR_BODY};
use cityscout::clients::geocode::{GeocodeCandidate, Geocoder, Geometry, LatLng};
use cityscout::clients::moviedb::{MovieResult, MovieSearch};
use cityscout::clients::weather::{DailyForecast, ForecastApi};
use cityscout::clients::yelp::{Business, BusinessSearch};
use cityscout::config::Config;
use cityscout::db::Store;
use cityscout::models::Location;
use cityscout::state::SharedState;

struct StubGeocoder {
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl Geocoder for StubGeocoder {
    async fn geocode(&self, _address: &str) -> Result<Vec<GeocodeCandidate>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![GeocodeCandidate {
            formatted_address: Some("Bellevue, WA 98005, USA".to_string()),
            geometry: Geometry {
                location: LatLng {
                    lat: 47.615,
                    lng: -122.168,
                },
            },
        }])
    }
}

struct StubForecast;

#[async_trait::async_trait]
impl ForecastApi for StubForecast {
    async fn daily_forecast(&self, _latitude: f64, _longitude: f64) -> Result<Vec<DailyForecast>> {
        Ok(vec![DailyForecast {
            summary: Some("Partly cloudy".to_string()),
            time: 86_400,
        }])
    }
}

struct StubBusinesses;

#[async_trait::async_trait]
impl BusinessSearch for StubBusinesses {
    async fn search_businesses(&self, _location: &str) -> Result<Vec<Business>> {
        Ok(vec![Business {
            name: Some("Chez Test".to_string()),
            image_url: None,
            price: Some("$$".to_string()),
            rating: Some(4.5),
            url: None,
        }])
    }
}

struct StubMovies;

#[async_trait::async_trait]
impl MovieSearch for StubMovies {
    async fn search_movies(&self, _query: &str) -> Result<Vec<MovieResult>> {
        Ok(vec![MovieResult {
            title: Some("Bellevue".to_string()),
            overview: Some("A town with a past.".to_string()),
            vote_average: Some(6.8),
            vote_count: Some(42),
            poster_path: Some("/abc.jpg".to_string()),
            popularity: Some(1.9),
            release_date: Some("2017-02-20".to_string()),
        }])
    }
}

async fn spawn_app() -> (Router, Arc<StubGeocoder>) {
    let mut config = Config::default();
    config.database.url = "sqlite::memory:".to_string();

    let store = Store::new(&config.database.url)
        .await
        .expect("in-memory store");

    let geocoder = Arc::new(StubGeocoder {
        calls: AtomicUsize::new(0),
    });

    let state = Arc::new(SharedState::with_clients(
        config,
        store,
        geocoder.clone(),
        Arc::new(StubForecast),
        Arc::new(StubBusinesses),
        Arc::new(StubMovies),
    ));

    (api::router(state), geocoder)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

async fn resolve_location(app: &Router) -> Location {
    let (status, body) = get(app, "/location?data=98005").await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).expect("location json")
}

#[tokio::test]
async fn test_location_roundtrip() {
    let (app, geocoder) = spawn_app().await;

    let first = resolve_location(&app).await;
    assert!(first.id > 0);
    assert_eq!(first.search_query, "98005");
    assert_eq!(geocoder.calls.load(Ordering::SeqCst), 1);

    // Second request is served from the store.
    let second = resolve_location(&app).await;
    assert_eq!(second, first);
    assert_eq!(geocoder.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_missing_data_param_yields_fixed_500() {
    let (app, _) = spawn_app().await;

    for uri in ["/location", "/weather", "/yelp", "/movies"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, GENERIC_ERROR_BODY.as_bytes());
    }
}

#[tokio::test]
async fn test_unparseable_location_payload_yields_fixed_500() {
    let (app, _) = spawn_app().await;

    let (status, body) = get(&app, "/weather?data=not-json").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, GENERIC_ERROR_BODY.as_bytes());
}

#[tokio::test]
async fn test_weather_for_resolved_location() {
    let (app, _) = spawn_app().await;

    let location = resolve_location(&app).await;
    let payload = urlencoding::encode_binary(serde_json::to_string(&location).unwrap().as_bytes())
        .into_owned();

    let (status, body) = get(&app, &format!("/weather?data={payload}")).await;
    assert_eq!(status, StatusCode::OK);

    let entries: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(entries[0]["forecast"], "Partly cloudy");
    assert_eq!(entries[0]["time"], "1970-01-02");

    // Same payload again: served from the store, same shape.
    let (status, second) = get(&app, &format!("/weather?data={payload}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second, body);
}

#[tokio::test]
async fn test_yelp_and_movies_for_resolved_location() {
    let (app, _) = spawn_app().await;

    let location = resolve_location(&app).await;
    let payload = urlencoding::encode_binary(serde_json::to_string(&location).unwrap().as_bytes())
        .into_owned();

    let (status, body) = get(&app, &format!("/yelp?data={payload}")).await;
    assert_eq!(status, StatusCode::OK);
    let entries: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(entries[0]["name"], "Chez Test");
    assert_eq!(entries[0]["price"], "$$");

    let (status, body) = get(&app, &format!("/movies?data={payload}")).await;
    assert_eq!(status, StatusCode::OK);
    let entries: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(entries[0]["title"], "Bellevue");
    assert_eq!(
        entries[0]["image_url"],
        "https://image.tmdb.org/t/p/w200_and_h300_bestv2//abc.jpg"
    );
}
