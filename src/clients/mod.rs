pub mod geocode;
pub mod moviedb;
pub mod weather;
pub mod yelp;

pub use geocode::{Geocoder, GoogleGeocodeClient};
pub use moviedb::{MovieDbClient, MovieSearch};
pub use weather::{DarkSkyClient, ForecastApi};
pub use yelp::{BusinessSearch, YelpClient};
