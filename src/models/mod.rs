pub mod location;
pub mod movie;
pub mod restaurant;
pub mod weather;

pub use location::Location;
pub use movie::MovieEntry;
pub use restaurant::RestaurantEntry;
pub use weather::WeatherEntry;
