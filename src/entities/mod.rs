pub mod prelude;

pub mod locations;
pub mod movies;
pub mod restaurants;
pub mod weathers;
