pub mod location;
pub mod movie;
pub mod restaurant;
pub mod weather;
