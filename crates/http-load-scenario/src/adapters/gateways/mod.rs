#[cfg(feature = "axum")]
mod axum;
#[cfg(feature = "goose")]
mod goose;
#[cfg(feature = "reqwest")]
mod reqwest;

#[cfg(feature = "axum")]
pub use self::axum::Axum;
#[cfg(feature = "goose")]
pub use self::goose::website_user_scenario;
#[cfg(feature = "reqwest")]
pub use self::reqwest::Reqwest;
