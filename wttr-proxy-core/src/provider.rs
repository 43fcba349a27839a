use crate::error::FetchError;
use async_trait::async_trait;
use std::fmt::Debug;

pub mod wttr;

pub use wttr::{WttrProvider, WttrReport};

/// A source of raw weather documents for a city.
///
/// The HTTP layer holds this as a trait object so handlers stay independent
/// of how the document is obtained.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch(&self, city: &str) -> Result<WttrReport, FetchError>;
}
