use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::error::FetchError;

use super::WeatherProvider;

/// Client for the wttr.in JSON endpoint (`GET /<city>?format=j1`).
#[derive(Debug, Clone)]
pub struct WttrProvider {
    base_url: String,
    http: Client,
}

impl WttrProvider {
    /// Build a provider whose requests are bounded by `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { base_url: base_url.into(), http })
    }

    /// Single attempt, no retries. Non-2xx keeps the upstream status; a 2xx
    /// body that fails to parse is reported as malformed.
    async fn fetch_report(&self, city: &str) -> Result<WttrReport, FetchError> {
        let url = format!("{}/{}?format=j1", self.base_url, urlencoding::encode(city));

        let res = self.http.get(&url).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::UpstreamStatus { status: status.as_u16() });
        }

        let body = res.text().await?;
        let report: WttrReport = serde_json::from_str(&body)?;

        Ok(report)
    }
}

#[async_trait]
impl WeatherProvider for WttrProvider {
    async fn fetch(&self, city: &str) -> Result<WttrReport, FetchError> {
        self.fetch_report(city).await
    }
}

/// Parsed view of the wttr.in `format=j1` document.
///
/// Only the fields the proxy reshapes are declared; everything else in the
/// (large) upstream schema is ignored by serde.
#[derive(Debug, Clone, Deserialize)]
pub struct WttrReport {
    pub current_condition: Vec<CurrentCondition>,
    pub weather: Vec<DailyForecast>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentCondition {
    #[serde(rename = "temp_C")]
    pub temp_c: String,
    #[serde(rename = "FeelsLikeC")]
    pub feels_like_c: String,
    #[serde(rename = "weatherDesc")]
    pub weather_desc: Vec<DescriptionValue>,
    pub humidity: String,
    #[serde(rename = "windspeedKmph")]
    pub windspeed_kmph: String,
    pub pressure: String,
}

/// wttr.in wraps description strings in `[{"value": ...}]`.
#[derive(Debug, Clone, Deserialize)]
pub struct DescriptionValue {
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyForecast {
    pub date: String,
    #[serde(rename = "avgtempC")]
    pub avgtemp_c: String,
    #[serde(rename = "maxtempC")]
    pub maxtemp_c: String,
    #[serde(rename = "mintempC")]
    pub mintemp_c: String,
    pub astronomy: Vec<Astronomy>,
    pub hourly: Vec<HourlyEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Astronomy {
    pub sunrise: String,
    pub sunset: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HourlyEntry {
    pub time: String,
    #[serde(rename = "tempC")]
    pub temp_c: String,
    #[serde(rename = "weatherDesc")]
    pub weather_desc: Vec<DescriptionValue>,
}
