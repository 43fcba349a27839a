use serde::{Deserialize, Serialize};

/// Current conditions for a city, reshaped from the upstream document.
///
/// Values are copied verbatim from wttr.in, which reports them as strings.
/// No unit conversion and no range validation happen here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub city: String,
    #[serde(rename = "temperature_C")]
    pub temperature_c: String,
    #[serde(rename = "feels_like_C")]
    pub feels_like_c: String,
    pub weather_desc: String,
    pub humidity: String,
    pub wind_speed_kmph: String,
    pub pressure_mb: String,
}

/// One sampled hour of a forecast day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlySummary {
    pub time: String,
    #[serde(rename = "temp_C")]
    pub temp_c: String,
    pub description: String,
}

/// One reshaped day-ahead entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: String,
    #[serde(rename = "avg_temp_C")]
    pub avg_temp_c: String,
    #[serde(rename = "max_temp_C")]
    pub max_temp_c: String,
    #[serde(rename = "min_temp_C")]
    pub min_temp_c: String,
    pub sunrise: String,
    pub sunset: String,
    pub hourly_summary: Vec<HourlySummary>,
}

/// Forecast response body: the city plus up to three day entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastReport {
    pub city: String,
    pub forecast: Vec<ForecastDay>,
}
