use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};
use wttr_proxy_core::{CurrentWeather, ForecastReport, shape};

use crate::app::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct CityQuery {
    /// Name of the city to look up.
    pub city: String,
}

/// Static usage document, served regardless of upstream state.
pub async fn home() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the wttr.in weather proxy",
        "usage": {
            "current_weather": "/weather?city=CityName",
            "forecast": "/forecast?city=CityName",
        },
        "example": {
            "current_weather": "/weather?city=London",
            "forecast": "/forecast?city=London",
        },
    }))
}

/// Live current conditions for a city.
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> Result<Json<CurrentWeather>, ApiError> {
    let report = state.provider.fetch(&query.city).await?;
    let snapshot = shape::current_weather(&query.city, &report)?;

    Ok(Json(snapshot))
}

/// 3-day forecast for a city.
pub async fn get_forecast(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> Result<Json<ForecastReport>, ApiError> {
    let report = state.provider.fetch(&query.city).await?;
    let forecast = shape::forecast(&query.city, &report)?;

    Ok(Json(forecast))
}
