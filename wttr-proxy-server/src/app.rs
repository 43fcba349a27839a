use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use wttr_proxy_core::WeatherProvider;

use crate::handler::{get_forecast, get_weather, home};

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn WeatherProvider>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/weather", get(get_weather))
        .route("/forecast", get(get_forecast))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
