//! Reshapes parsed wttr.in documents into the public API schemas.

use crate::error::ShapeError;
use crate::model::{CurrentWeather, ForecastDay, ForecastReport, HourlySummary};
use crate::provider::wttr::WttrReport;

/// Days returned per forecast response (fewer if upstream supplies fewer).
const FORECAST_DAYS: usize = 3;

/// Stride through a day's hourly sequence: indices 0, 4, 8, ...
const HOURLY_STRIDE: usize = 4;

/// Current conditions: the first `current_condition` record, fields copied
/// verbatim.
pub fn current_weather(city: &str, report: &WttrReport) -> Result<CurrentWeather, ShapeError> {
    let current = report
        .current_condition
        .first()
        .ok_or(ShapeError::FieldMissing("current_condition"))?;

    let description = current
        .weather_desc
        .first()
        .ok_or(ShapeError::FieldMissing("weatherDesc"))?;

    Ok(CurrentWeather {
        city: title_case(city),
        temperature_c: current.temp_c.clone(),
        feels_like_c: current.feels_like_c.clone(),
        weather_desc: description.value.clone(),
        humidity: current.humidity.clone(),
        wind_speed_kmph: current.windspeed_kmph.clone(),
        pressure_mb: current.pressure.clone(),
    })
}

/// Forecast: the first three upstream days, each with its hourly sequence
/// sampled at a fixed stride.
pub fn forecast(city: &str, report: &WttrReport) -> Result<ForecastReport, ShapeError> {
    let mut days = Vec::new();

    for day in report.weather.iter().take(FORECAST_DAYS) {
        let astronomy = day
            .astronomy
            .first()
            .ok_or(ShapeError::FieldMissing("astronomy"))?;

        let hourly_summary = day
            .hourly
            .iter()
            .step_by(HOURLY_STRIDE)
            .map(|hour| {
                let description = hour
                    .weather_desc
                    .first()
                    .ok_or(ShapeError::FieldMissing("weatherDesc"))?;

                Ok(HourlySummary {
                    time: hour.time.clone(),
                    temp_c: hour.temp_c.clone(),
                    description: description.value.clone(),
                })
            })
            .collect::<Result<Vec<_>, ShapeError>>()?;

        days.push(ForecastDay {
            date: day.date.clone(),
            avg_temp_c: day.avgtemp_c.clone(),
            max_temp_c: day.maxtemp_c.clone(),
            min_temp_c: day.mintemp_c.clone(),
            sunrise: astronomy.sunrise.clone(),
            sunset: astronomy.sunset.clone(),
            hourly_summary,
        });
    }

    Ok(ForecastReport { city: title_case(city), forecast: days })
}

/// Title-case a city name: first letter of each whitespace-separated word
/// uppercased, the rest lowercased.
pub fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(days: usize, hours_per_day: usize) -> WttrReport {
        let weather: Vec<serde_json::Value> = (0..days)
            .map(|day| {
                let hourly: Vec<serde_json::Value> = (0..hours_per_day)
                    .map(|hour| {
                        json!({
                            "time": format!("{}", hour * 100),
                            "tempC": format!("{}", 10 + hour),
                            "weatherDesc": [{ "value": "Sunny" }],
                        })
                    })
                    .collect();

                json!({
                    "date": format!("2024-06-{:02}", day + 1),
                    "avgtempC": "18",
                    "maxtempC": "22",
                    "mintempC": "14",
                    "astronomy": [{ "sunrise": "05:01 AM", "sunset": "09:12 PM" }],
                    "hourly": hourly,
                })
            })
            .collect();

        serde_json::from_value(json!({
            "current_condition": [{
                "temp_C": "17",
                "FeelsLikeC": "16",
                "weatherDesc": [{ "value": "Partly cloudy" }],
                "humidity": "68",
                "windspeedKmph": "13",
                "pressure": "1012",
            }],
            "weather": weather,
        }))
        .expect("test document must deserialize")
    }

    #[test]
    fn current_weather_copies_all_fields_verbatim() {
        let report = document(1, 8);
        let snapshot = current_weather("london", &report).expect("shaping must succeed");

        assert_eq!(snapshot.city, "London");
        assert_eq!(snapshot.temperature_c, "17");
        assert_eq!(snapshot.feels_like_c, "16");
        assert_eq!(snapshot.weather_desc, "Partly cloudy");
        assert_eq!(snapshot.humidity, "68");
        assert_eq!(snapshot.wind_speed_kmph, "13");
        assert_eq!(snapshot.pressure_mb, "1012");
    }

    #[test]
    fn current_weather_errors_without_a_current_condition() {
        let mut report = document(1, 8);
        report.current_condition.clear();

        let err = current_weather("london", &report).unwrap_err();
        assert!(matches!(err, ShapeError::FieldMissing("current_condition")));
    }

    #[test]
    fn forecast_takes_at_most_three_days() {
        let report = document(5, 24);
        let shaped = forecast("paris", &report).expect("shaping must succeed");

        assert_eq!(shaped.city, "Paris");
        assert_eq!(shaped.forecast.len(), 3);
    }

    #[test]
    fn forecast_keeps_fewer_days_when_upstream_has_fewer() {
        let report = document(2, 8);
        let shaped = forecast("paris", &report).expect("shaping must succeed");

        assert_eq!(shaped.forecast.len(), 2);
    }

    #[test]
    fn hourly_summary_samples_every_fourth_entry() {
        let report = document(1, 24);
        let shaped = forecast("paris", &report).expect("shaping must succeed");

        let times: Vec<&str> = shaped.forecast[0]
            .hourly_summary
            .iter()
            .map(|hour| hour.time.as_str())
            .collect();

        assert_eq!(times, ["0", "400", "800", "1200", "1600", "2000"]);
    }

    #[test]
    fn hourly_summary_length_is_ceil_of_len_over_stride() {
        // 9 entries at stride 4 hit indices 0, 4 and 8.
        let report = document(1, 9);
        let shaped = forecast("paris", &report).expect("shaping must succeed");

        assert_eq!(shaped.forecast[0].hourly_summary.len(), 3);
    }

    #[test]
    fn forecast_day_carries_astronomy_and_temps() {
        let report = document(1, 8);
        let shaped = forecast("paris", &report).expect("shaping must succeed");
        let day = &shaped.forecast[0];

        assert_eq!(day.date, "2024-06-01");
        assert_eq!(day.avg_temp_c, "18");
        assert_eq!(day.max_temp_c, "22");
        assert_eq!(day.min_temp_c, "14");
        assert_eq!(day.sunrise, "05:01 AM");
        assert_eq!(day.sunset, "09:12 PM");
    }

    #[test]
    fn forecast_errors_without_an_astronomy_record() {
        let mut report = document(1, 8);
        report.weather[0].astronomy.clear();

        let err = forecast("paris", &report).unwrap_err();
        assert!(matches!(err, ShapeError::FieldMissing("astronomy")));
    }

    #[test]
    fn title_case_handles_mixed_input() {
        assert_eq!(title_case("london"), "London");
        assert_eq!(title_case("SAN FRANCISCO"), "San Francisco");
        assert_eq!(title_case("nEw yOrK"), "New York");
        assert_eq!(title_case(""), "");
    }
}
