//! Raw API response models
//!
//! Struct-of-arrays shapes exactly as the upstream APIs return them:
//! each block is keyed by variable name with a parallel `time` array.

use serde::Deserialize;

/// Raw forecast response
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub current: CurrentData,
    pub hourly: HourlyData,
    pub daily: DailyData,
}

/// Raw current-conditions block
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentData {
    pub time: String,
    pub temperature_2m: f64,
    pub relative_humidity_2m: u8,
    pub apparent_temperature: f64,
    /// Day flag: `1` for day, `0` for night (not a boolean)
    pub is_day: u8,
    pub precipitation: f64,
    pub weather_code: u16,
    pub surface_pressure: f64,
    pub wind_speed_10m: f64,
    pub wind_direction_10m: u16,
}

/// Raw hourly block (parallel arrays)
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyData {
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
    pub relative_humidity_2m: Vec<u8>,
    pub apparent_temperature: Vec<f64>,
    pub precipitation_probability: Vec<u8>,
    pub precipitation: Vec<f64>,
    pub weather_code: Vec<u16>,
    pub visibility: Vec<f64>,
    pub wind_speed_10m: Vec<f64>,
    pub wind_direction_10m: Vec<u16>,
    pub uv_index: Vec<f64>,
}

/// Raw daily block (parallel arrays)
#[derive(Debug, Clone, Deserialize)]
pub struct DailyData {
    pub time: Vec<String>,
    pub weather_code: Vec<u16>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub apparent_temperature_max: Vec<f64>,
    pub apparent_temperature_min: Vec<f64>,
    pub sunrise: Vec<String>,
    pub sunset: Vec<String>,
    pub uv_index_max: Vec<f64>,
    pub precipitation_sum: Vec<f64>,
    pub precipitation_probability_max: Vec<u8>,
}

/// Raw geocoding search response
///
/// The upstream omits `results` entirely for queries with no matches.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Option<Vec<crate::geocoding::GeocodingMatch>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_block_deserializes() {
        let json = r#"{
            "time": "2026-08-07T14:00",
            "temperature_2m": 21.4,
            "relative_humidity_2m": 52,
            "apparent_temperature": 20.1,
            "is_day": 1,
            "precipitation": 0.0,
            "weather_code": 2,
            "surface_pressure": 1014.8,
            "wind_speed_10m": 13.2,
            "wind_direction_10m": 245
        }"#;
        let current: CurrentData = serde_json::from_str(json).expect("deserialize");
        assert_eq!(current.is_day, 1);
        assert_eq!(current.weather_code, 2);
    }

    #[test]
    fn geocoding_response_tolerates_missing_results() {
        let response: GeocodingResponse = serde_json::from_str("{}").expect("deserialize");
        assert!(response.results.is_none());

        let response: GeocodingResponse =
            serde_json::from_str(r#"{"generationtime_ms": 0.5}"#).expect("deserialize");
        assert!(response.results.is_none());
    }
}
