//! Integration tests for the Open-Meteo clients using wiremock
//!
//! These tests verify both clients' behavior against a mock HTTP server,
//! ensuring proper handling of various response scenarios.

use domain::value_objects::{GeoLocation, UnitSystem};
use integration_weather::{
    GeocodingClient, GeocodingConfig, OpenMeteoClient, WeatherApiConfig, WeatherApiError,
    normalize,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Sample forecast response covering one day and 26 hourly slots
fn sample_forecast_response() -> serde_json::Value {
    let hourly_times: Vec<String> = (0..26)
        .map(|i| format!("2026-08-{:02}T{:02}:00", 7 + i / 24, i % 24))
        .collect();
    serde_json::json!({
        "latitude": 48.8566,
        "longitude": 2.3522,
        "generationtime_ms": 0.412,
        "utc_offset_seconds": 7200,
        "timezone": "Europe/Paris",
        "timezone_abbreviation": "CEST",
        "elevation": 38.0,
        "current": {
            "time": "2026-08-07T14:00",
            "temperature_2m": 23.1,
            "relative_humidity_2m": 48,
            "apparent_temperature": 22.4,
            "is_day": 1,
            "precipitation": 0.0,
            "weather_code": 1,
            "surface_pressure": 1016.3,
            "wind_speed_10m": 11.0,
            "wind_direction_10m": 230
        },
        "hourly": {
            "time": hourly_times,
            "temperature_2m": vec![19.5; 26],
            "relative_humidity_2m": vec![55; 26],
            "apparent_temperature": vec![18.9; 26],
            "precipitation_probability": vec![15; 26],
            "precipitation": vec![0.0; 26],
            "weather_code": vec![2; 26],
            "visibility": vec![24140.0; 26],
            "wind_speed_10m": vec![9.5; 26],
            "wind_direction_10m": vec![210; 26],
            "uv_index": vec![4.0; 26]
        },
        "daily": {
            "time": ["2026-08-07"],
            "weather_code": [61],
            "temperature_2m_max": [24.8],
            "temperature_2m_min": [15.2],
            "apparent_temperature_max": [24.0],
            "apparent_temperature_min": [14.5],
            "sunrise": ["2026-08-07T04:28"],
            "sunset": ["2026-08-07T19:12"],
            "uv_index_max": [6.1],
            "precipitation_sum": [2.4],
            "precipitation_probability_max": [65]
        }
    })
}

/// Sample geocoding response with two matches
fn sample_geocoding_response() -> serde_json::Value {
    serde_json::json!({
        "results": [
            {
                "id": 2988507,
                "name": "Paris",
                "latitude": 48.85341,
                "longitude": 2.3488,
                "country": "France",
                "admin1": "Île-de-France",
                "timezone": "Europe/Paris"
            },
            {
                "id": 4717560,
                "name": "Paris",
                "latitude": 33.66094,
                "longitude": -95.55551,
                "country": "United States",
                "admin1": "Texas",
                "timezone": "America/Chicago"
            }
        ],
        "generationtime_ms": 1.1
    })
}

fn forecast_client(mock_server: &MockServer) -> OpenMeteoClient {
    let config = WeatherApiConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
    };
    #[allow(clippy::expect_used)]
    OpenMeteoClient::new(config).expect("Failed to create client")
}

fn geocoding_client(mock_server: &MockServer) -> GeocodingClient {
    let config = GeocodingConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
    };
    #[allow(clippy::expect_used)]
    GeocodingClient::new(config).expect("Failed to create client")
}

fn paris() -> GeoLocation {
    #[allow(clippy::expect_used)]
    GeoLocation::new(48.8566, 2.3522).expect("valid coordinates")
}

async fn mount_forecast(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Forecast success scenarios
// ============================================================================

#[tokio::test]
async fn test_fetch_forecast_success() {
    let mock_server = MockServer::start().await;
    mount_forecast(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_forecast_response()),
    )
    .await;

    let client = forecast_client(&mock_server);
    let result = client.fetch_forecast(&paris(), UnitSystem::Metric).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
    let response = result.unwrap();
    assert_eq!(response.timezone, "Europe/Paris");
    assert_eq!(response.current.weather_code, 1);
    assert_eq!(response.hourly.time.len(), 26);
    assert_eq!(response.daily.time.len(), 1);
}

#[tokio::test]
async fn test_fetched_payload_normalizes_end_to_end() {
    let mock_server = MockServer::start().await;
    mount_forecast(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_forecast_response()),
    )
    .await;

    let client = forecast_client(&mock_server);
    let response = client
        .fetch_forecast(&paris(), UnitSystem::Metric)
        .await
        .unwrap();
    let data = normalize(&response, UnitSystem::Metric).unwrap();

    // 26 upstream slots collapse to the 24-slot window.
    assert_eq!(data.hourly.len(), 24);
    assert_eq!(data.daily.len(), 1);
    assert!(data.current.is_day);
    assert_eq!(data.daily[0].description(), "Slight rain");
}

#[tokio::test]
async fn test_request_carries_unit_selectors_and_timezone() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("latitude", "48.8566"))
        .and(query_param("longitude", "2.3522"))
        .and(query_param("timezone", "auto"))
        .and(query_param("temperature_unit", "fahrenheit"))
        .and(query_param("wind_speed_unit", "mph"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = forecast_client(&mock_server);
    let result = client.fetch_forecast(&paris(), UnitSystem::Imperial).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

// ============================================================================
// Forecast error scenarios
// ============================================================================

#[tokio::test]
async fn test_server_error_maps_to_service_unavailable() {
    let mock_server = MockServer::start().await;
    mount_forecast(
        &mock_server,
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;

    let client = forecast_client(&mock_server);
    let result = client.fetch_forecast(&paris(), UnitSystem::Metric).await;

    assert!(
        matches!(result, Err(WeatherApiError::ServiceUnavailable(_))),
        "Expected ServiceUnavailable, got: {result:?}"
    );
}

#[tokio::test]
async fn test_rate_limit_maps_to_dedicated_error() {
    let mock_server = MockServer::start().await;
    mount_forecast(
        &mock_server,
        ResponseTemplate::new(429).set_body_string("Too many requests"),
    )
    .await;

    let client = forecast_client(&mock_server);
    let result = client.fetch_forecast(&paris(), UnitSystem::Metric).await;

    assert!(
        matches!(result, Err(WeatherApiError::RateLimitExceeded)),
        "Expected RateLimitExceeded, got: {result:?}"
    );
}

#[tokio::test]
async fn test_client_error_maps_to_request_failed() {
    let mock_server = MockServer::start().await;
    mount_forecast(
        &mock_server,
        ResponseTemplate::new(400).set_body_string("Bad request"),
    )
    .await;

    let client = forecast_client(&mock_server);
    let result = client.fetch_forecast(&paris(), UnitSystem::Metric).await;

    assert!(
        matches!(result, Err(WeatherApiError::RequestFailed(_))),
        "Expected RequestFailed, got: {result:?}"
    );
}

#[tokio::test]
async fn test_invalid_json_maps_to_parse_error() {
    let mock_server = MockServer::start().await;
    mount_forecast(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("not valid json"),
    )
    .await;

    let client = forecast_client(&mock_server);
    let result = client.fetch_forecast(&paris(), UnitSystem::Metric).await;

    assert!(
        matches!(result, Err(WeatherApiError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

// ============================================================================
// Geocoding scenarios
// ============================================================================

#[tokio::test]
async fn test_search_returns_matches_in_order() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("name", "Paris"))
        .and(query_param("count", "10"))
        .and(query_param("language", "en"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_geocoding_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = geocoding_client(&mock_server);
    let matches = client.search("Paris").await.unwrap();

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].id, 2_988_507);
    assert_eq!(matches[1].admin1.as_deref(), Some("Texas"));
}

#[tokio::test]
async fn test_search_without_results_is_empty_not_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "generationtime_ms": 0.2
            })),
        )
        .mount(&mock_server)
        .await;

    let client = geocoding_client(&mock_server);
    let matches = client.search("Nowhereville").await.unwrap();

    assert!(matches.is_empty());
}

#[tokio::test]
async fn test_search_encodes_coordinate_queries() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("name", "48.8566,2.3522"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_geocoding_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = geocoding_client(&mock_server);
    let matches = client.search("48.8566,2.3522").await.unwrap();
    assert!(!matches.is_empty());
}

#[tokio::test]
async fn test_search_server_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&mock_server)
        .await;

    let client = geocoding_client(&mock_server);
    let result = client.search("Paris").await;

    assert!(
        matches!(result, Err(WeatherApiError::ServiceUnavailable(_))),
        "Expected ServiceUnavailable, got: {result:?}"
    );
}
