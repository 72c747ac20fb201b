//! Orchestrator (Service B) pipeline tests against stubbed upstreams.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use cep_weather::config::AppConfig;
use cep_weather::http::orchestrator::{self, OrchestratorState};
use httpmock::prelude::*;
use tower::ServiceExt;

fn state_for(directory: &MockServer, weather: &MockServer, api_key: &str) -> OrchestratorState {
    let mut config = AppConfig::default();
    config.upstream.directory_base_url = directory.base_url();
    config.upstream.weather_base_url = weather.base_url();
    config.upstream.weather_api_key = api_key.to_string();
    OrchestratorState::new(&config)
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn resolves_city_and_temperature() {
    let directory = MockServer::start();
    let weather = MockServer::start();
    let directory_mock = directory.mock(|when, then| {
        when.method(GET).path("/01001000/json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"localidade": "São Paulo"}));
    });
    let weather_mock = weather.mock(|when, then| {
        when.method(GET).path("/current.json").query_param("lang", "pt");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"current": {"temp_c": 28.5}}));
    });

    let app = orchestrator::router(state_for(&directory, &weather, "test-key"));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/?cep=01001000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["city"], "São Paulo");
    assert!((body["temp_C"].as_f64().unwrap() - 28.5).abs() < 1e-9);
    assert!((body["temp_F"].as_f64().unwrap() - 83.3).abs() < 1e-9);
    assert!((body["temp_K"].as_f64().unwrap() - 301.5).abs() < 1e-9);
    directory_mock.assert();
    weather_mock.assert();
}

#[tokio::test]
async fn malformed_cep_is_rejected_before_any_lookup() {
    let directory = MockServer::start();
    let weather = MockServer::start();
    let directory_mock = directory.mock(|when, then| {
        when.path_contains("/");
        then.status(200);
    });

    let app = orchestrator::router(state_for(&directory, &weather, "test-key"));
    let response = app
        .oneshot(Request::builder().uri("/?cep=123").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["message"], "invalid zipcode");
    assert_eq!(directory_mock.hits(), 0);
}

#[tokio::test]
async fn missing_cep_query_is_invalid() {
    let directory = MockServer::start();
    let weather = MockServer::start();

    let app = orchestrator::router(state_for(&directory, &weather, "test-key"));
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unknown_zipcode_maps_to_not_found() {
    let directory = MockServer::start();
    let weather = MockServer::start();
    directory.mock(|when, then| {
        when.method(GET).path("/99999999/json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"erro": true}));
    });
    let weather_mock = weather.mock(|when, then| {
        when.path_contains("/");
        then.status(200);
    });

    let app = orchestrator::router(state_for(&directory, &weather, "test-key"));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/?cep=99999999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["message"], "can not find zipcode");
    // Weather is only consulted once the city resolved.
    assert_eq!(weather_mock.hits(), 0);
}

#[tokio::test]
async fn missing_api_key_fails_after_city_resolution() {
    let directory = MockServer::start();
    let weather = MockServer::start();
    let directory_mock = directory.mock(|when, then| {
        when.method(GET).path("/01001000/json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"localidade": "São Paulo"}));
    });
    let weather_mock = weather.mock(|when, then| {
        when.path_contains("/");
        then.status(200);
    });

    let app = orchestrator::router(state_for(&directory, &weather, ""));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/?cep=01001000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["message"], "no API key set");
    directory_mock.assert();
    assert_eq!(weather_mock.hits(), 0);
}

#[tokio::test]
async fn weather_provider_failure_is_relayed() {
    let directory = MockServer::start();
    let weather = MockServer::start();
    directory.mock(|when, then| {
        when.method(GET).path("/01001000/json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"localidade": "São Paulo"}));
    });
    weather.mock(|when, then| {
        when.method(GET).path("/current.json");
        then.status(500);
    });

    let app = orchestrator::router(state_for(&directory, &weather, "test-key"));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/?cep=01001000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["message"], "unexpected status code: 500");
}

#[tokio::test]
async fn directory_transport_failure_is_internal() {
    let weather = MockServer::start();
    let mut config = AppConfig::default();
    // Unassigned loopback port: the connection is refused.
    config.upstream.directory_base_url = "http://127.0.0.1:1".to_string();
    config.upstream.weather_base_url = weather.base_url();
    config.upstream.weather_api_key = "test-key".to_string();

    let app = orchestrator::router(OrchestratorState::new(&config));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/?cep=01001000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("error sending request"));
}
