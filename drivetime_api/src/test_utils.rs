use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};

use crate::{config::Config, state::AppState};

pub const TEST_ACCESS_KEY: &str = "test-access-key";

const KITCHEN_RESPONSE: &str = include_str!("../../resources/test-data/kitchen_response.json");
const MULTIPLE_ROUTES: &str =
    include_str!("../../resources/test-data/directions_response_multiple_routes.json");
const NO_ROUTE: &str = include_str!("../../resources/test-data/directions_response_no_route.json");
const COLUMBUS_ROUTES: &str =
    include_str!("../../resources/test-data/directions_response_columbus.json");

/// Behaviour of the fake kitchen and directions APIs.
#[derive(Clone, Copy)]
pub enum UpstreamScenario {
    /// Every kitchen answers with the same three alternative routes
    MultipleRoutes,
    /// Only the Columbus kitchen is reachable, every other lookup fails differently
    OnlyColumbus,
    NoRoutes,
    KitchensUnavailable,
}

async fn kitchens_handler(State(scenario): State<UpstreamScenario>) -> (StatusCode, &'static str) {
    match scenario {
        UpstreamScenario::KitchensUnavailable => (StatusCode::BAD_GATEWAY, ""),
        _ => (StatusCode::OK, KITCHEN_RESPONSE),
    }
}

async fn directions_handler(
    State(scenario): State<UpstreamScenario>,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, &'static str) {
    let destination = query.get("destination").map(String::as_str).unwrap_or("");

    match scenario {
        UpstreamScenario::MultipleRoutes => (StatusCode::OK, MULTIPLE_ROUTES),
        UpstreamScenario::NoRoutes | UpstreamScenario::KitchensUnavailable => {
            (StatusCode::OK, NO_ROUTE)
        }
        UpstreamScenario::OnlyColumbus if destination.contains("Columbus") => {
            (StatusCode::OK, COLUMBUS_ROUTES)
        }
        UpstreamScenario::OnlyColumbus if destination.contains("Indianapolis") => {
            (StatusCode::OK, NO_ROUTE)
        }
        UpstreamScenario::OnlyColumbus if destination.contains("Bloomington") => {
            (StatusCode::OK, "not json")
        }
        UpstreamScenario::OnlyColumbus if destination.contains("Kansas City") => (
            StatusCode::OK,
            r#"{"routes": [], "status": "REQUEST_DENIED"}"#,
        ),
        UpstreamScenario::OnlyColumbus if destination.contains("Denver") => {
            (StatusCode::INTERNAL_SERVER_ERROR, "")
        }
        UpstreamScenario::OnlyColumbus => (StatusCode::OK, r#"{"routes": [], "status": "OK"}"#),
    }
}

/// Starts fake kitchen and directions APIs and builds a state pointing at them.
pub async fn create_test_state(scenario: UpstreamScenario) -> Arc<AppState> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    let upstream = Router::new()
        .route("/api/kitchens", get(kitchens_handler))
        .route("/maps/api/directions/json", get(directions_handler))
        .with_state(scenario);

    tokio::spawn(async move {
        axum::serve(listener, upstream).await.unwrap();
    });

    let config = Config {
        access_key: String::from(TEST_ACCESS_KEY),
        directions_api_key: String::from("test-directions-key"),
        directions_api_url: format!("http://{address}/maps/api/directions/json"),
        kitchens_api_url: format!("http://{address}/api/kitchens"),
        bind_address: "127.0.0.1:0".parse().unwrap(),
        request_timeout: Duration::from_secs(5),
        debug: false,
    };

    Arc::new(AppState::from_config(&config).unwrap())
}
