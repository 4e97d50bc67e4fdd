use std::sync::Arc;

use axum::{Router, http::Method, middleware, routing::post};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{auth::require_access_key, drive_time::post_handler::post_handler, state::AppState};

pub fn app(state: Arc<AppState>) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/drive-time", post(post_handler))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            require_access_key,
        ));

    Router::new()
        .nest("/api", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer),
        )
        .with_state(state)
}
