use axum::{Router, middleware, routing::get};
use core_rtx::health_router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub mod logging_middleware;
pub mod robots_txt;

//
// Router
//

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/robots.txt", get(robots_txt::get_robots_txt))
        .merge(health_router::<AppState>())
        .with_state(state)
        // Custom route access logging
        .layer(middleware::from_fn(logging_middleware::log_route_access))
        // Tracing middleware
        .layer(TraceLayer::new_for_http())
}
