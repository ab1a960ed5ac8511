use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use core_rtx::{BaseUrlResolver, render};

use crate::state::AppState;

pub const CONTENT_TYPE: &str = "text/plain; charset=UTF-8";

/// GET /robots.txt - The robots.txt for the running environment
pub async fn get_robots_txt(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let body = match &state.resolver {
        Some(resolver) => render(&state.config, &**resolver),
        None => render(&state.config, &request_resolver(&headers)),
    };

    (StatusCode::OK, [(header::CONTENT_TYPE, CONTENT_TYPE)], body)
}

/// Resolves sitemaps against the URL the client used to reach us.
/// Falls back to `http://localhost` when the Host header is missing or unusable.
pub fn request_resolver(headers: &HeaderMap) -> BaseUrlResolver {
    let Some(host) = headers.get(header::HOST).and_then(|h| h.to_str().ok()) else {
        return BaseUrlResolver::default();
    };

    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.split(',').next())
        .map(str::trim)
        .filter(|s| s.eq_ignore_ascii_case("http") || s.eq_ignore_ascii_case("https"))
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| "http".to_string());

    BaseUrlResolver::new(&format!("{}://{}", scheme, host)).unwrap_or_else(|e| {
        tracing::warn!("Cannot build base URL from Host header '{}': {}", host, e);
        BaseUrlResolver::default()
    })
}
