use axum::{
    extract::Request,
    http::{StatusCode, header},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

/// Middleware that logs each route access with its result and the crawler that asked.
pub async fn log_route_access(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let user_agent = request
        .headers()
        .get(header::USER_AGENT)
        .and_then(|ua| ua.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis();
    let status = response.status();

    macro_rules! log_access {
        ($level:ident) => {
            tracing::$level!(
                method = %method,
                path = %path,
                user_agent = %user_agent,
                status = %status.as_u16(),
                duration_ms = %duration_ms,
            )
        };
    }

    let level = access_level(status);
    if level == tracing::Level::ERROR {
        log_access!(error);
    } else if level == tracing::Level::WARN {
        log_access!(warn);
    } else {
        log_access!(info);
    }

    response
}

/// Server errors are errors, client errors are warnings, everything else is info.
fn access_level(status: StatusCode) -> tracing::Level {
    if status.is_server_error() {
        tracing::Level::ERROR
    } else if status.is_client_error() {
        tracing::Level::WARN
    } else {
        tracing::Level::INFO
    }
}
