//! Lets HTML forms, which can only send GET and POST, reach PUT and DELETE
//! routes.
//!
//! A `POST` carrying `_method=PUT|DELETE` in its query string, or the same
//! value in `X-HTTP-Method-Override`, is rewritten before routing. The header
//! wins when both are present.

use axum::extract::{Query, Request};
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;
use serde::Deserialize;
use tracing::trace;

pub const OVERRIDE_HEADER: &str = "x-http-method-override";

#[derive(Debug, Deserialize)]
struct OverrideQuery {
    #[serde(rename = "_method")]
    method: Option<String>,
}

/// Middleware entry point, for use with `axum::middleware::from_fn`.
pub async fn method_override(mut req: Request, next: Next) -> Response {
    if req.method() == Method::POST {
        if let Some(method) = requested_method(&req) {
            trace!(%method, uri = %req.uri(), "Method override");
            *req.method_mut() = method;
        }
    }
    next.run(req).await
}

fn requested_method(req: &Request) -> Option<Method> {
    let from_header = req
        .headers()
        .get(OVERRIDE_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let requested = from_header.or_else(|| {
        Query::<OverrideQuery>::try_from_uri(req.uri())
            .ok()
            .and_then(|Query(query)| query.method)
    })?;

    parse_override(&requested)
}

/// Only PUT and DELETE may be requested.
fn parse_override(value: &str) -> Option<Method> {
    match value.trim().to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}
