use axum::{
    body::Body,
    http::{HeaderMap, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Non-blank `X-Request-Id` sent by the client, if any.
pub fn incoming_request_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

fn new_request_id() -> String {
    let nanos = Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_else(|| Utc::now().timestamp_micros() * 1000);
    format!("req-{nanos}")
}

/// Make sure the request and its response carry an `X-Request-Id`.
///
/// A client-supplied id is kept; otherwise one is generated before the
/// handler runs so handler logs and the response agree.
pub async fn request_id(mut req: Request<Body>, next: Next) -> Response {
    let id = match incoming_request_id(req.headers()) {
        Some(id) => id.to_string(),
        None => new_request_id(),
    };

    let value = HeaderValue::from_str(&id).ok();
    if let Some(v) = &value {
        req.headers_mut().insert(REQUEST_ID_HEADER, v.clone());
    }

    let mut res = next.run(req).await;
    if let Some(v) = value {
        res.headers_mut().insert(REQUEST_ID_HEADER, v);
    }
    res
}
