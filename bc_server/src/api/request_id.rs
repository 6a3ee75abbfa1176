//! Per-update correlation ids.
//!
//! Chat relays usually forward the platform's update id as `x-request-id`;
//! otherwise one is generated. Everything logged while a command runs,
//! including engine `log` records, sits inside a `command` span carrying that
//! id and the chat's session key.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue, StatusCode, request::Parts},
    middleware::Next,
    response::Response,
};
use bulls_cows::SessionKey;
use tracing::Instrument;
use uuid::Uuid;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

fn request_id_from(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), str::to_string)
}

/// Chat key from a `/api/v1/sessions/{session_key}/...` path.
fn session_key_from(path: &str) -> Option<SessionKey> {
    let mut segments = path.trim_start_matches('/').split('/');
    while let Some(segment) = segments.next() {
        if segment == "sessions" {
            return segments.next()?.parse().ok();
        }
    }
    None
}

/// Tag the request with an id, echo it back, and log the chat it targets
///
/// ```no_run
/// use axum::{Router, routing::get, middleware};
/// use bc_server::api::request_id::request_id_middleware;
///
/// let app: Router = Router::new()
///     .route("/health", get(|| async { "ok" }))
///     .layer(middleware::from_fn(request_id_middleware));
/// ```
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request_id_from(request.headers());
    let session_key = session_key_from(request.uri().path());
    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let span = tracing::info_span!(
        "command",
        request_id = %request_id,
        session_key,
    );

    let mut response = next.run(request).instrument(span.clone()).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    span.in_scope(|| match session_key {
        Some(_) => tracing::info!(status = %response.status(), "Chat command answered"),
        None => tracing::debug!(status = %response.status(), "Request answered"),
    });

    response
}

/// Id assigned by [`request_id_middleware`], extractable in handlers
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S> axum::extract::FromRequestParts<S> for RequestId
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<RequestId>().cloned().ok_or((
            StatusCode::INTERNAL_SERVER_ERROR,
            "request id middleware not installed",
        ))
    }
}
