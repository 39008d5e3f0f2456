use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID carried through handler extensions for log correlation.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Tags every request with an ID before it reaches a handler.
///
/// A caller-supplied `x-request-id` header wins; otherwise a fresh `UUIDv4`
/// is minted. Handlers read the value from request extensions as
/// [`RequestId`], and the response echoes it back in the same header.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = match req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
    {
        Some(supplied) => supplied.to_string(),
        None => Uuid::new_v4().to_string(),
    };

    req.extensions_mut().insert(RequestId(id.clone()));
    let mut res = next.run(req).await;

    // A supplied ID that round-trips through to_str is a valid header value,
    // and generated UUIDs always are.
    if let Ok(value) = HeaderValue::from_str(&id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    res
}
