use axum::body::Body;
use axum::extract::Request;
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;

/// Gives `OPTIONS` responses an `ok` body.
///
/// Must sit outside the CORS layer, which answers every `OPTIONS` request
/// itself with an empty 200 and the CORS headers.
pub async fn preflight_ok(req: Request, next: Next) -> Response {
    let is_options = req.method() == Method::OPTIONS;
    let response = next.run(req).await;
    if !is_options || !response.status().is_success() {
        return response;
    }

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(axum::http::header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::from("ok"))
}
