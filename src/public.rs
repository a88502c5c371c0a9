//! Files served from the public directory, mainly the Unity WebGL build.
//!
//! Unity ships its payload pre-compressed as `.br` files. Browsers only decode
//! them when the response says `Content-Encoding: br` and carries the MIME type
//! of the inner file.

use axum::{
    extract::Request,
    http::{
        header::{CONTENT_ENCODING, CONTENT_TYPE, VARY},
        HeaderValue,
    },
    middleware::Next,
    response::Response,
};

/// MIME type for a Brotli-compressed asset, keyed on the extension before `.br`.
pub fn brotli_content_type(path: &str) -> Option<&'static str> {
    let inner = path.strip_suffix(".br")?;

    if inner.ends_with(".wasm") {
        Some("application/wasm")
    } else if inner.ends_with(".js") {
        Some("application/javascript")
    } else if inner.ends_with(".data") {
        Some("application/octet-stream")
    } else {
        None
    }
}

pub async fn brotli_headers(req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();
    let mut resp = next.run(req).await;

    if !path.ends_with(".br") || resp.status().is_client_error() || resp.status().is_server_error()
    {
        return resp;
    }

    let headers = resp.headers_mut();
    headers.insert(CONTENT_ENCODING, HeaderValue::from_static("br"));
    headers.insert(VARY, HeaderValue::from_static("Accept-Encoding"));
    if let Some(content_type) = brotli_content_type(&path) {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    }

    resp
}
