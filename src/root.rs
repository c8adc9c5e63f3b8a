//! The root!
//!
//! Everything not matched by the API routes ends up here and is resolved
//! against the prebuilt frontend bundle, with the entry document as the
//! fallback for client-side routes

use std::path::Component;
use std::path::Path;
use std::path::PathBuf;
use std::str::Utf8Error;

use axum::Extension;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::http::Uri;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::response::Response;
use percent_encoding::percent_decode_str;

use crate::utils::env_var_or_else;

/// Fallback location of the frontend bundle
const DEFAULT_FRONTEND_DIST: &str = "frontend/dist";

/// Entry document of the single-page app
const INDEX_FILE: &str = "index.html";

/// Location of the prebuilt frontend bundle
#[derive(Clone)]
pub struct Frontend {
    /// Directory with the prebuilt assets
    dist: PathBuf,
}

impl Frontend {
    /// Create a frontend from the `FRONTEND_DIST` environment variable
    pub fn from_env() -> Self {
        let dist = env_var_or_else("FRONTEND_DIST", || String::from(DEFAULT_FRONTEND_DIST));

        Self {
            dist: PathBuf::from(dist),
        }
    }

    /// Resolve a decoded request path inside the bundle
    ///
    /// Refuses any path that could escape the bundle directory
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.trim_matches('/'));

        if relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)))
        {
            Some(self.dist.join(relative))
        } else {
            None
        }
    }
}

/// The root!
///
/// All wildcard requests end up in this function.
///
/// An exact file in the bundle is served as-is, everything else falls back
/// to the entry document so client-side routing keeps working
pub async fn root(
    Extension(frontend): Extension<Frontend>,
    uri: Uri,
) -> Result<Response, (StatusCode, String)> {
    let path = url_decode_path(uri.path()).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            String::from("URL contains invalid UTF-8 characters"),
        )
    })?;

    tracing::debug!("Looking for frontend asset: /{path}");

    if let Some(file) = frontend.resolve(&path) {
        if let Ok(contents) = tokio::fs::read(&file).await {
            return Ok(asset_response(&file, contents));
        }
    }

    tracing::debug!(r#"No asset for "/{path}", falling back to {INDEX_FILE}"#);

    let index = frontend.dist.join(INDEX_FILE);

    match tokio::fs::read(&index).await {
        Ok(contents) => Ok(asset_response(&index, contents)),
        Err(_) => Err((
            StatusCode::NOT_FOUND,
            String::from("Frontend bundle is missing"),
        )),
    }
}

/// Build a response with a content type matching the file extension
fn asset_response(path: &Path, contents: Vec<u8>) -> Response {
    let content_type = HeaderValue::from_static(content_type_for(path));

    ([(CONTENT_TYPE, content_type)], contents).into_response()
}

/// Content type for the known bundle file extensions
fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|extension| extension.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "text/javascript",
        Some("css") => "text/css",
        Some("json" | "map") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}

/// URL decode a request path
///
/// Uses percentage encoding for the decoding, might error in case of invalid UTF-8
fn url_decode_path(path: &str) -> Result<String, Utf8Error> {
    let decoded = percent_decode_str(path);

    decoded.decode_utf8().map(|decoded| decoded.to_string())
}
