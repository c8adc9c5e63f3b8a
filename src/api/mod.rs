//! All API endpoint setup

use axum::Router;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;

pub use request::Form;
pub use request::PathParameters;
pub use request::parse_body;
pub use request::parse_title;
pub use response::Error;
pub use response::Success;

mod notes;
mod request;
mod response;

/// Get the Axum router for all API routes
pub fn router() -> Router {
    let notes = Router::new()
        .route("/", get(notes::list))
        .route("/", post(notes::create))
        .route("/{note}", get(notes::single))
        .route("/{note}", delete(notes::delete));

    Router::new().nest("/items", notes)
}
