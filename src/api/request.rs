//! API request helpers

use axum::extract::FromRequest;
use axum::extract::FromRequestParts;
use axum::extract::Json;
use axum::extract::Path;
use axum::extract::Request;
use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::PathRejection;
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::notes::MAX_TITLE_LENGTH;

use super::Error;

/// Validate a note title
///
/// A title is between 1 and 200 characters, anything else is rejected as
/// unprocessable
pub fn parse_title(title: &str) -> Result<&str, Error> {
    let length = title.chars().count();

    if length == 0 {
        return Err(Error::unprocessable_entity("Title can not be empty"));
    }

    if length > MAX_TITLE_LENGTH {
        return Err(Error::unprocessable_entity(format!(
            "Title can not be longer than {MAX_TITLE_LENGTH} characters"
        )));
    }

    Ok(title)
}

/// Validate a note body
///
/// A body just has to be non-empty
pub fn parse_body(body: &str) -> Result<&str, Error> {
    if body.is_empty() {
        return Err(Error::unprocessable_entity("Body can not be empty"));
    }

    Ok(body)
}

fn parse_json<J>(json: Result<Json<J>, JsonRejection>) -> Result<J, Error> {
    match json {
        Ok(Json(json)) => Ok(json),
        Err(err) => match err {
            JsonRejection::JsonDataError(err) => {
                Err(Error::unprocessable_entity("Data error").with_description(err))
            }
            JsonRejection::JsonSyntaxError(err) => {
                let error = Error::bad_request("JSON syntax error");

                Err(match std::error::Error::source(&err) {
                    Some(source) => error.with_description(source),
                    None => error,
                })
            }
            JsonRejection::MissingJsonContentType(_err) => Err(Error::bad_request(
                "Missing `application/json` content type",
            )),
            JsonRejection::BytesRejection(err) => {
                Err(Error::bad_request("Invalid characters in JSON").with_description(err))
            }
            err => Err(Error::bad_request("Unknown JSON error").with_description(err)),
        },
    }
}

/// Wrapper for the JSON extractor
pub struct Form<F>(pub F);

impl<S, F> FromRequest<S> for Form<F>
where
    S: Send + Sync,
    F: DeserializeOwned + Send,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json = Json::<F>::from_request(req, state).await;

        parse_json(json).map(Form)
    }
}

fn parse_path<P>(path: Result<Path<P>, PathRejection>) -> Result<P, Error> {
    match path {
        Ok(Path(path)) => Ok(path),
        Err(err) => match err {
            PathRejection::FailedToDeserializePathParams(err) => {
                Err(Error::bad_request("Invalid path parameter").with_description(err))
            }
            PathRejection::MissingPathParams(err) => {
                Err(Error::bad_request("Missing path parameter").with_description(err))
            }
            err => Err(Error::bad_request("Unknown path error").with_description(err)),
        },
    }
}

/// Wrapper for the path extractor
pub struct PathParameters<P>(pub P);

impl<S, P> FromRequestParts<S> for PathParameters<P>
where
    S: Send + Sync,
    P: DeserializeOwned + Send,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let path = Path::<P>::from_request_parts(parts, state).await;

        parse_path(path).map(PathParameters)
    }
}
