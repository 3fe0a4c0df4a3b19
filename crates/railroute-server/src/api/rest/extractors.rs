//! Custom request extractors

use crate::error::ServerError;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

/// JSON body extractor whose rejections go through [`ServerError`].
///
/// Field values are absorbed by the target type's own deserialization, so a
/// rejection here means the body is not usable JSON at all.
pub struct JsonExtractor<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonExtractor<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| Self(value))
            .map_err(rejection_to_error)
    }
}

fn rejection_to_error(rejection: JsonRejection) -> ServerError {
    let message = match &rejection {
        JsonRejection::JsonSyntaxError(err) => format!("JSON syntax error: {}", err),
        JsonRejection::JsonDataError(err) => format!("Invalid routing inputs: {}", err),
        JsonRejection::MissingJsonContentType(_) => {
            "Missing 'Content-Type: application/json' header".to_string()
        }
        other => format!("Failed to read JSON body: {}", other),
    };

    tracing::debug!("Rejected routing request: {}", message);
    ServerError::InvalidRequest(message)
}
