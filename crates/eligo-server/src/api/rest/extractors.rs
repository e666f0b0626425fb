//! Custom extractors
//!
//! The eligibility endpoints take a bare JSON array of subject attribute
//! strings; anything else is rejected here, before the repository or the
//! engine run.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde_json::json;

/// Extracts the subject batch from the request body.
///
/// Rejects any body that is not a JSON array of strings with a 400 that
/// points at the expected shape.
pub struct SubjectsExtractor(pub Vec<String>);

#[axum::async_trait]
impl<S> FromRequest<S> for SubjectsExtractor
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Vec<String>>::from_request(req, state).await {
            Ok(Json(subjects)) => Ok(Self(subjects)),
            Err(rejection) => {
                let error_message = match rejection {
                    JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                        "request body must be a JSON array of strings".to_string()
                    }
                    JsonRejection::MissingJsonContentType(_) => {
                        "Missing 'Content-Type: application/json' header".to_string()
                    }
                    _ => format!("Failed to parse request body: {}", rejection),
                };

                Err((
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": error_message,
                        "status": 400,
                    })),
                ))
            }
        }
    }
}
