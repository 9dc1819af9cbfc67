use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body shared by every endpoint. `message` is a dotted code the
/// client can translate, never a driver or parser detail.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
        }
    }

    /// Body for requests poem-openapi could not parse (malformed JSON,
    /// missing fields, wrong JSON types).
    pub fn invalid_request(err: &poem::Error) -> Json<Self> {
        tracing::debug!(error = %err, "Rejected malformed request");
        Json(Self::new("ValidationError", "request.invalid_body"))
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
