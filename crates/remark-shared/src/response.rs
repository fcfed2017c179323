//! Error response bodies.

use serde::{Deserialize, Serialize};

/// `{ "msg": "..." }` body used for not-found and authentication failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// One rejected field, in the shape clients of the legacy API expect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldErrorResponse {
    pub value: String,
    pub msg: String,
    pub param: String,
    pub location: String,
}

/// `{ "errors": [...] }` body returned for validation failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldErrorResponse>,
}
