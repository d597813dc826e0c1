//! API request and response types

use crate::reply::Reply;
use serde::{Deserialize, Serialize};

/// Incoming user message for one conversation turn
#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub text: String,
}

/// Reply for one conversation turn
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub reply: Reply,
}

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}

/// Generic error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
