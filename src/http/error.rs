//! Per-request failures.
//!
//! Every variant answers 500 with its own text as a plain body. Nothing here
//! outlives the request that produced it.

use std::num::ParseIntError;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HandlerError {
    /// A path parameter was not a non-negative integer.
    #[error("invalid {name} {value:?}: {source}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        source: ParseIntError,
    },

    /// The client's request body could not be read to the end.
    #[error("failed to read request body: {0}")]
    BodyRead(#[from] axum::Error),
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
