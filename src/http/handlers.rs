//! Route handlers.
//!
//! | Route                   | Handler         |
//! |-------------------------|-----------------|
//! | `GET /`                 | [`index`]       |
//! | `GET /data/{size}`      | [`data`]        |
//! | `GET /sleep/{time}`     | [`sleep`]       |
//! | `PUT, POST /data/null`  | [`discard`]     |

use std::time::Duration;

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use futures_util::StreamExt;

use crate::http::error::HandlerError;
use crate::http::payload::{SeedBuffer, ACK};

/// Application state injected into handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub seed: SeedBuffer,
}

/// Parse a path parameter as a non-negative integer.
fn parse_param(name: &'static str, value: &str) -> Result<u64, HandlerError> {
    value
        .parse::<u64>()
        .map_err(|source| HandlerError::InvalidParameter {
            name,
            value: value.to_string(),
            source,
        })
}

/// Bare acknowledgement.
pub async fn index() -> &'static str {
    ACK
}

/// `size` KiB of the seed buffer.
pub async fn data(
    State(state): State<AppState>,
    Path(size): Path<String>,
) -> Result<Response, HandlerError> {
    let count = parse_param("size", &size)?;
    tracing::debug!(count, "Streaming payload");

    let mut response = state.seed.repeated(count).into_response();
    if let Some(len) = SeedBuffer::repeated_len(count) {
        response
            .headers_mut()
            .insert(header::CONTENT_LENGTH, len.into());
    }
    Ok(response)
}

/// `GET /data/null` shares its path with the discard route but is still a
/// data request, so it fails the integer parse like any other word.
pub async fn data_null(State(state): State<AppState>) -> Result<Response, HandlerError> {
    data(State(state), Path("null".to_string())).await
}

/// Answer `OK` after `time` milliseconds.
pub async fn sleep(Path(time): Path<String>) -> Result<&'static str, HandlerError> {
    let millis = parse_param("time", &time)?;
    tracing::debug!(millis, "Sleeping");

    tokio::time::sleep(Duration::from_millis(millis)).await;
    Ok(ACK)
}

/// Read the request body to the end and report how many bytes it had.
pub async fn discard(body: Body) -> Result<(StatusCode, String), HandlerError> {
    let mut stream = body.into_data_stream();
    let mut consumed: u64 = 0;
    while let Some(chunk) = stream.next().await {
        consumed += chunk?.len() as u64;
    }
    tracing::debug!(consumed, "Request body discarded");

    Ok((StatusCode::OK, consumed.to_string()))
}
