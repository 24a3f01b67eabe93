//! Sending a request and classifying its status.
//!
//! Invariants:
//! - 2xx responses are returned untouched.
//! - 4xx responses become [`ClientError::ClientStatus`] carrying the body text.
//! - Every other status becomes [`ClientError::UnexpectedStatus`].
//! - Requests are never retried; a failed write is reported, not repeated.

use std::time::Instant;

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

const REQUEST_ID_HEADER: &str = "X-Splunk-Request-Id";

/// Send `builder` once, recording metrics under `endpoint`/`method`.
pub(crate) async fn send_request(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Response> {
    if let Some(m) = metrics {
        m.record_request(endpoint, method);
    }
    let start = Instant::now();

    let result = match builder.send().await {
        Ok(response) => check_status(response).await,
        Err(e) => Err(ClientError::from(e)),
    };

    if let Some(m) = metrics {
        let status = match &result {
            Ok(response) => Some(response.status().as_u16()),
            Err(e) => e.status(),
        };
        m.record_request_duration(endpoint, method, start.elapsed(), status);
        if let Err(e) = &result {
            m.record_client_error(endpoint, method, e);
        }
    }

    result
}

/// Map a non-2xx response onto the matching error.
pub(crate) async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let request_id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());

    debug!(status = status.as_u16(), %url, ?request_id, "Splunk returned an error status");

    if status.is_client_error() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response body".to_string());
        return Err(ClientError::ClientStatus {
            status: status.as_u16(),
            url,
            body,
            request_id,
        });
    }

    Err(ClientError::UnexpectedStatus {
        status: status.as_u16(),
        url,
        request_id,
    })
}
