//! Shared request plumbing for the JSON services.

use genie_error::{GenieResult, RemoteError, RemoteErrorKind};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

/// Send a prepared request and decode a JSON body, mapping every failure to
/// a [`RemoteError`] tagged with `service`.
pub(crate) async fn send_json<T: DeserializeOwned>(service: &str, request: RequestBuilder) -> GenieResult<T> {
    let response = request.send().await.map_err(|e| {
        error!(service, error = ?e, "Failed to send request");
        RemoteError::new(service, RemoteErrorKind::Request(e.to_string()))
    })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!(service, status = %status, body = %body, "Service returned error");
        return Err(RemoteError::new(
            service,
            RemoteErrorKind::Api {
                status: status.as_u16(),
                message: body,
            },
        )
        .into());
    }

    let value = response.json::<T>().await.map_err(|e| {
        error!(service, error = ?e, "Failed to parse response");
        RemoteError::new(service, RemoteErrorKind::Parse(e.to_string()))
    })?;
    debug!(service, "Received response");
    Ok(value)
}
