//! Thin wrappers over the browser fetch API via gloo-net. Calls are awaited
//! individually with no retry or timeout; callers decide how to degrade.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status {0}")]
    Status(u16),
}

/// POSTs a form-encoded body. Success is any 2xx response.
pub async fn post_form(url: &str, body: &str) -> Result<(), NetError> {
    let response = gloo_net::http::Request::post(url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body.to_string())
        .map_err(|e| NetError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| NetError::Transport(e.to_string()))?;
    if response.ok() {
        Ok(())
    } else {
        Err(NetError::Status(response.status()))
    }
}

/// POSTs JSON and deserializes a JSON reply.
pub async fn post_json<T: DeserializeOwned>(
    url: &str,
    body: &impl Serialize,
) -> Result<T, NetError> {
    let response = gloo_net::http::Request::post(url)
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| NetError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| NetError::Transport(e.to_string()))?;
    if !response.ok() {
        return Err(NetError::Status(response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| NetError::Transport(e.to_string()))
}
