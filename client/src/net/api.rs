//! REST API helpers for the wires backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! calls are only made from browser event handlers and effects.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Failures are logged at `warn`
//! and handed back to the page, which shows the `Display` string in a banner
//! or dialog and leaves its previous state in place.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::util::config::ApiConfig;
#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;
use wires::{ApiError, ExecuteRequest, ExecuteResult, Wire, Wireflow};

#[cfg(any(test, feature = "hydrate"))]
fn fetch_failed_message(noun: &str) -> String {
    format!("Failed to fetch {noun}s")
}

#[cfg(any(test, feature = "hydrate"))]
fn save_failed_message(noun: &str) -> String {
    format!("Failed to save {noun}")
}

#[cfg(any(test, feature = "hydrate"))]
fn delete_failed_message(noun: &str) -> String {
    format!("Failed to delete {noun}")
}

#[cfg(any(test, feature = "hydrate"))]
fn execute_failed_message(request: &ExecuteRequest) -> String {
    format!("Failed to execute {}", request.kind())
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Body text of a response, or the error it stands for. A body that cannot
/// be read from a 2xx response is a transport failure.
#[cfg(any(test, feature = "hydrate"))]
fn response_body<E: std::fmt::Display>(
    ok: bool,
    status: u16,
    text: Result<String, E>,
    fallback: &str,
) -> Result<String, ApiError> {
    if !ok {
        return Err(ApiError::from_status(status, text.as_deref().unwrap_or_default(), fallback));
    }
    text.map_err(|e| ApiError::Transport(e.to_string()))
}

/// Ids go into the URL path, so a blank one never leaves the browser.
#[cfg(any(test, feature = "hydrate"))]
fn require_id<'a>(field: &str, id: &'a str) -> Result<&'a str, ApiError> {
    if id.trim().is_empty() {
        return Err(ApiError::MissingField(field.to_owned()));
    }
    Ok(id)
}

/// Send a built request and return the body text of a 2xx response.
#[cfg(feature = "hydrate")]
async fn send(
    request: Result<gloo_net::http::Request, gloo_net::Error>,
    fallback: &str,
) -> Result<String, ApiError> {
    let request = request.map_err(|e| ApiError::Transport(e.to_string()))?;
    let url = request.url();
    let resp = request.send().await.map_err(|e| {
        log::warn!("request to {url} failed: {e}");
        ApiError::Transport(e.to_string())
    })?;
    let ok = resp.ok();
    let status = resp.status();
    let text = resp.text().await;
    response_body(ok, status, text, fallback).inspect_err(|e| log::warn!("request to {url} returned {status}: {e}"))
}

/// Fetch all wires via `GET /wires/`.
///
/// # Errors
///
/// Returns an error if the request fails, the status is non-2xx, or the body
/// is not a JSON array of wires.
pub async fn list_wires(config: &ApiConfig) -> Result<Vec<Wire>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoints().wires();
        let body = send(gloo_net::http::Request::get(&url).build(), &fetch_failed_message("wire")).await?;
        decode_body(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

/// Create a wire via `POST /wires/`.
///
/// # Errors
///
/// Returns an error if the id is blank, the request fails, or the status is non-2xx.
pub async fn create_wire(config: &ApiConfig, wire: &Wire) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        require_id("wire_id", &wire.wire_id)?;
        let url = config.endpoints().wires();
        send(gloo_net::http::Request::post(&url).json(wire), &save_failed_message("wire")).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, wire);
        Err(ApiError::Unavailable)
    }
}

/// Replace a wire via `PUT /wires/{wire_id}`.
///
/// # Errors
///
/// Returns an error if the id is blank, the request fails, or the status is non-2xx.
pub async fn update_wire(config: &ApiConfig, wire: &Wire) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoints().wire(require_id("wire_id", &wire.wire_id)?);
        send(gloo_net::http::Request::put(&url).json(wire), &save_failed_message("wire")).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, wire);
        Err(ApiError::Unavailable)
    }
}

/// Delete a wire via `DELETE /wires/{wire_id}`.
///
/// # Errors
///
/// Returns an error if the id is blank, the request fails, or the status is non-2xx.
pub async fn delete_wire(config: &ApiConfig, wire_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoints().wire(require_id("wire_id", wire_id)?);
        send(gloo_net::http::Request::delete(&url).build(), &delete_failed_message("wire")).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, wire_id);
        Err(ApiError::Unavailable)
    }
}

/// Fetch all wireflows via `GET /wireflows/`.
///
/// # Errors
///
/// Returns an error if the request fails, the status is non-2xx, or the body
/// is not a JSON array of wireflows.
pub async fn list_wireflows(config: &ApiConfig) -> Result<Vec<Wireflow>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoints().wireflows();
        let body = send(gloo_net::http::Request::get(&url).build(), &fetch_failed_message("wireflow")).await?;
        decode_body(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

/// Create a wireflow via `POST /wireflows/`.
///
/// # Errors
///
/// Returns an error if the id is blank, the request fails, or the status is non-2xx.
pub async fn create_wireflow(config: &ApiConfig, wireflow: &Wireflow) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        require_id("wireflow_id", &wireflow.wireflow_id)?;
        let url = config.endpoints().wireflows();
        send(gloo_net::http::Request::post(&url).json(wireflow), &save_failed_message("wireflow")).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, wireflow);
        Err(ApiError::Unavailable)
    }
}

/// Replace a wireflow via `PUT /wireflows/{wireflow_id}`.
///
/// # Errors
///
/// Returns an error if the id is blank, the request fails, or the status is non-2xx.
pub async fn update_wireflow(config: &ApiConfig, wireflow: &Wireflow) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoints().wireflow(require_id("wireflow_id", &wireflow.wireflow_id)?);
        send(gloo_net::http::Request::put(&url).json(wireflow), &save_failed_message("wireflow")).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, wireflow);
        Err(ApiError::Unavailable)
    }
}

/// Delete a wireflow via `DELETE /wireflows/{wireflow_id}`.
///
/// # Errors
///
/// Returns an error if the id is blank, the request fails, or the status is non-2xx.
pub async fn delete_wireflow(config: &ApiConfig, wireflow_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoints().wireflow(require_id("wireflow_id", wireflow_id)?);
        send(gloo_net::http::Request::delete(&url).build(), &delete_failed_message("wireflow")).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, wireflow_id);
        Err(ApiError::Unavailable)
    }
}

/// Run a wire or wireflow via its `execute` endpoint.
///
/// A 2xx response whose body carries an `error` field is still `Ok`; the
/// dialog renders it through [`ExecuteResult::display_text`].
///
/// # Errors
///
/// Returns an error if the request fails, the status is non-2xx, or the body
/// is not a JSON object.
pub async fn execute(config: &ApiConfig, request: &ExecuteRequest) -> Result<ExecuteResult, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoints().execute(request);
        let body = send(gloo_net::http::Request::post(&url).json(request), &execute_failed_message(request)).await?;
        decode_body(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(ApiError::Unavailable)
    }
}
