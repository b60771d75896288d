//! Async REST client for the wires backend.
//!
//! Mirrors the browser client: same endpoints, same [`ApiError`] taxonomy,
//! same fallback messages when the backend gives no reason.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use wires::{ApiError, Endpoints, ExecuteRequest, ExecuteResult, Wire, Wireflow};

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    endpoints: Endpoints,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = Client::builder().build().map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self { http, endpoints: Endpoints::new(base_url) })
    }

    pub fn base_url(&self) -> &str {
        self.endpoints.base()
    }

    async fn send(&self, request: RequestBuilder, fallback: &str) -> Result<String, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::debug!(error = %e, "request failed");
            ApiError::Transport(e.to_string())
        })?;
        let status = response.status();
        let url = response.url().to_string();
        let body = response.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        tracing::debug!(%url, status = status.as_u16(), bytes = body.len(), "response");
        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16(), &body, fallback));
        }
        Ok(body)
    }

    fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `GET /wires/`
    pub async fn list_wires(&self) -> Result<Vec<Wire>, ApiError> {
        let body = self.send(self.http.get(self.endpoints.wires()), "Failed to fetch wires").await?;
        Self::decode(&body)
    }

    /// `POST /wires/`
    pub async fn create_wire(&self, wire: &Wire) -> Result<(), ApiError> {
        self.send(self.http.post(self.endpoints.wires()).json(wire), "Failed to save wire").await?;
        Ok(())
    }

    /// `PUT /wires/{id}`
    pub async fn update_wire(&self, wire: &Wire) -> Result<(), ApiError> {
        let url = self.endpoints.wire(&wire.wire_id);
        self.send(self.http.put(url).json(wire), "Failed to save wire").await?;
        Ok(())
    }

    /// `DELETE /wires/{id}`
    pub async fn delete_wire(&self, wire_id: &str) -> Result<(), ApiError> {
        self.send(self.http.delete(self.endpoints.wire(wire_id)), "Failed to delete wire").await?;
        Ok(())
    }

    /// `GET /wireflows/`
    pub async fn list_wireflows(&self) -> Result<Vec<Wireflow>, ApiError> {
        let body = self.send(self.http.get(self.endpoints.wireflows()), "Failed to fetch wireflows").await?;
        Self::decode(&body)
    }

    /// `POST /wireflows/`
    pub async fn create_wireflow(&self, wireflow: &Wireflow) -> Result<(), ApiError> {
        self.send(self.http.post(self.endpoints.wireflows()).json(wireflow), "Failed to save wireflow").await?;
        Ok(())
    }

    /// `PUT /wireflows/{id}`
    pub async fn update_wireflow(&self, wireflow: &Wireflow) -> Result<(), ApiError> {
        let url = self.endpoints.wireflow(&wireflow.wireflow_id);
        self.send(self.http.put(url).json(wireflow), "Failed to save wireflow").await?;
        Ok(())
    }

    /// `DELETE /wireflows/{id}`
    pub async fn delete_wireflow(&self, wireflow_id: &str) -> Result<(), ApiError> {
        self.send(self.http.delete(self.endpoints.wireflow(wireflow_id)), "Failed to delete wireflow").await?;
        Ok(())
    }

    /// `POST /wires/execute` or `POST /wireflows/execute`.
    pub async fn execute(&self, request: &ExecuteRequest) -> Result<ExecuteResult, ApiError> {
        tracing::debug!(kind = request.kind(), id = request.id(), inputs = request.inputs().len(), "executing");
        let fallback = format!("Failed to execute {}", request.kind());
        let url = self.endpoints.execute(request);
        let body = self.send(self.http.post(url).json(request), &fallback).await?;
        // Some backends answer with a bare string.
        match serde_json::from_str::<Value>(&body) {
            Ok(Value::String(text)) => Ok(ExecuteResult { output: Some(Value::String(text)), ..ExecuteResult::default() }),
            Ok(_) => Self::decode(&body),
            Err(e) => Err(ApiError::Decode(e.to_string())),
        }
    }
}
