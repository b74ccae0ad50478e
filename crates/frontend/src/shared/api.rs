//! HTTP calls made by the dashboard.

use crate::shared::error::ClientError;
use async_trait::async_trait;
use contracts::BulkDeleteRequest;
use gloo_net::http::Request;
use web_sys::RequestCredentials;

/// Everything needed to send one bulk delete.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteCall {
    pub url: String,
    /// Sent as `X-CSRFToken` when present
    pub csrf_token: Option<String>,
    /// Adds `X-Requested-With: XMLHttpRequest`
    pub ajax_header: bool,
    pub body: BulkDeleteRequest,
}

/// Status and raw body of a completed request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait DashboardApi {
    /// Sends the DELETE. Only transport failures are errors; any HTTP
    /// status comes back as a reply.
    async fn bulk_delete(&self, call: &DeleteCall) -> Result<HttpReply, ClientError>;

    /// GETs an HTML fragment; non-success statuses are errors.
    async fn fetch_fragment(&self, url: &str) -> Result<String, ClientError>;
}

#[derive(Clone, Copy, Default)]
pub struct GlooApi;

#[async_trait(?Send)]
impl DashboardApi for GlooApi {
    async fn bulk_delete(&self, call: &DeleteCall) -> Result<HttpReply, ClientError> {
        let mut builder = Request::delete(&call.url).header("Content-Type", "application/json");
        if let Some(token) = &call.csrf_token {
            builder = builder.header("X-CSRFToken", token);
        }
        if call.ajax_header {
            builder = builder.header("X-Requested-With", "XMLHttpRequest");
        }

        let body = serde_json::to_string(&call.body)?;
        let response = builder.body(body)?.send().await?;
        let status = response.status();
        let body = response.text().await?;
        log::debug!("DELETE {} -> {}", call.url, status);

        Ok(HttpReply { status, body })
    }

    async fn fetch_fragment(&self, url: &str) -> Result<String, ClientError> {
        let response = Request::get(url)
            .credentials(RequestCredentials::SameOrigin)
            .send()
            .await?;
        if !response.ok() {
            return Err(ClientError::Status(response.status()));
        }
        Ok(response.text().await?)
    }
}
