//! POS backend client.
//!
//! The backend exposes two JSON endpoints to the waiter front-end: one to
//! create an external customer and one to submit an order. Both are POSTs
//! carrying the anti-forgery token in the `X-CSRFToken` header, and both
//! answer `{"ok": bool, ...}` with HTTP 200 even for rejections.
//!
//! # Example
//!
//! ```rust,ignore
//! use comandera_waiter::pos::PosClient;
//!
//! let pos = PosClient::new(&config.pos);
//!
//! let customer = pos.create_customer(&name).await?;
//! let redirect = pos.submit_order(order_id, cart.lines()).await?;
//! ```

pub mod types;

use std::sync::Arc;

use comandera_core::{Customer, CustomerName, OrderId};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::instrument;

use crate::config::PosConfig;
use types::{
    CSRF_HEADER, CreateCustomerRequest, CreateCustomerResponse, OrderItem, SubmitOrderRequest,
    SubmitOrderResponse,
};

/// Errors that can occur when talking to the POS backend.
#[derive(Debug, Error)]
pub enum PosError {
    /// HTTP request failed (connection, timeout, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success HTTP status.
    #[error("POS returned HTTP {status}")]
    Status {
        /// The status the backend returned.
        status: reqwest::StatusCode,
    },

    /// Response body was not the expected JSON.
    #[error("invalid POS response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Backend processed the request and refused it (`ok: false`), or the
    /// success payload was missing a required field.
    #[error("POS rejected the request: {0}")]
    Rejected(String),
}

/// Client for the POS backend.
///
/// Cheaply cloneable; all clones share one connection pool.
#[derive(Clone)]
pub struct PosClient {
    inner: Arc<PosClientInner>,
}

struct PosClientInner {
    client: reqwest::Client,
    base_url: String,
    csrf_token: SecretString,
}

impl PosClient {
    /// Create a new POS backend client.
    #[must_use]
    pub fn new(config: &PosConfig) -> Self {
        Self {
            inner: Arc::new(PosClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.trim_end_matches('/').to_string(),
                csrf_token: config.csrf_token.clone(),
            }),
        }
    }

    /// POST a JSON body to `path` and decode the JSON response.
    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, PosError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{path}", self.inner.base_url);

        let response = self
            .inner
            .client
            .post(&url)
            .header(CSRF_HEADER, self.inner.csrf_token.expose_secret())
            .json(body)
            .send()
            .await?;

        let status = response.status();

        // Read the body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "POS backend returned non-success status"
            );
            return Err(PosError::Status { status });
        }

        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %response_text.chars().take(500).collect::<String>(),
                "Failed to parse POS response"
            );
            PosError::Parse(e)
        })
    }

    /// Create an external customer with the given (already trimmed) name.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, an
    /// unparseable body, or `ok: false`.
    #[instrument(skip(self), fields(name = %name))]
    pub async fn create_customer(&self, name: &CustomerName) -> Result<Customer, PosError> {
        let request = CreateCustomerRequest { name: name.as_str() };

        let response: CreateCustomerResponse = self
            .post_json("/garzon/agregar_cliente_externo/", &request)
            .await?;

        if !response.ok {
            return Err(PosError::Rejected("customer creation refused".to_string()));
        }

        let id = response
            .id
            .ok_or_else(|| PosError::Rejected("response missing customer id".to_string()))?;
        let name = response
            .name
            .as_deref()
            .map(CustomerName::parse)
            .transpose()
            .map_err(|e| PosError::Rejected(format!("response name invalid: {e}")))?
            .ok_or_else(|| PosError::Rejected("response missing customer name".to_string()))?;

        Ok(Customer::new(id, name))
    }

    /// Submit the order's cart lines. An empty cart submits an empty item
    /// list; the backend decides what that means.
    ///
    /// Returns the redirect URL the front-end should navigate to.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, an
    /// unparseable body, `ok: false`, or a success payload without a
    /// redirect URL.
    #[instrument(skip(self, lines), fields(order_id = %order_id, line_count = lines.len()))]
    pub async fn submit_order(
        &self,
        order_id: OrderId,
        lines: &[comandera_core::CartLine],
    ) -> Result<String, PosError> {
        let request = SubmitOrderRequest {
            items: lines.iter().map(OrderItem::from).collect(),
        };

        let response: SubmitOrderResponse = self
            .post_json(&format!("/garzon/enviar_comanda/{order_id}/"), &request)
            .await?;

        if !response.ok {
            return Err(PosError::Rejected("order submission refused".to_string()));
        }

        response
            .redirect
            .ok_or_else(|| PosError::Rejected("response missing redirect URL".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_error_display() {
        let err = PosError::Rejected("order submission refused".to_string());
        assert_eq!(err.to_string(), "POS rejected the request: order submission refused");
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let config = PosConfig {
            base_url: "http://localhost:8000/".to_string(),
            csrf_token: SecretString::from("aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6"),
        };
        let client = PosClient::new(&config);
        assert_eq!(client.inner.base_url, "http://localhost:8000");
    }
}
