//! Authenticated HTTP capability.
//!
//! Client-side (csr): real requests via `gloo-net`, sent with the session
//! cookie, the CSRF token and the AJAX marker header the Django views check
//! before returning partial templates.
//! Native builds: `BrowserFetch` reports `ApiError::Unavailable`.
//!
//! ERROR HANDLING
//! ==============
//! A non-2xx response is not an error at this layer: callers receive a
//! `FetchResponse` with `ok == false` and decide how to degrade. Only
//! transport failures surface as `Err`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

/// Response-like value: status flag plus the raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub ok: bool,
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `Status` for non-OK responses and `Decode` for malformed bodies.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        self.ensure_ok()?;
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Body text of an OK response.
    ///
    /// # Errors
    ///
    /// Returns `Status` for non-OK responses.
    pub fn text(self) -> Result<String, ApiError> {
        self.ensure_ok()?;
        Ok(self.body)
    }

    fn ensure_ok(&self) -> Result<(), ApiError> {
        if self.ok { Ok(()) } else { Err(ApiError::Status(self.status)) }
    }
}

/// Issues requests with the session's credentials attached.
#[allow(async_fn_in_trait)]
pub trait AuthFetch {
    /// `GET url`.
    async fn get(&self, url: &str) -> Result<FetchResponse, ApiError>;
    /// `POST url` with an empty body.
    async fn post(&self, url: &str) -> Result<FetchResponse, ApiError>;
}

/// `AuthFetch` backed by the browser's `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserFetch;

#[cfg(feature = "csr")]
impl BrowserFetch {
    async fn send(builder: gloo_net::http::RequestBuilder) -> Result<FetchResponse, ApiError> {
        let mut builder = builder
            .credentials(web_sys::RequestCredentials::Include)
            .header("X-Requested-With", "XMLHttpRequest");
        if let Some(token) = crate::util::dom::csrf_token() {
            builder = builder.header("X-CSRFToken", &token);
        }
        let resp = builder.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let ok = resp.ok();
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(FetchResponse { ok, status, body })
    }
}

impl AuthFetch for BrowserFetch {
    async fn get(&self, url: &str) -> Result<FetchResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            Self::send(gloo_net::http::Request::get(url)).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = url;
            Err(ApiError::Unavailable)
        }
    }

    async fn post(&self, url: &str) -> Result<FetchResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            Self::send(gloo_net::http::Request::post(url)).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = url;
            Err(ApiError::Unavailable)
        }
    }
}
