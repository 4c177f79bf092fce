//! Shared GET helper for the upstream API.
//!
//! Every request carries the same browser-like header set the provider's
//! public web site sends.

use reqwest::header::{
    ACCEPT_LANGUAGE, HOST, HeaderMap, HeaderName, HeaderValue, ORIGIN, USER_AGENT,
};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use fuel_types::UpstreamError;

use crate::config::ClientConfig;

pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";
pub const SITE_ORIGIN: &str = "https://www.opet.com.tr";
pub const CHANNEL: &str = "Web";
pub const LOCALE: &str = "tr-TR";

/// Stateless GET + JSON decode over a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: Client,
}

impl HttpFetcher {
    pub fn new(config: &ClientConfig) -> Result<Self, UpstreamError> {
        let http = Client::builder()
            .default_headers(default_headers(config))
            .timeout(config.timeout)
            .build()
            .map_err(|e| UpstreamError::Transport {
                url: config.base_url.clone(),
                message: e.to_string(),
            })?;

        Ok(Self { http })
    }

    /// GETs `url` and decodes the body as `T`.
    ///
    /// Anything but `200 OK` is returned as `UpstreamError::Status` with the
    /// raw body; the body is not parsed in that case.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, UpstreamError> {
        tracing::debug!("sending upstream request");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "upstream returned non-200");
            return Err(UpstreamError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await.map_err(|e| transport_error(url, e))?;
        serde_json::from_str(&body).map_err(|e| UpstreamError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

fn default_headers(config: &ClientConfig) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(ORIGIN, HeaderValue::from_static(SITE_ORIGIN));
    headers.insert(
        HeaderName::from_static("channel"),
        HeaderValue::from_static(CHANNEL),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(LOCALE));

    if let Some(host) = config
        .host_header()
        .and_then(|h| HeaderValue::from_str(&h).ok())
    {
        headers.insert(HOST, host);
    }

    headers
}

fn transport_error(url: &str, err: reqwest::Error) -> UpstreamError {
    tracing::warn!(error = %err, "upstream request failed");
    UpstreamError::Transport {
        url: url.to_string(),
        message: err.to_string(),
    }
}
