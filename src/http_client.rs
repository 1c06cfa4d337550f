use anyhow::{Context, Result};
use connectivity_console_core::BASE_URL;
use crux_http::{
    HttpError,
    protocol::{HttpRequest, HttpResponse, HttpResult},
};
use log::debug;
use reqwest::{Client, Method};
use trait_variant::make;

use crate::config::DeviceConfig;

/// Executes the HTTP requests the core asks for
#[make(Send)]
pub trait DeviceTransport {
    async fn execute(&self, request: &HttpRequest) -> HttpResult;
}

/// Transport talking to the device API over HTTP
pub struct ReqwestTransport {
    client: Client,
    device_url: String,
}

impl ReqwestTransport {
    pub fn new(config: &DeviceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("failed to create device HTTP client")?;

        Ok(Self {
            client,
            device_url: config.url.clone(),
        })
    }

    /// Replace the core's placeholder prefix with the device URL
    pub fn resolve_url(&self, url: &str) -> String {
        match url.strip_prefix(BASE_URL) {
            Some(path) => format!("{}{path}", self.device_url),
            None => url.to_string(),
        }
    }

    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        let method = Method::from_bytes(request.method.as_bytes())
            .map_err(|e| HttpError::Url(format!("invalid method {}: {e}", request.method)))?;
        let url = self.resolve_url(&request.url);
        debug!("{method} {url}");

        let mut builder = self.client.request(method, url);
        for header in &request.headers {
            builder = builder.header(header.name.as_str(), header.value.as_str());
        }
        if !request.body.is_empty() {
            builder = builder.body(request.body.clone());
        }

        let response = builder.send().await.map_err(map_error)?;
        let mut reply = HttpResponse::status(response.status().as_u16());
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                reply.header(name.as_str(), value);
            }
        }
        let body = response.bytes().await.map_err(map_error)?;

        Ok(reply.body(body.to_vec()).build())
    }
}

impl DeviceTransport for ReqwestTransport {
    async fn execute(&self, request: &HttpRequest) -> HttpResult {
        match self.send(request).await {
            Ok(response) => HttpResult::Ok(response),
            Err(e) => HttpResult::Err(e),
        }
    }
}

fn map_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else {
        HttpError::Io(e.to_string())
    }
}
