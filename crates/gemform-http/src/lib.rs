//! gemform-http
//!
//! Blocking HTTP delivery of submission payloads to the search agent.
//! Implements `gemform_core::SubmitTransport`; endpoint, timeout and headers
//! come from `gemform_config::Config`.

use std::{collections::BTreeMap, time::Duration};

use reqwest::{
    blocking::Client,
    header::{HeaderMap, HeaderName, HeaderValue},
};
use tracing::debug;

use gemform_config::Config;
use gemform_core::{SubmissionPayload, SubmitReceipt, SubmitTransport, TransportError};

/// Posts payloads as JSON to one configured endpoint. No retries.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Duration,
        headers: &BTreeMap<String, String>,
    ) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .default_headers(header_map(headers)?)
            .build()
            .map_err(|err| TransportError::Client(err.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, TransportError> {
        Self::new(config.endpoint.clone(), config.timeout(), &config.headers)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SubmitTransport for HttpTransport {
    fn send(&self, payload: &SubmissionPayload) -> Result<SubmitReceipt, TransportError> {
        let body =
            serde_json::to_vec(payload).map_err(|err| TransportError::Serialize(err.to_string()))?;
        debug!(endpoint = %self.endpoint, bytes = body.len(), "posting search request");

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(map_request_error)?;

        let status = response.status();
        let text = response.text().map_err(map_request_error)?;
        if status.is_success() {
            Ok(SubmitReceipt::new(status.as_u16(), text))
        } else {
            Err(TransportError::Status {
                status: status.as_u16(),
                body: text,
            })
        }
    }
}

fn header_map(headers: &BTreeMap<String, String>) -> Result<HeaderMap, TransportError> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| TransportError::Client(format!("invalid header name `{}`", name)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| TransportError::Client(format!("invalid value for header `{}`", name)))?;
        map.insert(name, value);
    }
    Ok(map)
}

fn map_request_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connect(err.to_string())
    } else {
        TransportError::Client(err.to_string())
    }
}
