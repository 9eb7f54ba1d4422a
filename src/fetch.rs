//! HTTP request plumbing for the Stockroom API
//!
//! Builds requests and collapses the backend's two response shapes, a
//! `{success, data, message}` envelope or the bare payload, into one decode
//! path so callers always get domain data or an [`Error`] with a readable
//! message.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

use crate::error::Error;

/// Helper for building and executing HTTP requests
pub struct FetchBuilder<'a> {
    client: &'a Client,
    url: String,
    method: Method,
    headers: HeaderMap,
    query_params: Option<HashMap<String, String>>,
    body: Option<Vec<u8>>,
}

impl<'a> FetchBuilder<'a> {
    /// Create a new FetchBuilder
    pub fn new(client: &'a Client, url: &str, method: Method) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));

        Self {
            client,
            url: url.to_string(),
            method,
            headers,
            query_params: None,
            body: None,
        }
    }

    /// Add a header to the request
    pub fn header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Add bearer token authentication to the request
    pub fn bearer_auth(self, token: &str) -> Self {
        self.header("Authorization", &format!("Bearer {}", token))
    }

    /// Add query parameters to the request
    pub fn query(mut self, params: HashMap<String, String>) -> Self {
        self.query_params = Some(params);
        self
    }

    /// Add a JSON body to the request
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, Error> {
        let json = serde_json::to_vec(body)?;
        self.body = Some(json);
        Ok(self)
    }

    /// Build the request
    fn build(&self) -> Result<RequestBuilder, Error> {
        let mut url = Url::parse(&self.url)?;

        if let Some(params) = &self.query_params {
            let mut query_pairs = url.query_pairs_mut();
            for (key, value) in params {
                query_pairs.append_pair(key, value);
            }
        }

        let mut req = self.client.request(self.method.clone(), url.as_str());
        req = req.headers(self.headers.clone());

        if let Some(body) = &self.body {
            req = req.body(body.clone());
        }

        Ok(req)
    }

    /// Execute the request and decode the response payload
    pub async fn execute<T: DeserializeOwned>(&self) -> Result<T, Error> {
        let req = self.build()?;
        let response = req.send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(error_from_body(status, &body));
        }

        decode_payload(status, &body)
    }

    /// Execute a request whose response body carries nothing the caller
    /// needs (deletes, logout)
    pub async fn execute_empty(&self) -> Result<(), Error> {
        let req = self.build()?;
        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(error_from_body(status, &body));
        }

        Ok(())
    }
}

/// The `{success, data, message}` wrapper some endpoints respond with
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct Envelope<T> {
    success: bool,
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    message: Option<String>,
}

/// A response body: either an envelope or the bare payload
///
/// The envelope arm is tried first; a bare payload has no `success` field
/// and falls through.
#[derive(Deserialize)]
#[serde(untagged)]
enum ApiPayload<T> {
    Wrapped(Envelope<T>),
    Bare(T),
}

/// Decode a successful response body into domain data
pub fn decode_payload<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, Error> {
    let payload: ApiPayload<T> = serde_json::from_str(body)?;

    match payload {
        ApiPayload::Wrapped(envelope) => {
            if envelope.success {
                envelope
                    .data
                    .ok_or_else(|| Error::general("response envelope carried no data"))
            } else {
                let message = envelope
                    .message
                    .unwrap_or_else(|| "request was rejected by the server".to_string());
                Err(Error::api(status.as_u16(), message))
            }
        }
        ApiPayload::Bare(value) => Ok(value),
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Normalize a non-2xx response into an [`Error::Api`]
///
/// The server's `message`/`error` field is passed through when present,
/// otherwise a generic fallback names the status.
pub fn error_from_body(status: StatusCode, body: &str) -> Error {
    let server_message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message.or(parsed.error));

    let message = server_message
        .unwrap_or_else(|| format!("request failed with status {}", status.as_u16()));

    Error::api(status.as_u16(), message)
}
