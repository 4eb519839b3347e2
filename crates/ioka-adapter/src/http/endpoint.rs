/*
[INPUT]:  Operation parameters (method, path segments, query, body) and raw responses
[OUTPUT]: Fully-qualified request URLs and typed results or StatusError
[POS]:    HTTP layer - transport-agnostic request description shared by both clients
[UPDATE]: When changing URL layout, response processing or error mapping
*/

use std::marker::PhantomData;
use std::time::Duration;

use reqwest::{Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::http::{IokaError, Result, StatusError};
use crate::types::QueryPairs;

/// One API call, independent of the client flavour that sends it.
///
/// `T` is the type the success body decodes into.
#[derive(Debug)]
pub(crate) struct Endpoint<T> {
    pub method: Method,
    segments: Vec<String>,
    query: QueryPairs,
    pub body: Option<serde_json::Value>,
    output: PhantomData<fn() -> T>,
}

impl<T> Endpoint<T> {
    pub fn new(method: Method, segments: &[&str]) -> Self {
        Self {
            method,
            segments: segments.iter().map(|segment| segment.to_string()).collect(),
            query: QueryPairs::new(),
            body: None,
            output: PhantomData,
        }
    }

    pub fn get(segments: &[&str]) -> Self {
        Self::new(Method::GET, segments)
    }

    pub fn post(segments: &[&str]) -> Self {
        Self::new(Method::POST, segments)
    }

    pub fn patch(segments: &[&str]) -> Self {
        Self::new(Method::PATCH, segments)
    }

    pub fn query(mut self, query: QueryPairs) -> Self {
        self.query = query;
        self
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Resolve against the versioned API root, encoding each segment
    pub fn url(&self, api_root: &Url) -> Result<Url> {
        let mut url = api_root.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                IokaError::Config(format!("base URL {api_root} cannot carry a path"))
            })?;
            path.pop_if_empty().extend(&self.segments);
        }
        if !self.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.query.iter().map(|(key, value)| (*key, value.as_str())));
        }
        Ok(url)
    }
}

impl<T: DeserializeOwned> Endpoint<T> {
    /// Decode a success body or turn the response into a [`StatusError`]
    pub fn process(&self, status: StatusCode, body: &[u8]) -> Result<T> {
        debug!(method = %self.method, status = status.as_u16(), bytes = body.len(), "ioka response");

        if status.is_success() {
            return Ok(serde_json::from_slice(body)?);
        }

        let err = StatusError::from_response(status, body);
        warn!(
            method = %self.method,
            status = status.as_u16(),
            code = %err.code,
            message = %err.message,
            "ioka api error"
        );
        Err(err.into())
    }
}

/// Require a non-empty identifier before it becomes a path segment
pub(crate) fn require_id<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(IokaError::InvalidArgument(format!("{name} must not be empty")));
    }
    Ok(value)
}

/// Classify a transport failure from either client flavour
pub(crate) fn transport_error(err: reqwest::Error, timeout: Duration) -> IokaError {
    if err.is_timeout() {
        warn!(timeout_ms = timeout.as_millis() as u64, error = %err, "ioka request timed out");
        IokaError::Timeout { duration: timeout }
    } else {
        warn!(error = %err, "ioka request failed");
        IokaError::Http(err)
    }
}
