//! HTTP request building for the record endpoint

use crate::error::Error;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use std::time::Duration;
use url::Url;

/// Helper for building and executing HTTP requests
pub struct FetchBuilder<'a> {
    client: &'a Client,
    url: String,
    method: Method,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
    timeout: Option<Duration>,
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
            body: None,
            timeout: None,
        }
    }

    /// Add a JSON body to the request
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, Error> {
        let json = serde_json::to_vec(body)?;
        self.body = Some(json);
        Ok(self)
    }

    /// Set a per-request timeout
    pub fn timeout(mut self, value: Option<Duration>) -> Self {
        self.timeout = value;
        self
    }

    /// Build the request
    fn build(&self) -> Result<RequestBuilder, Error> {
        let url = Url::parse(&self.url)?;

        let mut req = self.client.request(self.method.clone(), url.as_str());
        req = req.headers(self.headers.clone());

        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }

        if let Some(body) = &self.body {
            req = req.body(body.clone());
        }

        Ok(req)
    }

    /// Execute the request and return the raw response.
    ///
    /// Status handling stays with the caller: the record store client
    /// classifies non-2xx statuses itself, and fire-and-forget writes
    /// deliberately ignore the response.
    pub async fn execute_raw(&self) -> Result<reqwest::Response, Error> {
        let req = self.build()?;
        let response = req.send().await?;
        Ok(response)
    }
}

/// Helper for creating HTTP requests
pub struct Fetch;

impl Fetch {
    /// Create a GET request
    pub fn get<'a>(client: &'a Client, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, url, Method::GET)
    }

    /// Create a POST request
    pub fn post<'a>(client: &'a Client, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, url, Method::POST)
    }
}
