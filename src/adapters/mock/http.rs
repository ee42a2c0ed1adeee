//! Mock HTTP client for testing.
//!
//! Provides a configurable mock HTTP client that can return predefined
//! responses or errors per method and URL, and records every request.

use async_trait::async_trait;
use bytes::Bytes;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method (GET or POST)
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body (for POST requests)
    pub body: Option<String>,
}

impl RecordedRequest {
    /// Parse the recorded body as JSON.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_str(body).ok())
    }
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Fail at the transport level
    Error(HttpError),
}

impl MockResponse {
    /// A response with a JSON body.
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        MockResponse::Success(Response::new(status, Bytes::from(body.to_string())))
    }

    /// A response with a raw text body.
    pub fn text(status: u16, body: &str) -> Self {
        MockResponse::Success(Response::new(status, Bytes::from(body.to_string())))
    }
}

#[derive(Debug, Clone)]
struct Route {
    /// `None` matches any method
    method: Option<String>,
    url: String,
    response: MockResponse,
}

/// Mock HTTP client for testing.
///
/// Lookup order: exact URL for the request's method, exact URL for any
/// method, longest configured prefix, then the default response.
///
/// # Example
///
/// ```ignore
/// use skillbridge::adapters::mock::{MockHttpClient, MockResponse};
///
/// let client = MockHttpClient::new();
/// client.set_method_response("GET", "http://api/api/learning", MockResponse::json(200, json!([])));
///
/// let response = client.get("http://api/api/learning", &Headers::new()).await?;
/// assert_eq!(client.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    /// Configured routes
    routes: Arc<Mutex<Vec<Route>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self {
            routes: Arc::new(Mutex::new(Vec::new())),
            default_response: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set a response for a URL regardless of method.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        self.insert_route(None, url, response);
    }

    /// Set a response for a method + URL pair.
    pub fn set_method_response(&self, method: &str, url: &str, response: MockResponse) {
        self.insert_route(Some(method.to_uppercase()), url, response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Count recorded requests matching a method and exact URL.
    pub fn count_requests(&self, method: &str, url: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.method == method && r.url == url)
            .count()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn insert_route(&self, method: Option<String>, url: &str, response: MockResponse) {
        let mut routes = self.routes.lock().unwrap();
        routes.retain(|r| !(r.method == method && r.url == url));
        routes.push(Route {
            method,
            url: url.to_string(),
            response,
        });
    }

    /// Record a request.
    fn record_request(&self, method: &str, url: &str, headers: &Headers, body: Option<String>) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });
    }

    /// Get the response for a request.
    fn get_response(&self, method: &str, url: &str) -> Option<MockResponse> {
        let routes = self.routes.lock().unwrap();
        let method_matches = |route: &Route| route.method.as_deref().map_or(true, |m| m == method);

        let exact = routes
            .iter()
            .filter(|r| r.url == url && method_matches(r))
            .max_by_key(|r| r.method.is_some());
        if let Some(route) = exact {
            return Some(route.response.clone());
        }

        let prefix = routes
            .iter()
            .filter(|r| url.starts_with(&r.url) && method_matches(r))
            .max_by_key(|r| (r.url.len(), r.method.is_some()));
        if let Some(route) = prefix {
            return Some(route.response.clone());
        }

        self.default_response.lock().unwrap().clone()
    }

    fn respond(&self, method: &str, url: &str) -> Result<Response, HttpError> {
        match self.get_response(method, url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("GET", url, headers, None);
        self.respond("GET", url)
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("POST", url, headers, Some(body.to_string()));
        self.respond("POST", url)
    }
}
