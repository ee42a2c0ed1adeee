//! Mock implementations for testing.
//!
//! These run without network access and record what they were asked to do.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`MockGateway`] - Learning gateway with scripted results

pub mod gateway;
pub mod http;

pub use gateway::{GatewayCall, MockGateway};
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
