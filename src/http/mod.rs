//! HTTP client module
//!
//! Typed access to the Gumroad REST API.
//!
//! # Features
//!
//! - **Typed Endpoints**: One async method per API operation
//! - **Form Parameters**: Arguments and the access token travel in a form-encoded body
//! - **Cancellation**: Every call races a caller-supplied `CancellationToken`
//! - **Single Attempt**: No retries, no pagination, no rate limiting

mod client;

pub use client::Client;
