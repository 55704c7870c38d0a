//! # gumroad
//!
//! A minimal client for the [Gumroad API](https://app.gumroad.com/api).
//!
//! ## Features
//!
//! - **Products**: List the products of the authenticated seller
//! - **Resource Subscriptions**: List the webhooks registered for an event category
//! - **Webhook Payloads**: `PingRequest` describes what Gumroad POSTs to a webhook
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gumroad::{Client, ClientOptions, ResourceSubscription, Result};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::with_options(
//!         ClientOptions::builder().access_token("your-token").build(),
//!     );
//!     let cancel = CancellationToken::new();
//!
//!     let products = client.get_products(&cancel).await?;
//!     println!("{} products", products.products.len());
//!
//!     let hooks = client
//!         .get_resource_subscriptions(&cancel, ResourceSubscription::Sale)
//!         .await?;
//!     for hook in hooks.resource_subscriptions {
//!         println!("{} -> {}", hook.resource_name, hook.post_url);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Resource subscriptions, response envelopes and webhook payloads
pub mod types;

/// Client options and defaults
pub mod config;

/// HTTP client for the API endpoints
pub mod http;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ClientOptions;
pub use error::{Error, Result};
pub use http::Client;
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
