//! CLI module
//!
//! Command-line interface for the Gumroad API.
//!
//! # Commands
//!
//! - `get-products` - List your products
//! - `get-resource-subscriptions <name>` - List webhook subscriptions

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::{write_json, Output, Runner};
