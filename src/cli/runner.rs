//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::ClientOptions;
use crate::error::{Error, Result};
use crate::http::Client;
use crate::types::{GetProductsResponse, GetResourceSubscriptionsResponse, ResourceSubscription};
use serde::Serialize;
use std::io::Write;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Result of a CLI command
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Products(GetProductsResponse),
    ResourceSubscriptions(GetResourceSubscriptionsResponse),
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print the result to stdout
    pub async fn run(&self, cancel: &CancellationToken) -> Result<()> {
        let output = self.execute(cancel).await?;
        write_json(&mut std::io::stdout().lock(), &output)
    }

    /// Run the CLI command and return the decoded response
    pub async fn execute(&self, cancel: &CancellationToken) -> Result<Output> {
        let client = self.client();
        debug!("Using {:?}", client);

        match &self.cli.command {
            Commands::GetProducts => Ok(Output::Products(client.get_products(cancel).await?)),
            Commands::GetResourceSubscriptions { name } => {
                let name = name.as_deref().ok_or_else(|| {
                    Error::usage(format!(
                        "Usage: gumroad get-resource-subscriptions [{}]",
                        ResourceSubscription::names().join(" ")
                    ))
                })?;
                Ok(Output::ResourceSubscriptions(
                    client.get_resource_subscriptions(cancel, name).await?,
                ))
            }
        }
    }

    /// Build the API client from flags and environment
    pub fn client(&self) -> Client {
        let mut builder = ClientOptions::builder()
            .access_token(self.cli.access_token.clone().unwrap_or_default())
            .timeout(Duration::from_secs(self.cli.timeout));
        if let Some(endpoint) = &self.cli.endpoint {
            builder = builder.endpoint(endpoint.clone());
        }
        Client::with_options(builder.build())
    }
}

/// Write `value` as JSON indented by two spaces, followed by a newline
pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(Error::Output)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BaseResponse;
    use clap::Parser;

    #[test]
    fn test_write_json_indents_two_spaces() {
        let output = Output::Products(GetProductsResponse {
            base: BaseResponse { success: true },
            products: Vec::new(),
        });
        let mut out = Vec::new();
        write_json(&mut out, &output).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\n  \"success\": true,\n  \"products\": []\n}\n"
        );
    }

    #[test]
    fn test_client_from_flags() {
        let cli = Cli::try_parse_from([
            "gumroad",
            "--endpoint",
            "http://localhost:9000/",
            "--timeout",
            "7",
            "get-products",
        ])
        .unwrap();
        let client = Runner::new(cli).client();

        assert_eq!(client.endpoint(), "http://localhost:9000");
        assert_eq!(client.timeout(), Some(Duration::from_secs(7)));
    }

    #[tokio::test]
    async fn test_missing_subscription_name_prints_usage() {
        let cli = Cli::try_parse_from(["gumroad", "get-resource-subscriptions"]).unwrap();
        let err = Runner::new(cli)
            .execute(&CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Usage(_)));
        let message = err.to_string();
        assert!(message.starts_with("Usage: gumroad get-resource-subscriptions"));
        for name in ResourceSubscription::names() {
            assert!(message.contains(name));
        }
    }
}
