//! Common types used throughout the Gumroad client
//!
//! This module contains the resource subscription tags, the response
//! envelopes returned by the API, and the webhook ping payload shape.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Resource Subscriptions
// ============================================================================

/// Event category a webhook subscription can be registered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceSubscription {
    Sale,
    Refund,
    Dispute,
    DisputeWon,
    Cancellation,
    SubscriptionUpdated,
    SubscriptionEnded,
    SubscriptionRestarted,
}

impl ResourceSubscription {
    /// Every valid subscription, in the order the API documents them
    pub const ALL: [ResourceSubscription; 8] = [
        ResourceSubscription::Sale,
        ResourceSubscription::Refund,
        ResourceSubscription::Dispute,
        ResourceSubscription::DisputeWon,
        ResourceSubscription::Cancellation,
        ResourceSubscription::SubscriptionUpdated,
        ResourceSubscription::SubscriptionEnded,
        ResourceSubscription::SubscriptionRestarted,
    ];

    /// Tag sent on the wire as `resource_name`
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceSubscription::Sale => "sale",
            ResourceSubscription::Refund => "refund",
            ResourceSubscription::Dispute => "dispute",
            ResourceSubscription::DisputeWon => "dispute_won",
            ResourceSubscription::Cancellation => "cancellation",
            ResourceSubscription::SubscriptionUpdated => "subscription_updated",
            ResourceSubscription::SubscriptionEnded => "subscription_ended",
            ResourceSubscription::SubscriptionRestarted => "subscription_restarted",
        }
    }

    /// Tags of every valid subscription
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|r| r.as_str()).collect()
    }

    /// Look up a subscription by its tag
    pub fn parse(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == name)
            .ok_or_else(|| Error::InvalidResourceSubscription {
                name: name.to_string(),
                valid: Self::names().into_iter().map(String::from).collect(),
            })
    }

    /// Check whether `name` is one of the valid tags
    pub fn is_valid(name: &str) -> bool {
        Self::parse(name).is_ok()
    }
}

impl fmt::Display for ResourceSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ResourceSubscription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for ResourceSubscription {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// ============================================================================
// Response Envelopes
// ============================================================================

/// Deserialize `null` as the type's default value
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Fields shared by every API response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BaseResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
}

/// A product as listed by `GET /v2/products`
///
/// Only the commonly used fields are typed; everything else the API returns
/// is kept in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub short_url: String,
    /// Price in the currency's smallest unit
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub published: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, JsonValue>,
}

/// Response of `GET /v2/products`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetProductsResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<Product>,
}

/// A registered webhook subscription
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceSubscriptionRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub resource_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub post_url: String,
}

/// Response of `GET /v2/resource_subscriptions`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetResourceSubscriptionsResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resource_subscriptions: Vec<ResourceSubscriptionRecord>,
}

// ============================================================================
// Webhook Ping
// ============================================================================

/// Payload Gumroad sends to a seller's webhook endpoint after a sale.
///
/// This crate never receives pings itself; the type is provided for servers
/// that do.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PingRequest {
    pub sale_id: String,
    pub sale_timestamp: String,
    pub order_number: String,
    pub seller_id: String,
    pub product_id: String,
    pub product_permalink: String,
    pub short_product_id: String,
    pub email: String,
    pub url_params: StringMap,
    pub full_name: String,
    pub purchaser_id: String,
    pub subscription_id: String,
    pub ip_country: String,
    pub price: i64,
    pub recurrence: String,
    pub variants: StringMap,
    pub offer_code: String,
    pub test: bool,
    pub custom_fields: StringMap,
    pub shipping_information: StringMap,
    pub is_recurring_charge: bool,
    pub is_preorder_authorization: bool,
    pub license_key: String,
    pub quantity: i64,
    pub shipping_rate: i64,
    pub affiliate: String,
    pub affiliate_credit_amount_cents: i64,
    pub is_gift_receiver_purchase: bool,
    pub gifter_email: String,
    pub gift_price: i64,
    pub refunded: bool,
    pub discover_fee_charge: bool,
    pub can_contact: bool,
    pub referrer: String,
    pub gumroad_fee: i64,
    pub card: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_resource_subscription_order() {
        assert_eq!(
            ResourceSubscription::names(),
            vec![
                "sale",
                "refund",
                "dispute",
                "dispute_won",
                "cancellation",
                "subscription_updated",
                "subscription_ended",
                "subscription_restarted",
            ]
        );
    }

    #[test]
    fn test_resource_subscription_parse() {
        for sub in ResourceSubscription::ALL {
            assert_eq!(ResourceSubscription::parse(sub.as_str()).unwrap(), sub);
            assert_eq!(sub.to_string().parse::<ResourceSubscription>().unwrap(), sub);
        }

        let err = ResourceSubscription::parse("bogus").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("subscription_restarted"));

        // Tags are case sensitive
        assert!(!ResourceSubscription::is_valid("Sale"));
        assert!(!ResourceSubscription::is_valid(""));
    }

    #[test]
    fn test_resource_subscription_serde_matches_tag() {
        for sub in ResourceSubscription::ALL {
            let value = serde_json::to_value(sub).unwrap();
            assert_eq!(value, json!(sub.as_str()));
        }
    }

    #[test]
    fn test_products_response_flattens_base() {
        let resp: GetProductsResponse = serde_json::from_value(json!({
            "success": true,
            "products": [{
                "id": "abc",
                "name": "Ebook",
                "price": 500,
                "currency": "usd",
                "published": true,
                "tags": ["books"]
            }]
        }))
        .unwrap();

        assert!(resp.base.success);
        assert_eq!(resp.products.len(), 1);
        assert_eq!(resp.products[0].name, "Ebook");
        assert_eq!(resp.products[0].short_url, "");
        assert_eq!(resp.products[0].extra["tags"], json!(["books"]));

        let out = serde_json::to_value(&resp).unwrap();
        assert_eq!(out["success"], json!(true));
        assert!(out.get("base").is_none());
    }

    #[test]
    fn test_products_response_without_products() {
        let resp: GetProductsResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(resp.base.success);
        assert!(resp.products.is_empty());
    }

    #[test]
    fn test_resource_subscriptions_response() {
        let resp: GetResourceSubscriptionsResponse = serde_json::from_value(json!({
            "success": true,
            "resource_subscriptions": [
                {"id": "G_-mnBf9b1j9A7a4ub4nFQ==", "resource_name": "sale", "post_url": "https://example.com/hook"}
            ]
        }))
        .unwrap();

        assert_eq!(
            resp.resource_subscriptions,
            vec![ResourceSubscriptionRecord {
                id: "G_-mnBf9b1j9A7a4ub4nFQ==".to_string(),
                resource_name: "sale".to_string(),
                post_url: "https://example.com/hook".to_string(),
            }]
        );
    }

    #[test]
    fn test_null_fields_decode_as_defaults() {
        let resp: GetProductsResponse = serde_json::from_value(json!({
            "success": true,
            "products": [{
                "id": "abc",
                "name": null,
                "short_url": null,
                "price": 1.5,
                "currency": null,
                "published": null
            }]
        }))
        .unwrap();

        let product = &resp.products[0];
        assert_eq!(product.id, "abc");
        assert_eq!(product.name, "");
        assert_eq!(product.short_url, "");
        assert!((product.price - 1.5).abs() < f64::EPSILON);
        assert!(!product.published);
        assert!(product.extra.is_empty());

        let resp: GetProductsResponse =
            serde_json::from_str(r#"{"success": null, "products": null}"#).unwrap();
        assert!(!resp.base.success);
        assert!(resp.products.is_empty());

        let resp: GetResourceSubscriptionsResponse =
            serde_json::from_str(r#"{"success": true, "resource_subscriptions": null}"#).unwrap();
        assert!(resp.base.success);
        assert!(resp.resource_subscriptions.is_empty());

        let resp: GetResourceSubscriptionsResponse = serde_json::from_value(json!({
            "success": true,
            "resource_subscriptions": [{"id": "sub-1", "resource_name": "sale", "post_url": null}]
        }))
        .unwrap();
        assert_eq!(resp.resource_subscriptions[0].post_url, "");
    }

    #[test]
    fn test_ping_request_partial_payload() {
        let ping: PingRequest = serde_json::from_value(json!({
            "sale_id": "s1",
            "price": 1000,
            "test": true,
            "custom_fields": {"company": "Acme"}
        }))
        .unwrap();

        assert_eq!(ping.sale_id, "s1");
        assert_eq!(ping.price, 1000);
        assert!(ping.test);
        assert_eq!(ping.custom_fields.get("company"), Some(&"Acme".to_string()));
        assert_eq!(ping.quantity, 0);
        assert!(ping.variants.is_empty());
    }
}
