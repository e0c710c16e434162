//! Wire types for the catalog API.
//!
//! These types pin down the JSON shapes of every route. Fields the API
//! omits from the object when absent carry `skip_serializing_if`; fields
//! it serializes as `null` do not.

use serde::{Deserialize, Serialize};

use emporium_core::{Item, ModelName};

// === Root ===

/// Greeting returned by the root route.
#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    /// Greeting message.
    pub message: String,
}

// === Items ===

/// Item body accepted by the create and update routes.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemPayload {
    /// Item name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Unit price.
    pub price: f64,
    /// Tax amount added on top of the price.
    #[serde(default)]
    pub tax: Option<f64>,
}

impl From<ItemPayload> for Item {
    fn from(payload: ItemPayload) -> Self {
        Self {
            name: payload.name,
            description: payload.description,
            price: payload.price,
            tax: payload.tax,
        }
    }
}

/// Response to item creation: the payload echoed back, with the
/// tax-inclusive price when a tax amount was supplied.
#[derive(Debug, Clone, Serialize)]
pub struct CreateItemResponse {
    /// Item name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Unit price.
    pub price: f64,
    /// Tax amount.
    pub tax: Option<f64>,
    /// Price including tax (only when a tax amount was supplied).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_with_tax: Option<f64>,
}

/// Response to an item update.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateItemResponse {
    /// The updated item's id.
    pub item_id: u64,
    /// Item name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Unit price.
    pub price: f64,
    /// Tax amount.
    pub tax: Option<f64>,
    /// Search query, echoed back when supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

/// A single entry in the item listing.
#[derive(Debug, Clone, Serialize)]
pub struct ItemSummary {
    /// Item name.
    pub item_name: String,
}

/// Response to the item listing route.
#[derive(Debug, Clone, Serialize)]
pub struct ListItemsResponse {
    /// The requested page of items.
    pub items: Vec<ItemSummary>,
    /// Effective search terms (the defaults when none were supplied).
    pub q: Vec<String>,
}

/// Response to a single-item read.
#[derive(Debug, Clone, Serialize)]
pub struct ItemDetail {
    /// The item's id.
    pub item_id: u64,
    /// The required marker parameter, echoed back.
    pub needy: String,
    /// Search query, echoed back.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// Long description (omitted for short reads).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// === Users ===

/// Response to a user lookup.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    /// The user's id.
    pub user_id: String,
}

/// Response to a user-item lookup.
#[derive(Debug, Clone, Serialize)]
pub struct UserItemResponse {
    /// The item's id.
    pub item_id: String,
    /// The owning user's id.
    pub owner_id: String,
    /// Search query, echoed back when supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// Long description (omitted for short reads).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// === Models ===

/// Response to a model lookup.
#[derive(Debug, Clone, Serialize)]
pub struct ModelResponse {
    /// The model that was looked up.
    pub model_name: ModelName,
    /// The model's canned message.
    pub message: String,
}

// === Status ===

/// Server status report.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    /// Always "running".
    pub status: String,
    /// Seconds since the server started.
    pub uptime_seconds: u64,
    /// Number of items in the catalog.
    pub items: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_payload_deserialization() {
        let json = r#"{
            "name": "Widget",
            "description": "A fine widget",
            "price": 10.5,
            "tax": 1.5
        }"#;

        let payload: ItemPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.name, "Widget");
        assert_eq!(payload.description.as_deref(), Some("A fine widget"));
        assert_eq!(payload.price, 10.5);
        assert_eq!(payload.tax, Some(1.5));
    }

    #[test]
    fn test_item_payload_optional_fields_default() {
        let json = r#"{"name": "Widget", "price": 10.5}"#;
        let payload: ItemPayload = serde_json::from_str(json).unwrap();

        assert!(payload.description.is_none());
        assert!(payload.tax.is_none());
    }

    #[test]
    fn test_create_response_includes_tax_inclusive_price() {
        let response = CreateItemResponse {
            name: "Widget".to_string(),
            description: None,
            price: 10.5,
            tax: Some(1.5),
            price_with_tax: Some(12.0),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"price_with_tax\":12.0"));
        // description was absent in the request and serializes as null
        assert!(json.contains("\"description\":null"));
    }

    #[test]
    fn test_create_response_omits_missing_tax_inclusive_price() {
        let response = CreateItemResponse {
            name: "Widget".to_string(),
            description: None,
            price: 10.5,
            tax: None,
            price_with_tax: None,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("price_with_tax"));
    }

    #[test]
    fn test_item_detail_short_read_omits_description() {
        let detail = ItemDetail {
            item_id: 3,
            needy: "yes".to_string(),
            q: Some("widgets".to_string()),
            description: None,
        };

        let json = serde_json::to_string(&detail).unwrap();
        assert!(json.contains("\"needy\":\"yes\""));
        assert!(!json.contains("description"));
    }

    #[test]
    fn test_model_response_serialization() {
        let response = ModelResponse {
            model_name: ModelName::Alexnet,
            message: ModelName::Alexnet.message().to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"model_name\":\"alexnet\""));
        assert!(json.contains("Deep Learning FTW!"));
    }
}
