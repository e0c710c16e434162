//! Catalog item types.

use serde::{Deserialize, Serialize};

/// A catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
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

impl Item {
    /// Creates a new item with the given name and price.
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
            tax: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the tax amount.
    #[must_use]
    pub fn with_tax(mut self, tax: f64) -> Self {
        self.tax = Some(tax);
        self
    }

    /// Returns the price including tax, when a tax amount is present.
    #[must_use]
    pub fn price_with_tax(&self) -> Option<f64> {
        self.tax.map(|tax| self.price + tax)
    }
}

/// An item together with its store-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredItem {
    /// Store-assigned identifier.
    pub id: u64,
    /// The item itself.
    #[serde(flatten)]
    pub item: Item,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_with_tax() {
        let item = Item::new("Widget", 10.0).with_tax(2.5);
        assert_eq!(item.price_with_tax(), Some(12.5));
    }

    #[test]
    fn test_price_without_tax() {
        let item = Item::new("Widget", 10.0);
        assert_eq!(item.price_with_tax(), None);
    }

    #[test]
    fn test_item_deserialization() {
        let json = r#"{"name": "Widget", "price": 9.99}"#;
        let item: Item = serde_json::from_str(json).unwrap();

        assert_eq!(item.name, "Widget");
        assert_eq!(item.price, 9.99);
        assert!(item.description.is_none());
        assert!(item.tax.is_none());
    }

    #[test]
    fn test_stored_item_flattens() {
        let stored = StoredItem {
            id: 7,
            item: Item::new("Widget", 1.0).with_description("A widget"),
        };

        let json = serde_json::to_string(&stored).unwrap();
        assert!(json.contains("\"id\":7"));
        assert!(json.contains("\"name\":\"Widget\""));
    }
}
