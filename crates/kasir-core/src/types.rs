//! # Domain Types
//!
//! Core domain types used throughout Kasir POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐            ┌─────────────────────┐             │
//! │  │      Product        │            │      Category       │             │
//! │  │  ─────────────────  │  0..1      │  ─────────────────  │             │
//! │  │  id (store)         │───────────►│  id (store)         │             │
//! │  │  name               │            │  name               │             │
//! │  │  stock, price       │            │  description        │             │
//! │  │  category_id?       │            └─────────────────────┘             │
//! │  │  category?          │                                                │
//! │  └─────────────────────┘                                                │
//! │                                                                         │
//! │  ┌─────────────────────┐            ┌─────────────────────┐             │
//! │  │   ProductInput      │            │   CategoryInput     │             │
//! │  │  (no id field)      │            │  (no id field)      │             │
//! │  └─────────────────────┘            └─────────────────────┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Identifiers are assigned by the store on insert. The `*Input` types are
//! what clients send on create and update; they carry no `id`, so a body
//! cannot choose or overwrite an identifier.

use serde::{Deserialize, Serialize};

// =============================================================================
// Category
// =============================================================================

/// A product category (e.g. "Beverage").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Category {
    /// Store-assigned identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Free-form description.
    pub description: String,
}

impl Category {
    /// Builds a category from a client payload once the store has an id.
    pub fn from_input(id: impl Into<String>, input: CategoryInput) -> Self {
        Category {
            id: id.into(),
            name: input.name,
            description: input.description,
        }
    }
}

/// Client-writable category fields, used for create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryInput {
    pub name: String,
    pub description: String,
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// ## Optional Category
/// `category_id` is the stored foreign key. `category` is the joined row and
/// is only present when the referenced category exists at read time. Both are
/// omitted from JSON when absent; an empty object is never emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier.
    pub id: String,

    /// Display name shown to cashier and on receipt.
    pub name: String,

    /// Units on hand. Stored as-is, no range checks.
    pub stock: i64,

    /// Price in the smallest currency unit.
    pub price: i64,

    /// Referenced category, if one is assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,

    /// The referenced category as of this read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// Client-writable product fields, used for create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductInput {
    pub name: String,
    pub stock: i64,
    pub price: i64,
    pub category_id: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_without_category_omits_fields() {
        let product = Product {
            id: "1".to_string(),
            name: "Coffee".to_string(),
            stock: 10,
            price: 15000,
            category_id: None,
            category: None,
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(
            value,
            json!({"id": "1", "name": "Coffee", "stock": 10, "price": 15000})
        );
    }

    #[test]
    fn test_product_with_category_serializes_nested() {
        let product = Product {
            id: "7".to_string(),
            name: "Iced Tea".to_string(),
            stock: 3,
            price: 8000,
            category_id: Some("2".to_string()),
            category: Some(Category {
                id: "2".to_string(),
                name: "Beverage".to_string(),
                description: "Drinks".to_string(),
            }),
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["category_id"], "2");
        assert_eq!(value["category"]["name"], "Beverage");
    }

    #[test]
    fn test_input_ignores_client_id() {
        let input: CategoryInput =
            serde_json::from_str(r#"{"id":"99","name":"Dessert","description":"Sweets"}"#)
                .unwrap();
        let category = Category::from_input("3", input);

        assert_eq!(category.id, "3");
        assert_eq!(category.name, "Dessert");
    }

    #[test]
    fn test_input_missing_fields_default() {
        let input: ProductInput = serde_json::from_str(r#"{"name":"Water"}"#).unwrap();

        assert_eq!(input.stock, 0);
        assert_eq!(input.price, 0);
        assert_eq!(input.category_id, None);
    }
}
