//! Types for inventory items

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An inventory item as the server reports it
///
/// `sku` is the stable identity key; everything else can change between
/// fetches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Stock-keeping unit, the item's identity
    pub sku: String,

    /// Display name
    pub name: String,

    /// Quantity on hand, in the item's unit of measure
    pub quantity: f64,

    /// Price per unit
    pub unit_price: f64,

    /// Category label
    #[serde(default)]
    pub category: Option<String>,

    /// The supplier this item is sourced from
    #[serde(default)]
    pub supplier_id: Option<i64>,

    /// Unit of measure (e.g. "pcs", "kg", "box")
    #[serde(default)]
    pub uom: Option<String>,

    /// How many base units one `uom` converts to
    #[serde(default)]
    pub conversion_qty: Option<f64>,

    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,

    /// URL of the item image, when one has been uploaded
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Payload for creating an inventory item
#[derive(Debug, Clone, Serialize)]
pub struct NewInventoryItem {
    /// Stock-keeping unit
    pub sku: String,

    /// Display name
    pub name: String,

    /// Opening quantity
    pub quantity: f64,

    /// Price per unit
    pub unit_price: f64,

    /// Category label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// The supplier this item is sourced from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<i64>,

    /// Unit of measure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uom: Option<String>,

    /// How many base units one `uom` converts to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_qty: Option<f64>,

    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewInventoryItem {
    /// The same payload as a full-field patch, for updating an existing sku
    pub fn as_patch(&self) -> InventoryPatch {
        InventoryPatch {
            name: Some(self.name.clone()),
            quantity: Some(self.quantity),
            unit_price: Some(self.unit_price),
            category: self.category.clone(),
            supplier_id: self.supplier_id,
            uom: self.uom.clone(),
            conversion_qty: self.conversion_qty,
            description: self.description.clone(),
        }
    }
}

/// Partial update for an inventory item; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize)]
pub struct InventoryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uom: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_qty: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Server-side filters for listing inventory
#[derive(Debug, Clone, Default)]
pub struct InventoryQuery {
    /// Free-text search over name and sku
    pub search: Option<String>,

    /// Restrict to one category
    pub category: Option<String>,

    /// Only items at or below their reorder level
    pub low_stock: Option<bool>,
}

impl InventoryQuery {
    pub(crate) fn to_params(&self) -> HashMap<String, String> {
        let mut params = HashMap::new();
        if let Some(search) = &self.search {
            params.insert("search".to_string(), search.clone());
        }
        if let Some(category) = &self.category {
            params.insert("category".to_string(), category.clone());
        }
        if let Some(low_stock) = self.low_stock {
            params.insert("low_stock".to_string(), low_stock.to_string());
        }
        params
    }
}
