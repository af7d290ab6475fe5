use serde::{Deserialize, Serialize};

/// One purchasable product as returned by the items endpoint.
///
/// Items are replaced wholesale whenever a catalog load completes; the
/// coordinator never mutates an item field-by-field. Stock changes are
/// observed only through a fresh load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub stock: u32,
}

/// Body of the purchase request, wire-encoded as `{"itemId": …, "quantity": …}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub item_id: u32,
    pub quantity: u32,
}
