//! Catalog and purchase coordination.
//!
//! `ShopState` holds everything the storefront renders: the catalog, the
//! per-item quantity selections, the per-item purchase errors and the
//! catalog-level load error. All transitions are synchronous; the async
//! halves (`ShopClient`, `Storefront`) re-enter through them so that a
//! response resolving late always works against current state rather
//! than a snapshot captured when the request was issued.

use crate::config::ShopConfig;
use crate::model::{Item, PurchaseOrder};
use crate::transport::{HttpRequest, Transport, TransportError};
use std::collections::HashMap;
use thiserror::Error;

/// Fixed message recorded against an item after a failed purchase.
pub const PURCHASE_FAILED_MESSAGE: &str = "Unable to complete purchase";

/// Fixed message for a failed catalog load. Load failures are never
/// blamed on an item: the catalog as it stood before the attempt may be
/// empty or stale, so the message lives in a catalog-level slot.
pub const CATALOG_LOAD_FAILED_MESSAGE: &str = "Unable to load items";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// State owned by the coordinator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopState {
    items: Vec<Item>,
    selections: HashMap<u32, u32>,
    purchase_errors: HashMap<u32, String>,
    load_error: Option<String>,
}

impl ShopState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn item(&self, item_id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == item_id)
    }

    #[must_use]
    pub fn selections(&self) -> &HashMap<u32, u32> {
        &self.selections
    }

    #[must_use]
    pub fn quantity_for(&self, item_id: u32) -> Option<u32> {
        self.selections.get(&item_id).copied()
    }

    #[must_use]
    pub fn purchase_error(&self, item_id: u32) -> Option<&str> {
        self.purchase_errors.get(&item_id).map(String::as_str)
    }

    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Whether the buy action is offered for this item at all.
    #[must_use]
    pub fn can_purchase(&self, item_id: u32) -> bool {
        self.item(item_id).is_some_and(|item| item.stock > 0)
    }

    /// Replace the catalog with the result of a completed load.
    ///
    /// Selections are reset to 1 for every item in the new catalog,
    /// discarding prior choices; the catalog-level error is cleared.
    /// Purchase errors are left alone, they belong to individual buy
    /// attempts rather than to the catalog.
    pub fn apply_catalog(&mut self, items: Vec<Item>) {
        self.selections = items.iter().map(|item| (item.id, 1)).collect();
        self.items = items;
        self.load_error = None;
    }

    /// Record a failed catalog load. The catalog and selections keep
    /// their pre-attempt contents.
    pub fn record_load_failure(&mut self) {
        self.load_error = Some(String::from(CATALOG_LOAD_FAILED_MESSAGE));
    }

    /// Overwrite the quantity selection for one item.
    ///
    /// Returns false without touching anything when the item is not in
    /// the catalog. Range enforcement (`1..=stock`) is left to the
    /// presentation layer, which only offers valid values.
    pub fn set_quantity(&mut self, item_id: u32, quantity: u32) -> bool {
        if self.item(item_id).is_none() {
            return false;
        }
        self.selections.insert(item_id, quantity);
        true
    }

    /// Start a purchase attempt for one item.
    ///
    /// Clears that item's previous purchase error and returns the order
    /// to submit, built from the current selection. Returns `None` for
    /// unknown or zero-stock items; no request may be issued for those.
    pub fn begin_purchase(&mut self, item_id: u32) -> Option<PurchaseOrder> {
        if !self.can_purchase(item_id) {
            return None;
        }
        self.purchase_errors.remove(&item_id);
        let quantity = self.quantity_for(item_id)?;
        Some(PurchaseOrder { item_id, quantity })
    }

    /// Record a failed purchase against exactly one item.
    pub fn record_purchase_failure(&mut self, item_id: u32) {
        self.purchase_errors
            .insert(item_id, String::from(PURCHASE_FAILED_MESSAGE));
    }
}

/// Typed access to the two order-service endpoints over an abstract
/// transport.
#[derive(Debug, Clone)]
pub struct ShopClient<T> {
    transport: T,
    config: ShopConfig,
}

impl<T: Transport> ShopClient<T> {
    pub fn new(transport: T, config: ShopConfig) -> Self {
        Self { transport, config }
    }

    /// GET the item list. Any non-2xx status or transport failure is a
    /// catalog-load failure; the causes are not distinguished.
    pub async fn fetch_items(&self) -> Result<Vec<Item>, ApiError> {
        let request = HttpRequest::get(self.config.items_path());
        let response = self.transport.send(request).await?;
        if !response.is_ok() {
            return Err(ApiError::Status(response.status));
        }
        Ok(serde_json::from_value(response.body)?)
    }

    /// POST a purchase. The response body is not consumed; only the
    /// status decides success.
    pub async fn purchase(&self, order: &PurchaseOrder) -> Result<(), ApiError> {
        let body = serde_json::to_value(order)?;
        let request = HttpRequest::post(self.config.purchase_path(), body);
        let response = self.transport.send(request).await?;
        if response.is_ok() {
            Ok(())
        } else {
            Err(ApiError::Status(response.status))
        }
    }
}

/// Result of driving one buy action to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// Precondition failed (unknown item or zero stock); nothing was sent.
    Rejected,
    /// The purchase succeeded and the follow-up catalog load ran.
    Completed,
    /// The purchase failed; the item now carries an error and no reload
    /// was issued.
    Failed,
}

/// Client plus state, sequenced the way the widget sequences them: one
/// request in flight per logical step, reload after every successful
/// purchase. Overlapping reloads are not deduplicated; the last response
/// to be applied wins.
#[derive(Debug)]
pub struct Storefront<T> {
    client: ShopClient<T>,
    state: ShopState,
}

impl<T: Transport> Storefront<T> {
    pub fn new(client: ShopClient<T>) -> Self {
        Self {
            client,
            state: ShopState::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &ShopState {
        &self.state
    }

    /// Fetch the catalog and fold the outcome into state. Both halves of
    /// the error taxonomy land in the catalog-level slot.
    pub async fn load_catalog(&mut self) {
        match self.client.fetch_items().await {
            Ok(items) => self.state.apply_catalog(items),
            Err(e) => {
                log::error!("catalog load failed: {e}");
                self.state.record_load_failure();
            }
        }
    }

    pub fn set_quantity(&mut self, item_id: u32, quantity: u32) -> bool {
        self.state.set_quantity(item_id, quantity)
    }

    /// Submit a purchase for one item and resynchronize on success.
    pub async fn buy(&mut self, item_id: u32) -> PurchaseOutcome {
        let Some(order) = self.state.begin_purchase(item_id) else {
            return PurchaseOutcome::Rejected;
        };
        match self.client.purchase(&order).await {
            Ok(()) => {
                // Stock is never decremented locally; the reload is the
                // source of truth after a successful purchase.
                self.load_catalog().await;
                PurchaseOutcome::Completed
            }
            Err(e) => {
                log::error!("purchase failed for item {item_id}: {e}");
                self.state.record_purchase_failure(item_id);
                PurchaseOutcome::Failed
            }
        }
    }
}
