//! End-to-end coordinator flows against the declared-interaction mock.

use serde_json::json;
use shopfront_core::contract::{Interaction, MockTransport};
use shopfront_core::shop::{
    CATALOG_LOAD_FAILED_MESSAGE, PURCHASE_FAILED_MESSAGE, PurchaseOutcome,
};
use shopfront_core::transport::Method;
use shopfront_core::{ShopClient, ShopConfig, Storefront};

const ITEMS_PATH: &str = "/order-service/v1/items";
const PURCHASE_PATH: &str = "/order-service/v1/purchase";

fn two_item_catalog() -> serde_json::Value {
    json!([
        {"id": 1, "name": "Test Item 1", "description": "This is a test item", "stock": 5},
        {"id": 2, "name": "Test Item 2", "description": "This is another test item", "stock": 3},
    ])
}

fn storefront(mock: &MockTransport) -> Storefront<MockTransport> {
    Storefront::new(ShopClient::new(mock.clone(), ShopConfig::default()))
}

fn declare_items(mock: &MockTransport, body: serde_json::Value) {
    mock.declare(
        Interaction::new(Method::Get, ITEMS_PATH, 200, body)
            .with_description("Get items should return a success response")
            .with_provider_state("There are 2 items"),
    );
}

#[tokio::test]
async fn catalog_load_selects_one_of_everything() {
    let mock = MockTransport::new();
    declare_items(&mock, two_item_catalog());
    let mut shop = storefront(&mock);

    shop.load_catalog().await;

    let state = shop.state();
    let catalog_ids: Vec<u32> = state.items().iter().map(|item| item.id).collect();
    assert_eq!(catalog_ids, vec![1, 2]);
    assert_eq!(state.selections().len(), 2);
    for id in catalog_ids {
        assert_eq!(state.quantity_for(id), Some(1));
        assert!(state.purchase_error(id).is_none());
    }
    assert!(state.load_error().is_none());
}

#[tokio::test]
async fn successful_purchase_sends_selection_and_reloads_once() {
    let mock = MockTransport::new();
    declare_items(&mock, two_item_catalog());
    mock.declare(
        Interaction::new(Method::Post, PURCHASE_PATH, 200, serde_json::Value::Null)
            .with_description("Purchase should return a success response")
            .with_provider_state("There is an item with stock"),
    );
    let mut shop = storefront(&mock);
    shop.load_catalog().await;

    assert!(shop.set_quantity(1, 3));
    let outcome = shop.buy(1).await;

    assert_eq!(outcome, PurchaseOutcome::Completed);
    assert!(shop.state().purchase_error(1).is_none());

    let observed = mock.observed();
    assert_eq!(observed.len(), 3, "initial load, purchase, reload");
    assert_eq!(observed[1].method, Method::Post);
    assert_eq!(observed[1].path, PURCHASE_PATH);
    assert_eq!(
        observed[1].body,
        Some(json!({"itemId": 1, "quantity": 3}))
    );
    assert_eq!(observed[2].method, Method::Get);
    assert_eq!(observed[2].path, ITEMS_PATH);

    // The reload reset the selection back to 1.
    assert_eq!(shop.state().quantity_for(1), Some(1));
}

#[tokio::test]
async fn failed_purchase_marks_only_that_item_and_skips_reload() {
    let mock = MockTransport::new();
    declare_items(&mock, two_item_catalog());
    mock.declare(
        Interaction::new(Method::Post, PURCHASE_PATH, 500, serde_json::Value::Null)
            .with_description("Purchase should return an error")
            .with_provider_state("There is an error"),
    );
    let mut shop = storefront(&mock);
    shop.load_catalog().await;
    let catalog_before = shop.state().items().to_vec();

    let outcome = shop.buy(1).await;

    assert_eq!(outcome, PurchaseOutcome::Failed);
    assert_eq!(shop.state().purchase_error(1), Some(PURCHASE_FAILED_MESSAGE));
    assert!(shop.state().purchase_error(2).is_none());
    assert_eq!(shop.state().items(), catalog_before.as_slice());

    let observed = mock.observed();
    assert_eq!(observed.len(), 2, "no reload after a failed purchase");
    assert_eq!(observed[1].method, Method::Post);
}

#[tokio::test]
async fn retry_after_failure_clears_the_error() {
    let mock = MockTransport::new();
    declare_items(&mock, two_item_catalog());
    mock.declare(Interaction::new(
        Method::Post,
        PURCHASE_PATH,
        500,
        serde_json::Value::Null,
    ));
    let mut shop = storefront(&mock);
    shop.load_catalog().await;

    assert_eq!(shop.buy(1).await, PurchaseOutcome::Failed);
    assert!(shop.state().purchase_error(1).is_some());

    // The later declaration overrides the failing one.
    mock.declare(Interaction::new(
        Method::Post,
        PURCHASE_PATH,
        200,
        serde_json::Value::Null,
    ));
    assert_eq!(shop.buy(1).await, PurchaseOutcome::Completed);
    assert!(shop.state().purchase_error(1).is_none());
}

#[tokio::test]
async fn zero_stock_item_never_produces_a_request() {
    let mock = MockTransport::new();
    mock.declare(
        Interaction::new(
            Method::Get,
            ITEMS_PATH,
            200,
            json!([{
                "id": 1,
                "name": "Out of Stock Item",
                "description": "This item is out of stock",
                "stock": 0,
            }]),
        )
        .with_description("Get items should return an item with 0 stock")
        .with_provider_state("There is an item with 0 stock"),
    );
    let mut shop = storefront(&mock);
    shop.load_catalog().await;

    assert!(!shop.state().can_purchase(1));
    assert_eq!(shop.buy(1).await, PurchaseOutcome::Rejected);

    let observed = mock.observed();
    assert_eq!(observed.len(), 1, "only the initial catalog load");
    assert_eq!(observed[0].method, Method::Get);
}

#[tokio::test]
async fn load_failure_lands_in_the_catalog_level_slot() {
    let mock = MockTransport::new();
    mock.declare(Interaction::new(
        Method::Get,
        ITEMS_PATH,
        500,
        serde_json::Value::Null,
    ));
    let mut shop = storefront(&mock);

    shop.load_catalog().await;

    let state = shop.state();
    assert_eq!(state.load_error(), Some(CATALOG_LOAD_FAILED_MESSAGE));
    assert!(state.items().is_empty());
    assert!(state.selections().is_empty());

    // The coordinator stays usable: a retry against a recovered service
    // succeeds and clears the slot.
    mock.declare(Interaction::new(
        Method::Get,
        ITEMS_PATH,
        200,
        two_item_catalog(),
    ));
    shop.load_catalog().await;
    assert!(shop.state().load_error().is_none());
    assert_eq!(shop.state().items().len(), 2);
}

#[tokio::test]
async fn malformed_catalog_body_counts_as_load_failure() {
    let mock = MockTransport::new();
    mock.declare(Interaction::new(
        Method::Get,
        ITEMS_PATH,
        200,
        json!({"unexpected": "shape"}),
    ));
    let mut shop = storefront(&mock);

    shop.load_catalog().await;
    assert_eq!(shop.state().load_error(), Some(CATALOG_LOAD_FAILED_MESSAGE));
}

#[tokio::test]
async fn declared_interactions_persist_as_a_contract_record() {
    let mock = MockTransport::new();
    declare_items(&mock, two_item_catalog());
    mock.declare(
        Interaction::new(Method::Post, PURCHASE_PATH, 200, serde_json::Value::Null)
            .with_description("Purchase should return a success response")
            .with_provider_state("There is an item with stock"),
    );
    let mut shop = storefront(&mock);
    shop.load_catalog().await;
    shop.buy(1).await;

    let mut out = Vec::new();
    mock.pact("shop-frontend", "order-service")
        .write_to(&mut out)
        .expect("contract record");
    let doc: serde_json::Value = serde_json::from_slice(&out).expect("contract json");

    assert_eq!(doc["consumer"]["name"], "shop-frontend");
    assert_eq!(doc["provider"]["name"], "order-service");
    assert_eq!(doc["metadata"]["pactSpecification"]["version"], "2.0.0");
    let interactions = doc["interactions"].as_array().expect("interactions");
    assert_eq!(interactions.len(), 2);
    assert_eq!(interactions[0]["request"]["method"], "GET");
    assert_eq!(
        interactions[1]["providerStates"][0]["name"],
        "There is an item with stock"
    );
}
