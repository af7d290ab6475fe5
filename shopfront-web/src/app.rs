//! Application shell: owns the coordinator state and drives the
//! network flows around it.

use crate::components::store_view::StoreView;
use shopfront_core::ShopState;
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::dom;
#[cfg(target_arch = "wasm32")]
use crate::net::FetchTransport;
#[cfg(target_arch = "wasm32")]
use shopfront_core::{ShopClient, ShopConfig};

#[cfg(target_arch = "wasm32")]
fn shop_client() -> ShopClient<FetchTransport> {
    ShopClient::new(FetchTransport, ShopConfig::default())
}

/// Fetch the catalog and fold the outcome into the shared state handle.
///
/// The handle is re-read when the response lands: another action may
/// have updated state while the request was in flight, and a snapshot
/// captured at call time would silently overwrite it.
#[cfg(target_arch = "wasm32")]
async fn reload_catalog(
    client: &ShopClient<FetchTransport>,
    shop: &UseStateHandle<ShopState>,
) {
    match client.fetch_items().await {
        Ok(items) => {
            let mut next = (**shop).clone();
            next.apply_catalog(items);
            shop.set(next);
        }
        Err(e) => {
            dom::console_error(&format!("Failed to load items: {e}"));
            let mut next = (**shop).clone();
            next.record_load_failure();
            shop.set(next);
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let shop = use_state(ShopState::new);

    // Initial catalog load at mount.
    {
        let shop = shop.clone();
        use_effect_with((), move |_| {
            #[cfg(target_arch = "wasm32")]
            wasm_bindgen_futures::spawn_local(async move {
                reload_catalog(&shop_client(), &shop).await;
            });
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = &shop;
            }
            || ()
        });
    }

    let on_quantity_change = {
        let shop = shop.clone();
        Callback::from(move |(item_id, quantity): (u32, u32)| {
            let mut next = (*shop).clone();
            if next.set_quantity(item_id, quantity) {
                shop.set(next);
            }
        })
    };

    let on_buy = {
        let shop = shop.clone();
        Callback::from(move |item_id: u32| {
            let mut next = (*shop).clone();
            // Clearing the old error before the request gives immediate
            // feedback that a new attempt started.
            let Some(order) = next.begin_purchase(item_id) else {
                return;
            };
            shop.set(next);
            #[cfg(target_arch = "wasm32")]
            {
                let shop = shop.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let client = shop_client();
                    match client.purchase(&order).await {
                        Ok(()) => reload_catalog(&client, &shop).await,
                        Err(e) => {
                            dom::console_error(&format!(
                                "Failed to purchase item {item_id}: {e}"
                            ));
                            let mut next = (*shop).clone();
                            next.record_purchase_failure(item_id);
                            shop.set(next);
                        }
                    }
                });
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = order;
            }
        })
    };

    html! {
        <main id="main" role="main">
            <StoreView
                shop={(*shop).clone()}
                on_quantity_change={on_quantity_change}
                on_buy={on_buy}
            />
        </main>
    }
}
