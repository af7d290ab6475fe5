use crate::components::alert::Alert;
use crate::components::select::QuantitySelect;
use shopfront_core::Item;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ItemCardProps {
    pub item: Item,
    /// Current quantity selection for this item.
    pub quantity: u32,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    /// Emits `(item_id, quantity)` when the dropdown changes.
    #[prop_or_default]
    pub on_quantity_change: Callback<(u32, u32)>,
    /// Emits the item id when the buy button is pressed.
    #[prop_or_default]
    pub on_buy: Callback<u32>,
}

/// One catalog entry: details, quantity dropdown and buy button.
///
/// The dropdown is not rendered for zero-stock items and the buy button
/// is disabled, so no purchase can be started for them.
#[function_component(ItemCard)]
pub fn item_card(props: &ItemCardProps) -> Html {
    let item_id = props.item.id;
    let out_of_stock = props.item.stock == 0;

    let on_quantity = {
        let cb = props.on_quantity_change.clone();
        Callback::from(move |quantity: u32| cb.emit((item_id, quantity)))
    };
    let on_buy = {
        let cb = props.on_buy.clone();
        Callback::from(move |_: MouseEvent| cb.emit(item_id))
    };

    html! {
        <article class="item-card">
            <h2>{ props.item.name.clone() }</h2>
            <p>{ props.item.description.clone() }</p>
            <p class="stock-line">{ format!("Available Stock: {}", props.item.stock) }</p>
            <div class="purchase-controls">
                { if out_of_stock {
                    Html::default()
                } else {
                    html! {
                        <QuantitySelect
                            max={props.item.stock}
                            value={props.quantity}
                            on_change={on_quantity}
                        />
                    }
                }}
                <button class="buy-btn" disabled={out_of_stock} onclick={on_buy}>
                    { "Buy Now" }
                </button>
            </div>
            { props.error.as_ref().map_or_else(Html::default, |message| {
                html! { <Alert message={message.clone()} /> }
            })}
        </article>
    }
}
