use crate::components::alert::Alert;
use crate::components::item_card::ItemCard;
use shopfront_core::ShopState;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StoreViewProps {
    pub shop: ShopState,
    #[prop_or_default]
    pub on_quantity_change: Callback<(u32, u32)>,
    #[prop_or_default]
    pub on_buy: Callback<u32>,
}

/// Presentational half of the storefront: renders whatever the
/// coordinator state says, with no state of its own.
#[function_component(StoreView)]
pub fn store_view(props: &StoreViewProps) -> Html {
    let shop = &props.shop;
    html! {
        <section class="storefront">
            <h1>{ "Available Items" }</h1>
            { shop.load_error().map_or_else(Html::default, |message| {
                html! { <Alert message={message.to_string()} class={classes!("load-error")} /> }
            })}
            <ul class="item-list">
                { for shop.items().iter().map(|item| {
                    // A selection exists for every catalog item after a
                    // completed load; 1 is the loader's reset value.
                    let quantity = shop.quantity_for(item.id).unwrap_or(1);
                    let error = shop
                        .purchase_error(item.id)
                        .map(|message| AttrValue::from(message.to_string()));
                    html! {
                        <li key={item.id}>
                            <ItemCard
                                item={item.clone()}
                                quantity={quantity}
                                error={error}
                                on_quantity_change={props.on_quantity_change.clone()}
                                on_buy={props.on_buy.clone()}
                            />
                        </li>
                    }
                })}
            </ul>
        </section>
    }
}
