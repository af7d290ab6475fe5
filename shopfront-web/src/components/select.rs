#[cfg(target_arch = "wasm32")]
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct QuantitySelectProps {
    /// Upper bound of the offered range; options run `1..=max`.
    pub max: u32,
    pub value: u32,
    #[prop_or_default]
    pub on_change: Callback<u32>,
}

/// Quantity dropdown for one item. The offered range is how the
/// `[1, stock]` bound is enforced; the coordinator itself accepts any
/// value the dropdown emits.
#[function_component(QuantitySelect)]
pub fn quantity_select(props: &QuantitySelectProps) -> Html {
    let on_change = {
        let cb = props.on_change.clone();
        Callback::from(move |e: Event| {
            #[cfg(target_arch = "wasm32")]
            {
                use yew::TargetCast;
                if let Some(sel) = e.target_dyn_into::<HtmlSelectElement>() {
                    if let Ok(quantity) = sel.value().parse::<u32>() {
                        cb.emit(quantity);
                    }
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (&e, &cb);
            }
        })
    };
    html! {
        <select class="quantity-select" onchange={on_change}>
            { for (1..=props.max).map(|n| {
                html! {
                    <option value={n.to_string()} selected={n == props.value}>
                        { n.to_string() }
                    </option>
                }
            })}
        </select>
    }
}
