use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AlertProps {
    pub message: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Error alert shown for a failed purchase or catalog load.
#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    let classes = classes!("alert", "alert-error", props.class.clone());
    html! {
        <div class={classes} role="alert">
            <p>{ props.message.clone() }</p>
        </div>
    }
}
