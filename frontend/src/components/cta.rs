use web_sys::MouseEvent;
use yew::prelude::*;

use crate::gate::CtaSlot;

#[derive(Properties, PartialEq)]
pub struct GatedCtaProps {
    pub cta: CtaSlot,
    pub label: AttrValue,
    #[prop_or(AttrValue::Static("primary-cta"))]
    pub class: AttrValue,
}

/// The "next move" link. Stays in the page while disabled; clicks are
/// swallowed until the gate opens.
#[function_component(GatedCta)]
pub fn gated_cta(props: &GatedCtaProps) -> Html {
    let enabled = props.cta.is_enabled();
    let onclick = Callback::from(move |e: MouseEvent| {
        if !enabled {
            e.prevent_default();
        }
    });

    html! {
        <a
            id="nextMoveCta"
            class={props.cta.classes(&props.class)}
            href={props.cta.href.clone()}
            aria-disabled={props.cta.aria_value()}
            {onclick}
        >
            {props.label.clone()}
        </a>
    }
}
