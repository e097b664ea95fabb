use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RawHtmlProps {
    pub html: AttrValue,
    #[prop_or_default]
    pub class: Option<AttrValue>,
}

/// Mounts author-supplied markup as-is. Only content from the registry goes
/// through here, never visitor input.
#[function_component(RawHtml)]
pub fn raw_html(props: &RawHtmlProps) -> Html {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.create_element("div").ok());

    match element {
        Some(element) => {
            if let Some(class) = &props.class {
                element.set_class_name(class);
            }
            element.set_inner_html(&props.html);
            Html::VRef(element.into())
        }
        None => html! {},
    }
}
