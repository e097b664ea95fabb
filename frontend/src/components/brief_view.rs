use yew::prelude::*;

use crate::components::raw_html::RawHtml;
use crate::render::{BodySlot, PageSlots};

#[derive(Properties, PartialEq)]
pub struct BriefViewProps {
    pub slots: PageSlots,
    /// Mirror `slots.document_title` into the browser tab.
    #[prop_or_default]
    pub sync_document_title: bool,
}

#[function_component(BriefView)]
pub fn brief_view(props: &BriefViewProps) -> Html {
    let slots = &props.slots;

    {
        let title = slots.document_title.clone();
        let sync = props.sync_document_title;
        use_effect_with_deps(
            move |(title, sync)| {
                if *sync && !title.is_empty() {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        document.set_title(title);
                    }
                }
                || ()
            },
            (title, sync),
        );
    }

    let body = match &slots.body {
        BodySlot::Html(markup) => html! {
            <RawHtml html={AttrValue::from(markup.clone())} />
        },
        BodySlot::Sections(sections) => sections
            .iter()
            .enumerate()
            .map(|(i, section)| {
                html! {
                    <section key={i} class={section.class()}>
                        <h2>{section.heading.clone()}</h2>
                        <RawHtml html={AttrValue::from(section.html.clone())} />
                    </section>
                }
            })
            .collect::<Html>(),
    };

    html! {
        <article class="brief">
            <header class="brief-header">
                <p id="kicker" class="kicker">{slots.kicker.clone()}</p>
                <h1 id="pageTitle">{slots.title.clone()}</h1>
                <p id="pageSub" class="sub">{slots.subheading.clone()}</p>
                <p id="pageNote" class="note">{slots.note.clone()}</p>
            </header>
            <section id="summaryCard" class="card summary" hidden={!slots.summary_visible}>
                <RawHtml class={AttrValue::Static("summary-line")} html={AttrValue::from(slots.summary.clone())} />
                <RawHtml class={AttrValue::Static("objective-line")} html={AttrValue::from(slots.objective.clone())} />
            </section>
            <div id="content" class="content">
                {body}
            </div>
            <footer id="footerNote" class="footer-note">{slots.footer_note.clone()}</footer>
        </article>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::content::record::{Body, ContentRecord, Section};
    use crate::render::render;
    use gloo_timers::callback::Timeout;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn slots_for(record: &ContentRecord) -> PageSlots {
        let mut slots = PageSlots::default();
        render(record, &mut slots);
        slots
    }

    fn alpha() -> PageSlots {
        let mut record = ContentRecord::sections(
            "Alpha Brief",
            vec![
                Section::new("Alpha heading", "<p>alpha body</p>"),
                Section::new("Alpha second", "<p>alpha more</p>").with_divider(),
            ],
        );
        record.summary = Some("<em>alpha summary</em>".into());
        slots_for(&record)
    }

    fn beta() -> PageSlots {
        slots_for(&ContentRecord::new("Beta Brief", Body::Html("<p>beta only</p>".into())))
    }

    #[function_component(Swap)]
    fn swap() -> Html {
        let slots = use_state(alpha);
        {
            let slots = slots.clone();
            use_effect_with_deps(
                move |_| {
                    let timeout = Timeout::new(40, move || slots.set(beta()));
                    move || drop(timeout)
                },
                (),
            );
        }
        html! { <BriefView slots={(*slots).clone()} /> }
    }

    fn element(id: &str) -> web_sys::Element {
        document().get_element_by_id(id).unwrap()
    }

    fn document() -> web_sys::Document {
        web_sys::window().unwrap().document().unwrap()
    }

    #[wasm_bindgen_test]
    async fn rerender_leaves_no_nodes_of_the_previous_brief() {
        let document = document();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<Swap>::with_root(root).render();

        TimeoutFuture::new(10).await;
        let content = element("content");
        assert_eq!(content.child_element_count(), 2);
        assert!(content.text_content().unwrap().contains("alpha body"));
        assert!(!element("summaryCard").has_attribute("hidden"));

        TimeoutFuture::new(100).await;
        let content = element("content");
        let text = content.text_content().unwrap();
        assert_eq!(content.child_element_count(), 1);
        assert!(text.contains("beta only"));
        assert!(!text.to_lowercase().contains("alpha"));
        assert_eq!(element("pageTitle").text_content().unwrap(), "Beta Brief");
        assert!(element("summaryCard").has_attribute("hidden"));
    }
}
