use std::rc::Rc;

use log::info;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::brief_view::BriefView;
use crate::components::cta::GatedCta;
use crate::config::{self, FunnelConfig};
use crate::content::freshness::RequestTracker;
use crate::content::resolver::{DynamicResolver, HttpBriefFetcher};
use crate::content::selector::{current_search, key_from_query};
use crate::flow::{load_brief, Outcome};
use crate::gate::CtaSlot;
use crate::guards::use_page_guards;
use crate::render::{render_loading, PageSlots};

#[function_component(PaidBrief)]
pub fn paid_brief() -> Html {
    let config = use_memo(|_| FunnelConfig::default(), ());
    let resolver = use_memo(
        |_| DynamicResolver::new(HttpBriefFetcher::new(config::get_base_url())),
        (),
    );
    let tracker = use_memo(|_| RequestTracker::new(), ());
    let outcome = use_state(|| Outcome {
        slots: PageSlots::default(),
        cta: CtaSlot::default(),
    });

    use_page_guards(config.guards);

    let search = use_location()
        .map(|l| l.query_str().to_string())
        .unwrap_or_else(current_search);

    {
        let outcome = outcome.clone();
        let config = Rc::clone(&config);
        let resolver = Rc::clone(&resolver);
        let tracker = Rc::clone(&tracker);
        use_effect_with_deps(
            move |search| {
                let key = key_from_query(search, config.query_param, &config.default_brief);
                info!("paid brief requested: {}", key);

                let mut loading = PageSlots::default();
                render_loading(&key, &mut loading);
                outcome.set(Outcome {
                    slots: loading,
                    cta: CtaSlot::default(),
                });

                let ticket = tracker.begin(&key);
                spawn_local(async move {
                    if let Some(next) = load_brief(&*resolver, &*tracker, ticket, &*config).await {
                        outcome.set(next);
                    }
                });
                || ()
            },
            search,
        );
    }

    html! {
        <div class="paid-page">
            <BriefView slots={outcome.slots.clone()} sync_document_title={true} />
            <div class="brief-cta">
                <GatedCta cta={outcome.cta.clone()} label={"Book your follow-up"} />
            </div>
            <style>
                {r#"
                .paid-page {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                    user-select: none;
                }
                .paid-page .kicker {
                    text-transform: uppercase;
                    letter-spacing: 0.12em;
                    color: #7EB2FF;
                    font-size: 0.8rem;
                }
                .paid-page .card {
                    border: 1px solid rgba(30, 144, 255, 0.15);
                    border-radius: 12px;
                    padding: 1.25rem 1.5rem;
                    margin: 1.5rem 0;
                }
                .paid-page .section {
                    margin: 2rem 0;
                }
                .paid-page .section.divider {
                    border-top: 1px solid rgba(255, 255, 255, 0.12);
                    padding-top: 2rem;
                }
                .paid-page .footer-note {
                    color: #666;
                    font-size: 0.9rem;
                }
                .brief-cta .primary-cta.is-disabled {
                    opacity: 0.4;
                    pointer-events: none;
                }
                @media print {
                    .paid-page {
                        display: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}
