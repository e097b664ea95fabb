use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use web_sys::{HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::components::brief_view::BriefView;
use crate::components::cta::GatedCta;
use crate::config::FunnelConfig;
use crate::content::registry::Registry;
use crate::flow::{submit_choice, Outcome};

const NO_SELECTION_PROMPT: &str = "Please select the option that best matches what happens next.";

pub const OPTIONS: [(&str, &str); 5] = [
    ("filtering-failure", "I apply and hear nothing back at all"),
    ("premature-disqualification", "I get rejected quickly, often within days"),
    ("interview-drift", "I reach interviews, but the process stalls"),
    ("conversion-breakdown", "Recruiters are interested, but no offer comes"),
    ("search-exhaustion", "I have mostly stopped applying"),
];

fn scroll_to_result() {
    // Wait for the revealed section to be laid out.
    Timeout::new(0, || {
        if let Some(section) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("result"))
        {
            let mut options = ScrollIntoViewOptions::new();
            options.behavior(ScrollBehavior::Smooth);
            options.block(ScrollLogicalPosition::Start);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
    })
    .forget();
}

fn prompt_for_selection() {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(NO_SELECTION_PROMPT);
    }
}

#[function_component(Diagnostic)]
pub fn diagnostic() -> Html {
    let registry = use_memo(|_| Registry::free_results(), ());
    let config = use_memo(|_| FunnelConfig::default(), ());
    let selected = use_state(|| None::<String>);
    let outcome = use_state(|| None::<Outcome>);

    let onchange = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if input.checked() {
                selected.set(Some(input.value()));
            }
        })
    };

    let onsubmit = {
        let selected = selected.clone();
        let outcome = outcome.clone();
        let registry = Rc::clone(&registry);
        let config = Rc::clone(&config);
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match submit_choice(selected.as_deref(), &registry, &config) {
                Ok(next) => {
                    info!("showing result {}", next.slots.title);
                    outcome.set(Some(next));
                    scroll_to_result();
                }
                Err(_) => prompt_for_selection(),
            }
        })
    };

    let cta = (*outcome)
        .as_ref()
        .map(|o| o.cta.clone())
        .unwrap_or_default();

    html! {
        <div class="diagnostic-page">
            <section class="diagnostic-hero">
                <h1>{"Why isn't your job search converting?"}</h1>
                <p>{"Pick the option that best describes what usually happens after you apply."}</p>
            </section>
            <form id="diagnosticForm" class="diagnostic-form" {onsubmit}>
                {
                    OPTIONS.iter().map(|(value, label)| {
                        html! {
                            <label key={*value} class="option">
                                <input
                                    type="radio"
                                    name="result"
                                    value={*value}
                                    checked={selected.as_deref() == Some(*value)}
                                    onchange={onchange.clone()}
                                />
                                <span>{*label}</span>
                            </label>
                        }
                    }).collect::<Html>()
                }
                <button type="submit" class="submit-button">{"Show my result"}</button>
            </form>
            <section id="result" class="result" hidden={(*outcome).is_none()}>
                {
                    match (*outcome).as_ref() {
                        Some(o) => html! { <BriefView slots={o.slots.clone()} /> },
                        None => html! {},
                    }
                }
                <div class="next-move">
                    <GatedCta cta={cta} label={"Get the full decision brief"} />
                </div>
                <div class="audit">
                    <a class="secondary-cta" href={config.audit_link.clone()}>{"Prefer a personal audit?"}</a>
                </div>
            </section>
            <style>
                {r#"
                .diagnostic-page {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                }
                .diagnostic-hero h1 {
                    font-size: 2.4rem;
                    margin-bottom: 1rem;
                }
                .diagnostic-form .option {
                    display: flex;
                    gap: 0.75rem;
                    align-items: center;
                    padding: 0.9rem 1rem;
                    border: 1px solid rgba(30, 144, 255, 0.15);
                    border-radius: 10px;
                    margin-bottom: 0.75rem;
                    cursor: pointer;
                }
                .submit-button {
                    margin-top: 1rem;
                    padding: 0.8rem 1.6rem;
                    border-radius: 8px;
                    border: none;
                    background: #1E90FF;
                    color: #fff;
                    cursor: pointer;
                }
                .result {
                    margin-top: 3rem;
                }
                .primary-cta {
                    display: inline-block;
                    padding: 0.9rem 1.8rem;
                    border-radius: 8px;
                    background: #1E90FF;
                    color: #fff;
                    text-decoration: none;
                }
                .primary-cta.is-disabled {
                    opacity: 0.4;
                    pointer-events: none;
                    cursor: not-allowed;
                }
                .audit {
                    margin-top: 1rem;
                }
                "#}
            </style>
        </div>
    }
}
