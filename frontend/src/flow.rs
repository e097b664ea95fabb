//! Top-level flow for both pages: selector, resolver, renderer, gate. Every
//! failure ends here as a complete error view, never a half-written page.

use log::debug;

use crate::config::FunnelConfig;
use crate::content::freshness::{RequestTracker, Ticket};
use crate::content::key::ContentKey;
use crate::content::record::ContentRecord;
use crate::content::registry::Registry;
use crate::content::resolver::{resolve_static, BriefFetcher, DynamicResolver};
use crate::content::selector::key_from_choice;
use crate::error::{report, FunnelError};
use crate::gate::{cta_target, set_gate_state, CtaSlot};
use crate::render::{render, render_error, PageSlots};

/// Everything a page shows for one resolved (or failed) key.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub slots: PageSlots,
    pub cta: CtaSlot,
}

impl Outcome {
    fn settle(
        key: &ContentKey,
        resolved: Result<&ContentRecord, &FunnelError>,
        source: Option<&str>,
        config: &FunnelConfig,
    ) -> Self {
        let mut slots = PageSlots::default();
        let mut cta = CtaSlot::default();

        match resolved {
            Ok(record) => {
                render(record, &mut slots);
                set_gate_state(&mut cta, true, cta_target(record, config, key));
            }
            Err(err) => {
                report(key, err);
                render_error(key, err, source, &mut slots);
                set_gate_state(&mut cta, false, None);
            }
        }

        Outcome { slots, cta }
    }
}

/// Diagnostic form submission. `NoSelection` is returned untouched so the
/// page can prompt without mutating anything.
pub fn submit_choice(
    choice: Option<&str>,
    registry: &Registry,
    config: &FunnelConfig,
) -> Result<Outcome, FunnelError> {
    let key = key_from_choice(choice)?;
    let resolved = resolve_static(&key, registry);
    Ok(Outcome::settle(&key, resolved.as_deref(), None, config))
}

/// Paid brief load. `None` means a newer request has been made since
/// `ticket` was issued and this result must not be shown.
pub async fn load_brief<F: BriefFetcher>(
    resolver: &DynamicResolver<F>,
    tracker: &RequestTracker,
    ticket: Ticket,
    config: &FunnelConfig,
) -> Option<Outcome> {
    let resolved = resolver.resolve(ticket.key()).await;

    if !tracker.is_current(&ticket) {
        debug!("dropping stale result for {}", ticket.key());
        return None;
    }

    let source = resolver.location(ticket.key());
    Some(Outcome::settle(
        ticket.key(),
        resolved.as_deref(),
        source.as_deref(),
        config,
    ))
}
