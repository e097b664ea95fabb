use crate::config::FunnelConfig;
use crate::content::key::ContentKey;
use crate::content::record::ContentRecord;

/// Target written into a disabled call-to-action, and into an enabled one
/// that has no payment link configured.
pub const INERT_HREF: &str = "#";
pub const DISABLED_CLASS: &str = "is-disabled";

/// Visual and semantic state of the "next move" call-to-action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CtaSlot {
    pub href: String,
    pub disabled_class: bool,
    pub aria_disabled: bool,
}

impl Default for CtaSlot {
    fn default() -> Self {
        Self {
            href: INERT_HREF.to_string(),
            disabled_class: true,
            aria_disabled: true,
        }
    }
}

impl CtaSlot {
    pub fn is_enabled(&self) -> bool {
        !self.disabled_class && !self.aria_disabled
    }

    pub fn aria_value(&self) -> &'static str {
        if self.aria_disabled {
            "true"
        } else {
            "false"
        }
    }

    pub fn classes(&self, base: &str) -> String {
        if self.disabled_class {
            format!("{} {}", base, DISABLED_CLASS)
        } else {
            base.to_string()
        }
    }
}

pub fn set_gate_state(cta: &mut CtaSlot, enabled: bool, target: Option<&str>) {
    if enabled {
        cta.href = target
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(INERT_HREF)
            .to_string();
        cta.disabled_class = false;
        cta.aria_disabled = false;
    } else {
        cta.href = INERT_HREF.to_string();
        cta.disabled_class = true;
        cta.aria_disabled = true;
    }
}

/// Where the call-to-action should point once `record` is on screen: the
/// record's own link first, then the payment link configured for `key`.
pub fn cta_target<'a>(
    record: &'a ContentRecord,
    config: &'a FunnelConfig,
    key: &ContentKey,
) -> Option<&'a str> {
    record.cta.as_deref().or_else(|| config.payment_link(key))
}
