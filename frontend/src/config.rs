use log::Level;

use crate::content::key::ContentKey;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Briefs are served from the same origin as the app.
pub fn get_base_url() -> &'static str {
    ""
}

/// Stripe payment links per outcome. Visitors pay before the brief link is
/// sent, nothing here is verified client side.
const PAYMENT_LINKS: [(&str, &str); 5] = [
    ("filtering-failure", "https://buy.stripe.com/REPLACE_FILTERING"),
    ("premature-disqualification", "https://buy.stripe.com/REPLACE_PREMATURE"),
    ("interview-drift", "https://buy.stripe.com/REPLACE_INTERVIEW"),
    ("conversion-breakdown", "https://buy.stripe.com/REPLACE_CONVERSION"),
    ("search-exhaustion", "https://buy.stripe.com/REPLACE_EXHAUSTION"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardSettings {
    pub disable_right_click: bool,
    pub block_shortcuts: bool,
    /// Set to false to allow printing briefs.
    pub block_print: bool,
    /// Set to false to allow view-source.
    pub block_view_source: bool,
}

impl Default for GuardSettings {
    fn default() -> Self {
        Self {
            disable_right_click: true,
            block_shortcuts: true,
            block_print: true,
            block_view_source: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunnelConfig {
    pub default_brief: ContentKey,
    pub query_param: &'static str,
    pub payment_links: Vec<(ContentKey, String)>,
    /// Secondary call-to-action on the diagnostic page.
    pub audit_link: String,
    pub guards: GuardSettings,
}

impl Default for FunnelConfig {
    fn default() -> Self {
        let payment_links = PAYMENT_LINKS
            .iter()
            .filter_map(|(raw, url)| ContentKey::normalize(raw).map(|k| (k, url.to_string())))
            .collect();

        Self {
            default_brief: ContentKey::normalize("filtering-failure").expect("valid default brief key"),
            query_param: "brief",
            payment_links,
            audit_link: "#".to_string(),
            guards: GuardSettings::default(),
        }
    }
}

impl FunnelConfig {
    pub fn payment_link(&self, key: &ContentKey) -> Option<&str> {
        self.payment_links
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, url)| url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::key::KNOWN_KEYS;
    use crate::content::resolver::brief_url;

    #[test]
    fn every_outcome_has_a_payment_link() {
        let config = FunnelConfig::default();
        for raw in KNOWN_KEYS {
            let key = ContentKey::normalize(raw).unwrap();
            assert!(config.payment_link(&key).unwrap().starts_with("https://"));
        }
        assert!(config.payment_link(&ContentKey::normalize("other").unwrap()).is_none());
    }

    #[test]
    fn briefs_are_fetched_from_the_page_origin() {
        let key = ContentKey::normalize("interview-drift").unwrap();
        assert_eq!(brief_url(get_base_url(), &key), "/briefs/interview-drift.json");
    }
}
