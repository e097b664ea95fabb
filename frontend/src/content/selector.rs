use crate::content::key::ContentKey;
use crate::error::FunnelError;

/// Reads `param` out of a query string such as `?brief=interview-drift`,
/// parsed the way `URLSearchParams` parses it: `+` is a space, invalid
/// percent-encoding decodes to U+FFFD. The first occurrence wins.
pub fn query_param(search: &str, param: &str) -> Option<String> {
    url::form_urlencoded::parse(search.trim_start_matches('?').as_bytes())
        .find(|(name, _)| name == param)
        .map(|(_, value)| value.into_owned())
}

/// Key for the paid brief page. A missing parameter, or one that is empty
/// once normalized, falls back to `default`.
pub fn key_from_query(search: &str, param: &str, default: &ContentKey) -> ContentKey {
    query_param(search, param)
        .and_then(|raw| ContentKey::normalize(&raw))
        .unwrap_or_else(|| default.clone())
}

/// Key for the diagnostic form: the value of the checked radio, if any.
pub fn key_from_choice(choice: Option<&str>) -> Result<ContentKey, FunnelError> {
    choice
        .and_then(ContentKey::normalize)
        .ok_or(FunnelError::NoSelection)
}

/// `window.location.search`, or an empty string outside a browser.
pub fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}
