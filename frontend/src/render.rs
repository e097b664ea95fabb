use log::{info, warn};

use crate::content::key::ContentKey;
use crate::content::record::{Body, ContentRecord};
use crate::error::FunnelError;

pub const DEFAULT_KICKER: &str = "Decision Brief";
pub const EMPTY_BODY: &str = "<p>No content found.</p>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSection {
    pub heading: String,
    pub html: String,
    pub divider: bool,
}

impl RenderedSection {
    pub fn class(&self) -> &'static str {
        if self.divider {
            "section divider"
        } else {
            "section"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodySlot {
    Html(String),
    Sections(Vec<RenderedSection>),
}

impl Default for BodySlot {
    fn default() -> Self {
        BodySlot::Html(String::new())
    }
}

impl BodySlot {
    /// Every piece of markup currently in the body container, in order.
    pub fn markup(&self) -> Vec<&str> {
        match self {
            BodySlot::Html(html) => vec![html.as_str()],
            BodySlot::Sections(sections) => sections
                .iter()
                .flat_map(|s| [s.heading.as_str(), s.html.as_str()])
                .collect(),
        }
    }
}

/// The writable slots of a page skeleton. The page component owns one of
/// these and draws it; the renderer only ever overwrites its fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSlots {
    pub document_title: String,
    pub kicker: String,
    pub title: String,
    pub subheading: String,
    pub note: String,
    pub summary_visible: bool,
    pub summary: String,
    pub objective: String,
    pub body: BodySlot,
    pub footer_note: String,
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Projects `record` onto `slots`. Every slot is written, so nothing from a
/// previous render survives.
pub fn render(record: &ContentRecord, slots: &mut PageSlots) {
    info!("rendering {}", record.title);
    slots.document_title = format!("{} – {}", record.title, DEFAULT_KICKER);
    slots.kicker = record
        .kicker
        .clone()
        .unwrap_or_else(|| DEFAULT_KICKER.to_string());
    slots.title = record.title.clone();
    slots.subheading = text(&record.subheading);
    slots.note = text(&record.note);

    slots.summary = text(&record.summary);
    slots.objective = text(&record.objective);
    slots.summary_visible = !slots.summary.is_empty() || !slots.objective.is_empty();

    slots.body = match &record.body {
        Body::Empty => BodySlot::Html(EMPTY_BODY.to_string()),
        Body::Html(html) => BodySlot::Html(html.clone()),
        Body::Sections(sections) => BodySlot::Sections(
            sections
                .iter()
                .map(|s| RenderedSection {
                    heading: s.heading.clone(),
                    html: s.html.clone(),
                    divider: s.divider,
                })
                .collect(),
        ),
    };

    slots.footer_note = text(&record.footer_note);
}

/// Placeholder shown while a record is being fetched.
pub fn render_loading(key: &ContentKey, slots: &mut PageSlots) {
    *slots = PageSlots {
        document_title: DEFAULT_KICKER.to_string(),
        kicker: DEFAULT_KICKER.to_string(),
        title: "Loading…".to_string(),
        note: format!("Requested brief: {}", key),
        ..PageSlots::default()
    };
}

/// Replaces the whole view with the error card for `key`. `source` names the
/// file the content was expected in; pages backed by a compiled-in registry
/// pass `None`.
pub fn render_error(key: &ContentKey, err: &FunnelError, source: Option<&str>, slots: &mut PageSlots) {
    warn!("rendering error view for {}: {}", key, err);

    let hint = match source {
        Some(path) => format!(
            "Check that <code>{}</code> exists and contains a brief with a title.",
            escape_html(path)
        ),
        None => "This link or selection does not match any of the available results.".to_string(),
    };

    *slots = PageSlots {
        document_title: format!("Link error – {}", DEFAULT_KICKER),
        kicker: DEFAULT_KICKER.to_string(),
        title: "Link error".to_string(),
        subheading: "This brief could not be loaded.".to_string(),
        note: format!("Requested brief: {}", key),
        body: BodySlot::Html(format!(
            r#"<div class="card">
  <p><strong>Something went wrong.</strong></p>
  <p>{hint}</p>
  <p class="diagnostic">{diagnostic}</p>
</div>"#,
            hint = hint,
            diagnostic = escape_html(&err.diagnostic()),
        )),
        ..PageSlots::default()
    };
}

/// For text that did not come from a content author.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::record::Section;
    use crate::content::registry::Registry;
    use crate::content::resolver::resolve_static;

    fn key(raw: &str) -> ContentKey {
        ContentKey::normalize(raw).unwrap()
    }

    fn is_blank(slots: &PageSlots) -> bool {
        slots.title.is_empty() && slots.body == BodySlot::default()
    }

    fn rich_record() -> ContentRecord {
        let mut record = ContentRecord::sections(
            "Alpha Brief",
            vec![
                Section::new("Alpha heading", "<p>alpha body</p>"),
                Section::new("Alpha second", "<p>alpha more</p>").with_divider(),
            ],
        );
        record.kicker = Some("Private".into());
        record.subheading = Some("alpha sub".into());
        record.note = Some("alpha note".into());
        record.summary = Some("<em>alpha summary</em>".into());
        record.footer_note = Some("alpha footer".into());
        record
    }

    #[test]
    fn filtering_failure_fixture() {
        let registry = Registry::free_results();
        let record = resolve_static(&key("filtering-failure"), &registry).unwrap();
        let mut slots = PageSlots::default();
        render(&record, &mut slots);

        assert_eq!(slots.title, "Filtering Failure");
        match &slots.body {
            BodySlot::Sections(sections) => assert_eq!(sections[0].heading, "What this means"),
            other => panic!("expected sections, got {:?}", other),
        }
    }

    #[test]
    fn second_render_leaves_nothing_of_the_first() {
        let mut slots = PageSlots::default();
        render(&rich_record(), &mut slots);
        assert!(slots.summary_visible);
        assert_eq!(slots.kicker, "Private");

        let other = ContentRecord::new("Beta Brief", Body::Html("<p>beta only</p>".into()));
        render(&other, &mut slots);

        for markup in slots.body.markup() {
            assert!(!markup.contains("alpha"), "leaked: {}", markup);
        }
        assert_eq!(slots.body, BodySlot::Html("<p>beta only</p>".into()));
        assert_eq!(slots.title, "Beta Brief");
        assert_eq!(slots.kicker, DEFAULT_KICKER);
        assert!(slots.subheading.is_empty());
        assert!(slots.note.is_empty());
        assert!(slots.summary.is_empty());
        assert!(slots.footer_note.is_empty());
        assert!(!slots.summary_visible);
    }

    #[test]
    fn summary_card_follows_objective_alone() {
        let mut record = ContentRecord::new("Objective Only", Body::Empty);
        record.objective = Some("Get one reply".into());
        let mut slots = PageSlots::default();
        render(&record, &mut slots);

        assert!(slots.summary_visible);
        assert!(slots.summary.is_empty());
        assert_eq!(slots.body, BodySlot::Html(EMPTY_BODY.into()));
    }

    #[test]
    fn divider_only_changes_class() {
        let mut slots = PageSlots::default();
        render(&rich_record(), &mut slots);
        match &slots.body {
            BodySlot::Sections(sections) => {
                assert_eq!(sections[0].class(), "section");
                assert_eq!(sections[1].class(), "section divider");
                assert_eq!(sections[1].heading, "Alpha second");
            }
            other => panic!("expected sections, got {:?}", other),
        }
    }

    #[test]
    fn render_does_not_touch_record() {
        let record = rich_record();
        let before = record.clone();
        let mut slots = PageSlots::default();
        render(&record, &mut slots);
        render(&record, &mut slots);
        assert_eq!(record, before);
        assert_eq!(slots.document_title, "Alpha Brief – Decision Brief");
    }

    #[test]
    fn unknown_key_produces_error_view() {
        let registry = Registry::free_results();
        let k = key("does-not-exist");
        let err = resolve_static(&k, &registry).unwrap_err();

        let mut slots = PageSlots::default();
        render(&rich_record(), &mut slots);
        render_error(&k, &err, Some("/briefs/does-not-exist.json"), &mut slots);

        assert_eq!(slots.title, "Link error");
        assert_eq!(slots.note, "Requested brief: does-not-exist");
        assert!(!slots.summary_visible);
        assert!(!is_blank(&slots));
        let body = slots.body.markup().concat();
        assert!(body.contains("<code>/briefs/does-not-exist.json</code>"));
        assert!(!body.contains("alpha"));
    }

    #[test]
    fn compiled_in_content_error_names_no_file() {
        let registry = Registry::free_results();
        let k = key("tampered-value");
        let err = resolve_static(&k, &registry).unwrap_err();

        let mut slots = PageSlots::default();
        render_error(&k, &err, None, &mut slots);

        let body = slots.body.markup().concat();
        assert_eq!(slots.title, "Link error");
        assert!(!body.contains("/briefs/"), "{}", body);
        assert!(!body.contains(".json"), "{}", body);
        assert!(!body.contains("<code>"), "{}", body);
    }

    #[test]
    fn diagnostic_is_escaped() {
        let k = key("x");
        let err = FunnelError::not_found(&k, "<script>bad</script>");
        let mut slots = PageSlots::default();
        render_error(&k, &err, Some("/briefs/x.json"), &mut slots);
        let body = slots.body.markup().concat();
        assert!(body.contains("&lt;script&gt;"));
        assert!(!body.contains("<script>"));
    }

    #[test]
    fn loading_clears_previous_record() {
        let mut slots = PageSlots::default();
        render(&rich_record(), &mut slots);
        render_loading(&key("interview-drift"), &mut slots);

        assert_eq!(slots.title, "Loading…");
        assert!(slots.body.markup().concat().is_empty());
        assert!(!slots.summary_visible);
    }
}
