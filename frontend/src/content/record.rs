use serde::Deserialize;

use crate::content::key::ContentKey;
use crate::error::FunnelError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Section {
    pub heading: String,
    #[serde(default)]
    pub html: String,
    /// Presentation only: starts a new visual group.
    #[serde(default)]
    pub divider: bool,
}

impl Section {
    pub fn new(heading: &str, html: &str) -> Self {
        Self {
            heading: heading.to_string(),
            html: html.to_string(),
            divider: false,
        }
    }

    pub fn with_divider(mut self) -> Self {
        self.divider = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Empty,
    Html(String),
    Sections(Vec<Section>),
}

/// One resolved piece of content. Never mutated after it has been resolved;
/// the registry hands out `Rc<ContentRecord>` and the renderer only borrows.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RecordDocument")]
pub struct ContentRecord {
    pub title: String,
    pub kicker: Option<String>,
    pub subheading: Option<String>,
    pub note: Option<String>,
    pub summary: Option<String>,
    pub objective: Option<String>,
    pub body: Body,
    pub footer_note: Option<String>,
    pub cta: Option<String>,
}

impl ContentRecord {
    pub fn new(title: &str, body: Body) -> Self {
        Self {
            title: title.to_string(),
            kicker: None,
            subheading: None,
            note: None,
            summary: None,
            objective: None,
            body,
            footer_note: None,
            cta: None,
        }
    }

    pub fn sections(title: &str, sections: Vec<Section>) -> Self {
        Self::new(title, Body::Sections(sections))
    }

    /// A record without a usable title cannot be rendered as content.
    pub fn validate(&self, key: &ContentKey) -> Result<(), FunnelError> {
        if self.title.trim().is_empty() {
            return Err(FunnelError::MalformedRecord { key: key.clone() });
        }
        Ok(())
    }

    pub fn first_heading(&self) -> Option<&str> {
        match &self.body {
            Body::Sections(sections) => sections.first().map(|s| s.heading.as_str()),
            _ => None,
        }
    }
}

/// Wire shape of a brief file. Accepts both the snake_case field names and
/// the camelCase names older brief files were written with.
#[derive(Deserialize)]
struct RecordDocument {
    #[serde(default)]
    title: String,
    #[serde(default)]
    kicker: Option<String>,
    #[serde(default, alias = "sub")]
    subheading: Option<String>,
    #[serde(default)]
    note: Option<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    objective: Option<String>,
    #[serde(default, alias = "bodyHtml")]
    body_html: Option<String>,
    #[serde(default)]
    sections: Vec<Section>,
    #[serde(default, alias = "footerNote")]
    footer_note: Option<String>,
    #[serde(default)]
    cta: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<RecordDocument> for ContentRecord {
    fn from(doc: RecordDocument) -> Self {
        let body = if !doc.sections.is_empty() {
            Body::Sections(doc.sections)
        } else {
            match non_blank(doc.body_html) {
                Some(html) => Body::Html(html),
                None => Body::Empty,
            }
        };

        Self {
            title: doc.title,
            kicker: non_blank(doc.kicker),
            subheading: non_blank(doc.subheading),
            note: non_blank(doc.note),
            summary: non_blank(doc.summary),
            objective: non_blank(doc.objective),
            body,
            footer_note: non_blank(doc.footer_note),
            cta: non_blank(doc.cta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::key::KNOWN_KEYS;
    use serde_json::json;

    #[test]
    fn sections_win_over_blob() {
        let record: ContentRecord = serde_json::from_value(json!({
            "title": "Interview Drift",
            "bodyHtml": "<p>old</p>",
            "sections": [
                { "heading": "What this means", "html": "<p>a</p>" },
                { "heading": "Next", "html": "<p>b</p>", "divider": true }
            ]
        }))
        .unwrap();

        assert_eq!(record.first_heading(), Some("What this means"));
        match record.body {
            Body::Sections(ref s) => {
                assert_eq!(s.len(), 2);
                assert!(!s[0].divider);
                assert!(s[1].divider);
            }
            ref other => panic!("expected sections, got {:?}", other),
        }
    }

    #[test]
    fn accepts_legacy_field_names() {
        let record: ContentRecord = serde_json::from_value(json!({
            "title": "Search Exhaustion",
            "sub": "Momentum",
            "bodyHtml": "<p>body</p>",
            "footerNote": "Private brief",
            "summary": "   "
        }))
        .unwrap();

        assert_eq!(record.subheading.as_deref(), Some("Momentum"));
        assert_eq!(record.footer_note.as_deref(), Some("Private brief"));
        assert_eq!(record.body, Body::Html("<p>body</p>".into()));
        assert_eq!(record.summary, None);
    }

    #[test]
    fn missing_title_is_malformed() {
        let record: ContentRecord = serde_json::from_value(json!({ "bodyHtml": "<p>x</p>" })).unwrap();
        let key = ContentKey::normalize("interview-drift").unwrap();
        assert!(matches!(
            record.validate(&key),
            Err(FunnelError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn shipped_briefs_are_valid() {
        let briefs = [
            ("filtering-failure", include_str!("../../briefs/filtering-failure.json")),
            ("interview-drift", include_str!("../../briefs/interview-drift.json")),
            (
                "premature-disqualification",
                include_str!("../../briefs/premature-disqualification.json"),
            ),
            ("conversion-breakdown", include_str!("../../briefs/conversion-breakdown.json")),
            ("search-exhaustion", include_str!("../../briefs/search-exhaustion.json")),
        ];
        assert_eq!(briefs.len(), KNOWN_KEYS.len());
        for (raw, doc) in briefs {
            let key = ContentKey::normalize(raw).unwrap();
            let record: ContentRecord = serde_json::from_str(doc).unwrap();
            assert!(record.validate(&key).is_ok(), "{}", raw);
        }

        let record: ContentRecord = serde_json::from_str(briefs[0].1).unwrap();
        assert_eq!(record.title, "Filtering Failure");
        assert_eq!(record.first_heading(), Some("What this means"));
    }
}
