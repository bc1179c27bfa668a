use chrono::Utc;
use serde::{Deserialize, Serialize};

pub type SnippetId = i64;

/// A labeled piece of text the user copies repeatedly.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub id: SnippetId,
    pub label: String,
    pub content: String,
}

impl Snippet {
    pub fn new(id: SnippetId, label: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            content: content.into(),
        }
    }

    /// Content collapsed to a single line, cut at `max_chars`.
    pub fn preview(&self, max_chars: usize) -> String {
        let flat: String = self
            .content
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();

        if flat.chars().count() <= max_chars {
            return flat;
        }

        let mut cut: String = flat.chars().take(max_chars.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> SnippetId {
    Utc::now().timestamp_millis()
}

/// Next id for a list whose largest id is `max_existing`.
///
/// Ids follow the clock, but never fall behind an id already handed out.
/// `None` when the largest id leaves no room above it.
pub fn next_id(max_existing: Option<SnippetId>, now: SnippetId) -> Option<SnippetId> {
    match max_existing {
        Some(max) if max >= now => max.checked_add(1),
        _ => Some(now),
    }
}

/// Sample entries written on first run.
pub fn seed_snippets(now: SnippetId) -> Vec<Snippet> {
    vec![
        Snippet::new(now, "Home address", "100-0000 Tokyo, Chiyoda-ku ..."),
        Snippet::new(now + 1, "Email address", "user@example.com"),
    ]
}
