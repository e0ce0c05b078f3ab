use serde::{Deserialize, Serialize};

/// A tracked workout type: the tag stored on disk plus its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutKind {
    pub tag: String,
    pub label: String,
}

impl WorkoutKind {
    pub fn new(tag: &str, label: &str) -> Self {
        Self {
            tag: tag.to_string(),
            label: label.to_string(),
        }
    }

    /// The two types the logger ships with.
    pub fn defaults() -> Vec<Self> {
        vec![
            WorkoutKind::new("push_ups", "Push ups"),
            WorkoutKind::new("strength_set", "Strength set"),
        ]
    }

    /// Helper: find a kind by tag, case-insensitively (CLI input).
    pub fn find<'a>(kinds: &'a [WorkoutKind], tag: &str) -> Option<&'a WorkoutKind> {
        kinds.iter().find(|k| k.tag.eq_ignore_ascii_case(tag.trim()))
    }

    /// Display name for a stored tag; unknown tags are shown raw.
    pub fn label_for<'a>(kinds: &'a [WorkoutKind], tag: &'a str) -> &'a str {
        kinds
            .iter()
            .find(|k| k.tag == tag)
            .map(|k| k.label.as_str())
            .unwrap_or(tag)
    }
}

/// Completion status as shown to the user.
pub fn status_label(completed: bool) -> &'static str {
    if completed { "Done" } else { "Skipped" }
}
