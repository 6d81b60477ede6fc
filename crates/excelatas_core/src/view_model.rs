use std::fmt;

use crate::texts;
use crate::{EntryOutcome, ReplyEntry};

/// Visual mode of a status region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Pending,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusContent {
    Text(String),
    SuggestionList {
        heading: String,
        rows: Vec<SuggestionRow>,
    },
    SingleSuggestion {
        lead: String,
        suggested_name: String,
        badge: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub tone: StatusTone,
    pub content: StatusContent,
}

impl StatusView {
    pub fn pending(text: impl Into<String>) -> Self {
        Self {
            tone: StatusTone::Pending,
            content: StatusContent::Text(text.into()),
        }
    }

    pub fn success(content: StatusContent) -> Self {
        Self {
            tone: StatusTone::Success,
            content,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            tone: StatusTone::Error,
            content: StatusContent::Text(text.into()),
        }
    }
}

/// One entry of the rename list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionRow {
    Renamed {
        original: String,
        suggested: String,
        badge: String,
    },
    Failed {
        original: String,
        error: String,
    },
}

impl From<&ReplyEntry> for SuggestionRow {
    fn from(entry: &ReplyEntry) -> Self {
        match &entry.outcome {
            EntryOutcome::Renamed {
                suggested_name,
                minutes_number,
                unit_code,
            } => SuggestionRow::Renamed {
                original: entry.original_filename.clone(),
                suggested: suggested_name.clone(),
                badge: texts::badge(minutes_number, unit_code),
            },
            EntryOutcome::Failed { error } => SuggestionRow::Failed {
                original: entry.original_filename.clone(),
                error: error.clone(),
            },
        }
    }
}

impl fmt::Display for SuggestionRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionRow::Renamed {
                original,
                suggested,
                badge,
            } => write!(f, "{original} → {suggested} ({badge})"),
            SuggestionRow::Failed { original, error } => write!(f, "{original}: {error}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormView {
    /// `None` until the first submission; the page's own markup stays untouched.
    pub status: Option<StatusView>,
    /// `None` when the form has no bound name display or nothing was selected yet.
    pub file_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageViewModel {
    pub extract: FormView,
    pub rename: FormView,
}
