/// A decoded answer from the rename endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameReply {
    /// One bare suggestion object.
    Single(ReplyEntry),
    /// The `sugestoes` list, in server order.
    Batch(Vec<ReplyEntry>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyEntry {
    pub original_filename: String,
    pub outcome: EntryOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    Renamed {
        suggested_name: String,
        minutes_number: String,
        unit_code: String,
    },
    Failed {
        error: String,
    },
}

impl ReplyEntry {
    pub fn renamed(
        original_filename: impl Into<String>,
        suggested_name: impl Into<String>,
        minutes_number: impl Into<String>,
        unit_code: impl Into<String>,
    ) -> Self {
        Self {
            original_filename: original_filename.into(),
            outcome: EntryOutcome::Renamed {
                suggested_name: suggested_name.into(),
                minutes_number: minutes_number.into(),
                unit_code: unit_code.into(),
            },
        }
    }

    pub fn failed(original_filename: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            original_filename: original_filename.into(),
            outcome: EntryOutcome::Failed {
                error: error.into(),
            },
        }
    }
}
