use crate::{FormKind, RenameReply, SubmissionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The form's file input sits inside an upload widget with a name display.
    LabelBound {
        form: FormKind,
        default_text: Option<String>,
    },
    /// User changed the selected files (names in selection order).
    FilesSelected { form: FormKind, names: Vec<String> },
    /// User submitted a form; default navigation is already suppressed.
    FormSubmitted(FormKind),
    /// Extraction endpoint answered with a report.
    ExtractResponded {
        submission_id: SubmissionId,
        body: Vec<u8>,
        content_disposition: Option<String>,
    },
    /// The browser download for a report was started and its object URL released.
    DownloadTriggered {
        submission_id: SubmissionId,
        filename: String,
    },
    /// Rename endpoint answered with suggestions.
    RenameResponded {
        submission_id: SubmissionId,
        reply: RenameReply,
    },
    /// Any failure of a submission, already turned into display text.
    SubmissionFailed {
        form: FormKind,
        submission_id: SubmissionId,
        message: String,
    },
}
