use crate::{FormKind, SubmissionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Read the form's current fields and files and POST them to its endpoint.
    Submit {
        form: FormKind,
        submission_id: SubmissionId,
    },
    /// Hand the report bytes to the browser as a file download.
    TriggerDownload {
        submission_id: SubmissionId,
        filename: String,
        bytes: Vec<u8>,
    },
}
