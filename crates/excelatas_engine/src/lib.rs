//! ExcelAtas engine: form submission over HTTP and response decoding.
mod rename;
mod submit;
mod types;

pub use rename::{decode_rename_response, RenameResponse, Suggestion, SuggestionOutcome};
pub use submit::{ReqwestSubmitter, SubmitSettings, Submitter};
pub use types::{FormSubmission, SubmitError, SubmitOutput, UploadFile, GENERIC_FAILURE};
