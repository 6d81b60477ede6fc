//! ExcelAtas core: pure state machine and view-model helpers for the two page forms.
mod download;
mod effect;
mod file_label;
mod form;
mod msg;
mod state;
mod suggestion;
pub mod texts;
mod update;
mod view_model;

pub use download::download_filename;
pub use effect::Effect;
pub use file_label::file_label_text;
pub use form::{FormKind, PageVariant};
pub use msg::Msg;
pub use state::{AppState, SubmissionId};
pub use suggestion::{EntryOutcome, RenameReply, ReplyEntry};
pub use update::update;
pub use view_model::{FormView, PageViewModel, StatusContent, StatusTone, StatusView, SuggestionRow};
