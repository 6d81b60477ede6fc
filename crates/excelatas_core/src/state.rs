use crate::file_label::file_label_text;
use crate::texts::DEFAULT_FILE_LABEL;
use crate::view_model::{FormView, PageViewModel, StatusView};
use crate::{FormKind, PageVariant};

pub type SubmissionId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    variant: PageVariant,
    last_submission_id: SubmissionId,
    extract: FormState,
    rename: FormState,
    dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct FormState {
    status: Option<StatusView>,
    label: Option<FileLabel>,
    latest_submission: Option<SubmissionId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FileLabel {
    default_text: String,
    text: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variant(variant: PageVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn variant(&self) -> PageVariant {
        self.variant
    }

    pub fn view(&self) -> PageViewModel {
        PageViewModel {
            extract: self.extract.view(),
            rename: self.rename.view(),
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Id of the most recent submission started on `form`.
    pub fn latest_submission(&self, form: FormKind) -> Option<SubmissionId> {
        self.form(form).latest_submission
    }

    pub(crate) fn begin_submission(&mut self, form: FormKind) -> SubmissionId {
        self.last_submission_id += 1;
        let id = self.last_submission_id;
        self.form_mut(form).latest_submission = Some(id);
        id
    }

    pub(crate) fn set_status(&mut self, form: FormKind, status: StatusView) {
        self.form_mut(form).status = Some(status);
        self.mark_dirty();
    }

    pub(crate) fn bind_label(&mut self, form: FormKind, default_text: Option<String>) {
        let default_text = default_text
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| DEFAULT_FILE_LABEL.to_string());
        self.form_mut(form).label = Some(FileLabel {
            default_text,
            text: None,
        });
    }

    /// Updates the bound label; unbound forms ignore selections.
    pub(crate) fn select_files(&mut self, form: FormKind, names: &[String]) {
        let Some(label) = self.form_mut(form).label.as_mut() else {
            return;
        };
        let text = file_label_text(names, &label.default_text);
        if label.text.as_deref() != Some(text.as_str()) {
            label.text = Some(text);
            self.mark_dirty();
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn form(&self, form: FormKind) -> &FormState {
        match form {
            FormKind::Extract => &self.extract,
            FormKind::Rename => &self.rename,
        }
    }

    fn form_mut(&mut self, form: FormKind) -> &mut FormState {
        match form {
            FormKind::Extract => &mut self.extract,
            FormKind::Rename => &mut self.rename,
        }
    }
}

impl FormState {
    fn view(&self) -> FormView {
        FormView {
            status: self.status.clone(),
            file_label: self.label.as_ref().and_then(|label| label.text.clone()),
        }
    }
}
