use crate::texts;

/// Text for an upload widget's name display given the selected file names.
pub fn file_label_text<S: AsRef<str>>(names: &[S], default_text: &str) -> String {
    match names {
        [] => default_text.to_string(),
        [only] => only.as_ref().to_string(),
        many => texts::files_selected(many.len()),
    }
}
