use excelatas_core::{FormKind, StatusTone};

pub const FORM_EXTRACT: &str = "form-extrair";
pub const FORM_RENAME: &str = "form-renomear";
pub const STATUS_EXTRACT: &str = "status-extrair";
pub const STATUS_RENAME: &str = "status-renomear";

pub const FILE_INPUT_SELECTOR: &str = "input[type=\"file\"]";
pub const UPLOAD_WIDGET_SELECTOR: &str = ".file-upload";
pub const UPLOAD_NAME_SELECTOR: &str = ".file-upload-name";
pub const DEFAULT_TEXT_ATTR: &str = "data-default";
pub const VARIANT_ATTR: &str = "data-variant";

pub const RENAME_LIST_CLASS: &str = "rename-list";
pub const ARROW_CLASS: &str = "arrow";
pub const BADGE_CLASS: &str = "badge";

pub fn form_id(form: FormKind) -> &'static str {
    match form {
        FormKind::Extract => FORM_EXTRACT,
        FormKind::Rename => FORM_RENAME,
    }
}

pub fn status_id(form: FormKind) -> &'static str {
    match form {
        FormKind::Extract => STATUS_EXTRACT,
        FormKind::Rename => STATUS_RENAME,
    }
}

pub fn status_class(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Pending => "status warn",
        StatusTone::Success => "status ok",
        StatusTone::Error => "status err",
    }
}
