use bytes::Bytes;

/// Shown whenever the server gave no message of its own.
pub const GENERIC_FAILURE: &str = "Falha no processamento.";

/// A file part of a form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub field: String,
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// The fields and files of a form, captured at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormSubmission {
    pub fields: Vec<(String, String)>,
    pub files: Vec<UploadFile>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn file(mut self, file: UploadFile) -> Self {
        self.files.push(file);
        self
    }

    pub fn part_count(&self) -> usize {
        self.fields.len() + self.files.len()
    }
}

/// A successful (2xx) response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutput {
    pub status: u16,
    pub content_type: Option<String>,
    pub content_disposition: Option<String>,
    pub body: Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("invalid endpoint {endpoint}: {message}")]
    InvalidEndpoint { endpoint: String, message: String },
    #[error("invalid form part {0}")]
    InvalidPart(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("server rejected request with status {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("http status {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    InvalidBody(String),
}

impl SubmitError {
    /// Text for the form's status region.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Rejected { message, .. } => message.clone(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}
