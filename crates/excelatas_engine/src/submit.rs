use async_trait::async_trait;
use engine_logging::{engine_debug, engine_info, engine_warn};
use reqwest::header::{HeaderMap, HeaderName, CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use url::Url;

use crate::{FormSubmission, SubmitError, SubmitOutput};

#[derive(Debug, Clone)]
pub struct SubmitSettings {
    /// Origin the endpoint paths are resolved against.
    pub base_url: Url,
}

impl SubmitSettings {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    /// Settings for a page served from `origin`, e.g. `window.location.origin`.
    pub fn from_origin(origin: &str) -> Result<Self, SubmitError> {
        let base_url = Url::parse(origin).map_err(|err| SubmitError::InvalidEndpoint {
            endpoint: origin.to_string(),
            message: err.to_string(),
        })?;
        Ok(Self::new(base_url))
    }
}

/// Posts a form and normalises every failure into [`SubmitError`].
///
/// There is no retry and no timeout: a request that never answers keeps the
/// caller waiting.
#[async_trait(?Send)]
pub trait Submitter {
    async fn submit(
        &self,
        endpoint: &str,
        submission: FormSubmission,
    ) -> Result<SubmitOutput, SubmitError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSubmitter {
    settings: SubmitSettings,
    client: reqwest::Client,
}

impl ReqwestSubmitter {
    pub fn new(settings: SubmitSettings) -> Result<Self, SubmitError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| SubmitError::Network(err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url, SubmitError> {
        self.settings
            .base_url
            .join(endpoint)
            .map_err(|err| SubmitError::InvalidEndpoint {
                endpoint: endpoint.to_string(),
                message: err.to_string(),
            })
    }
}

#[async_trait(?Send)]
impl Submitter for ReqwestSubmitter {
    async fn submit(
        &self,
        endpoint: &str,
        submission: FormSubmission,
    ) -> Result<SubmitOutput, SubmitError> {
        let url = self.endpoint_url(endpoint)?;
        engine_debug!("POST {} parts={}", url, submission.part_count());

        let form = build_multipart(submission)?;
        let response = self
            .client
            .post(url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let content_type = header_text(response.headers(), CONTENT_TYPE);
        let content_disposition = header_text(response.headers(), CONTENT_DISPOSITION);
        engine_info!(
            "POST {} -> {} content_type={:?}",
            url,
            status,
            content_type
        );

        if !response.status().is_success() {
            let err = if is_json(content_type.as_deref()) {
                let body = response.bytes().await.map_err(map_reqwest_error)?;
                rejection_from_json(status, &body)
            } else {
                SubmitError::Status(status)
            };
            engine_warn!("POST {} failed: {}", url, err);
            return Err(err);
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        Ok(SubmitOutput {
            status,
            content_type,
            content_disposition,
            body,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    erro: Option<String>,
}

fn rejection_from_json(status: u16, body: &[u8]) -> SubmitError {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.erro)
        .filter(|message| !message.is_empty())
        .map(|message| SubmitError::Rejected { status, message })
        .unwrap_or(SubmitError::Status(status))
}

fn build_multipart(submission: FormSubmission) -> Result<Form, SubmitError> {
    let mut form = Form::new();
    for (name, value) in submission.fields {
        form = form.text(name, value);
    }
    for file in submission.files {
        let mut part = Part::bytes(file.bytes).file_name(file.filename);
        if let Some(mime) = file.content_type.filter(|m| !m.is_empty()) {
            part = part
                .mime_str(&mime)
                .map_err(|err| SubmitError::InvalidPart(format!("{}: {err}", file.field)))?;
        }
        form = form.part(file.field, part);
    }
    Ok(form)
}

fn is_json(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.contains("application/json"))
}

fn header_text(headers: &HeaderMap, name: HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

fn map_reqwest_error(err: reqwest::Error) -> SubmitError {
    SubmitError::Network(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::{is_json, rejection_from_json};
    use crate::SubmitError;

    #[test]
    fn json_detection_accepts_charset_suffix() {
        assert!(is_json(Some("application/json; charset=utf-8")));
        assert!(!is_json(Some("text/html")));
        assert!(!is_json(None));
    }

    #[test]
    fn rejection_needs_a_non_empty_erro_string() {
        assert_eq!(
            rejection_from_json(400, r#"{"erro":"Formato inválido"}"#.as_bytes()),
            SubmitError::Rejected {
                status: 400,
                message: "Formato inválido".to_string()
            }
        );
        assert_eq!(rejection_from_json(400, br#"{"erro":""}"#), SubmitError::Status(400));
        assert_eq!(rejection_from_json(500, br#"{"detail":"x"}"#), SubmitError::Status(500));
        assert_eq!(rejection_from_json(502, b"<html>"), SubmitError::Status(502));
    }
}
