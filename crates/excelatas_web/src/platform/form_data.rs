use excelatas_engine::{FormSubmission, UploadFile};
use futures_util::future::try_join_all;
use js_sys::Uint8Array;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// Content type browsers give an empty file part.
const EMPTY_FILE_TYPE: &str = "application/octet-stream";

/// Captures a form's successful controls the way `FormData` would.
///
/// A file input with nothing selected still contributes one empty part, so
/// the server sees the same request a plain browser submit would send.
pub(crate) async fn read_form(form: &HtmlFormElement) -> Result<FormSubmission, JsValue> {
    let mut submission = FormSubmission::new();
    let mut pending_files = Vec::new();

    let controls = form.elements();
    for index in 0..controls.length() {
        let Some(control) = controls.item(index) else {
            continue;
        };

        if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
            let name = input.name();
            if name.is_empty() || input.disabled() {
                continue;
            }
            match input.type_().to_ascii_lowercase().as_str() {
                "file" => match input.files().filter(|files| files.length() > 0) {
                    Some(files) => {
                        for file in (0..files.length()).filter_map(|i| files.get(i)) {
                            pending_files.push((name.clone(), file));
                        }
                    }
                    None => {
                        submission = submission.file(UploadFile {
                            field: name,
                            filename: String::new(),
                            content_type: Some(EMPTY_FILE_TYPE.to_string()),
                            bytes: Vec::new(),
                        });
                    }
                },
                "checkbox" | "radio" => {
                    if input.checked() {
                        submission = submission.text(name, input.value());
                    }
                }
                "submit" | "button" | "reset" | "image" => {}
                _ => submission = submission.text(name, input.value()),
            }
        } else if let Some(area) = control.dyn_ref::<HtmlTextAreaElement>() {
            if !area.name().is_empty() && !area.disabled() {
                submission = submission.text(area.name(), area.value());
            }
        } else if let Some(select) = control.dyn_ref::<HtmlSelectElement>() {
            if !select.name().is_empty() && !select.disabled() {
                submission = submission.text(select.name(), select.value());
            }
        }
    }

    let uploads = try_join_all(
        pending_files
            .into_iter()
            .map(|(field, file)| read_file(field, file)),
    )
    .await?;
    for upload in uploads {
        submission = submission.file(upload);
    }
    Ok(submission)
}

async fn read_file(field: String, file: File) -> Result<UploadFile, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let content_type = file.type_();
    Ok(UploadFile {
        field,
        filename: file.name(),
        content_type: (!content_type.is_empty()).then_some(content_type),
        bytes: Uint8Array::new(&buffer).to_vec(),
    })
}
