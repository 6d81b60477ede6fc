use js_sys::{Array, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, Document, HtmlAnchorElement, Url};

/// Starts a browser download of `bytes` named `filename`.
///
/// The object URL is revoked before returning, whether or not the click
/// succeeded.
pub(crate) fn trigger(document: &Document, filename: &str, bytes: &[u8]) -> Result<(), JsValue> {
    let parts = Array::of1(&Uint8Array::from(bytes));
    let blob = Blob::new_with_u8_array_sequence(&parts)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let clicked = click_anchor(document, &url, filename);
    Url::revoke_object_url(&url)?;
    clicked
}

fn click_anchor(document: &Document, url: &str, filename: &str) -> Result<(), JsValue> {
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(url);
    anchor.set_download(filename);

    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();
    Ok(())
}
