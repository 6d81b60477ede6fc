use excelatas_core::{FormKind, PageVariant};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement};

use crate::ui::constants::*;
use crate::ui::markup::Node;
use crate::ui::render::DomCommand;

/// The elements one form drives.
pub(crate) struct FormElements {
    pub form: HtmlFormElement,
    pub status: Element,
    pub label: Option<FileLabelElements>,
}

/// File input plus the name display inside its upload widget.
pub(crate) struct FileLabelElements {
    pub input: HtmlInputElement,
    pub display: Element,
    pub default_text: Option<String>,
}

pub(crate) struct Page {
    document: Document,
    extract: FormElements,
    rename: FormElements,
}

impl Page {
    pub fn locate(document: Document) -> Result<Self, JsValue> {
        let extract = locate_form(&document, FormKind::Extract)?;
        let rename = locate_form(&document, FormKind::Rename)?;
        Ok(Self {
            document,
            extract,
            rename,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn variant(&self) -> PageVariant {
        let attr = self
            .document
            .body()
            .and_then(|body| body.get_attribute(VARIANT_ATTR));
        PageVariant::from_attr(attr.as_deref())
    }

    pub fn form(&self, form: FormKind) -> &FormElements {
        match form {
            FormKind::Extract => &self.extract,
            FormKind::Rename => &self.rename,
        }
    }

    pub fn apply(&self, command: &DomCommand) -> Result<(), JsValue> {
        match command {
            DomCommand::SetStatus {
                form,
                class_name,
                children,
            } => {
                let region = &self.form(*form).status;
                region.set_class_name(class_name);
                region.set_text_content(None);
                for node in children {
                    region.append_child(&self.build(node)?)?;
                }
            }
            DomCommand::SetFileLabel { form, text } => {
                if let Some(label) = &self.form(*form).label {
                    label.display.set_text_content(Some(text));
                }
            }
        }
        Ok(())
    }

    fn build(&self, node: &Node) -> Result<web_sys::Node, JsValue> {
        match node {
            Node::Text(value) => Ok(self.document.create_text_node(value).into()),
            Node::Element {
                tag,
                class,
                children,
            } => {
                let element = self.document.create_element(tag)?;
                if let Some(class) = class {
                    element.set_class_name(class);
                }
                for child in children {
                    element.append_child(&self.build(child)?)?;
                }
                Ok(element.into())
            }
        }
    }
}

fn locate_form(document: &Document, form: FormKind) -> Result<FormElements, JsValue> {
    let form_element: HtmlFormElement = element_by_id(document, form_id(form))?.dyn_into()?;
    let status = element_by_id(document, status_id(form))?;
    let label = locate_file_label(&form_element)?;
    Ok(FormElements {
        form: form_element,
        status,
        label,
    })
}

fn locate_file_label(form: &HtmlFormElement) -> Result<Option<FileLabelElements>, JsValue> {
    let Some(input) = form.query_selector(FILE_INPUT_SELECTOR)? else {
        return Ok(None);
    };
    let Some(widget) = input.closest(UPLOAD_WIDGET_SELECTOR)? else {
        return Ok(None);
    };
    let Some(display) = widget.query_selector(UPLOAD_NAME_SELECTOR)? else {
        return Ok(None);
    };
    let default_text = display.get_attribute(DEFAULT_TEXT_ATTR);
    Ok(Some(FileLabelElements {
        input: input.dyn_into()?,
        display,
        default_text,
    }))
}

fn element_by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
}

/// Names of the files currently selected in `input`, in order.
pub(crate) fn selected_names(input: &HtmlInputElement) -> Vec<String> {
    let Some(files) = input.files() else {
        return Vec::new();
    };
    (0..files.length())
        .filter_map(|index| files.get(index))
        .map(|file| file.name())
        .collect()
}
