use std::cell::RefCell;
use std::rc::Rc;

use engine_logging::{engine_error, engine_info};
use excelatas_core::{update, AppState, FormKind, Msg, SubmissionId};
use excelatas_engine::{ReqwestSubmitter, SubmitError, SubmitSettings, Submitter};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Event;

use super::dom::{selected_names, Page};
use super::effects;
use crate::ui;

pub fn run_app() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let origin = window.location().origin()?;

    let settings = SubmitSettings::from_origin(&origin).map_err(to_js)?;
    let submitter = ReqwestSubmitter::new(settings).map_err(to_js)?;
    let page = Page::locate(document)?;
    let variant = page.variant();
    engine_info!("ExcelAtas page ready: variant={:?} origin={}", variant, origin);

    let app = AppHandle::new(AppState::with_variant(variant), page, Rc::new(submitter));
    for form in FormKind::ALL {
        bind_submit(&app, form)?;
        bind_file_label(&app, form)?;
    }
    Ok(())
}

/// Shared handle used by event listeners and effect tasks.
///
/// The state is only borrowed inside `dispatch`, never across an await.
#[derive(Clone)]
pub(crate) struct AppHandle {
    state: Rc<RefCell<AppState>>,
    page: Rc<Page>,
    submitter: Rc<dyn Submitter>,
}

impl AppHandle {
    fn new(state: AppState, page: Page, submitter: Rc<dyn Submitter>) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
            page: Rc::new(page),
            submitter,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn submitter(&self) -> &dyn Submitter {
        self.submitter.as_ref()
    }

    pub fn latest_submission(&self, form: FormKind) -> Option<SubmissionId> {
        self.state.borrow().latest_submission(form)
    }

    pub fn dispatch(&self, msg: Msg) {
        let (effects, maybe_view) = {
            let mut guard = self.state.borrow_mut();
            let state = std::mem::take(&mut *guard);
            let (mut state, effects) = update(state, msg);
            let view = state.view();
            let was_dirty = state.consume_dirty();
            *guard = state;
            (effects, was_dirty.then_some(view))
        };

        if let Some(view) = maybe_view {
            for command in ui::render::render(&view) {
                if let Err(err) = self.page.apply(&command) {
                    engine_error!("Applying {:?} failed: {:?}", command, err);
                }
            }
        }

        for effect in effects {
            effects::run(self, effect);
        }
    }
}

fn bind_submit(app: &AppHandle, form: FormKind) -> Result<(), JsValue> {
    let handle = app.clone();
    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        handle.dispatch(Msg::FormSubmitted(form));
    });
    app.page()
        .form(form)
        .form
        .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    on_submit.forget();
    Ok(())
}

fn bind_file_label(app: &AppHandle, form: FormKind) -> Result<(), JsValue> {
    let Some(label) = app.page().form(form).label.as_ref() else {
        return Ok(());
    };
    app.dispatch(Msg::LabelBound {
        form,
        default_text: label.default_text.clone(),
    });

    let input = label.input.clone();
    let handle = app.clone();
    let on_change = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        handle.dispatch(Msg::FilesSelected {
            form,
            names: selected_names(&input),
        });
    });
    label
        .input
        .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();
    Ok(())
}

fn to_js(err: SubmitError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
