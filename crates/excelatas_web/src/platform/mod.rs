mod app;
mod dom;
mod download;
mod effects;
mod form_data;
mod logging;

use engine_logging::engine_error;
use wasm_bindgen::prelude::*;

/// Entry point run by the page once the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logging::initialize();

    if let Err(err) = app::run_app() {
        engine_error!("ExcelAtas failed to start: {:?}", err);
    }
}
