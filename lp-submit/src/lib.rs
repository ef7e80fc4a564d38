//! Page script for the LP generator form.
//!
//! Loaded as a WASM module by the form page. On start it attaches a hidden
//! "送信中..." status element and reveals it when the form submits, so the
//! user sees progress while the server builds the LP proposal.
//!
//! Config is read from `<body data-loading-indicator='{...}'>` when present.

use anyhow::Context;
use lp_indicator::{load_config, LoadingIndicator};
use lp_indicator_web::WebPage;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Info);

    match install() {
        Ok(indicator) => {
            log::info!("[LP] submit indicator ready ('{}')", indicator.label());
            Ok(())
        }
        Err(e) => {
            log::error!("[LP] submit indicator setup failed: {:#}", e);
            Err(JsValue::from_str(&format!("{:#}", e)))
        }
    }
}

/// Build the indicator against the live document.
fn install() -> anyhow::Result<LoadingIndicator<WebPage>> {
    let page = WebPage::from_window().context("accessing the document")?;
    let config = load_config(&page).context("reading indicator config")?;
    let indicator = LoadingIndicator::install(page, &config)
        .with_context(|| format!("installing indicator on '{}'", config.form_selector))?;
    Ok(indicator)
}
