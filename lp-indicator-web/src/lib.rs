//! `web-sys` implementation of the indicator's [`Page`] seam.
//!
//! Every DOM call that can throw is mapped to `IndicatorError::Dom` with
//! the exception's message, so callers above this crate only deal with
//! `lp_indicator::Result`.

use lp_indicator::config::HIDDEN_DISPLAY;
use lp_indicator::{IndicatorError, Page, Result, StatusIndicator, SubmitHandler};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement};

/// The live document the script was loaded into.
#[derive(Clone)]
pub struct WebPage {
    document: Document,
    body: HtmlElement,
}

impl WebPage {
    /// Grab `window.document` and its `<body>`.
    pub fn from_window() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| IndicatorError::Dom("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| IndicatorError::Dom("window has no document".to_string()))?;
        let body = document
            .body()
            .ok_or_else(|| IndicatorError::Dom("document has no body".to_string()))?;
        Ok(Self { document, body })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

/// Convert a thrown JS value into an indicator error.
pub fn dom_error(err: JsValue) -> IndicatorError {
    let msg = if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        String::from(e.message())
    } else if let Some(s) = err.as_string() {
        s
    } else {
        format!("{:?}", err)
    };
    IndicatorError::Dom(msg)
}

impl Page for WebPage {
    type Form = Element;
    type Element = HtmlElement;

    fn find_form(&self, selector: &str) -> Result<Element> {
        self.document
            .query_selector(selector)
            .map_err(dom_error)?
            .ok_or_else(|| IndicatorError::FormNotFound(selector.to_string()))
    }

    fn body_attribute(&self, name: &str) -> Option<String> {
        self.body.get_attribute(name)
    }

    fn create_status(&self, status: &StatusIndicator) -> Result<HtmlElement> {
        let element = self
            .document
            .create_element("div")
            .map_err(dom_error)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| IndicatorError::Dom("created div is not an HtmlElement".to_string()))?;
        element.set_class_name(status.class_name());
        element.set_text_content(Some(status.label()));
        element
            .style()
            .set_property("display", HIDDEN_DISPLAY)
            .map_err(dom_error)?;
        Ok(element)
    }

    fn append_to_body(&self, element: &HtmlElement) -> Result<()> {
        self.body.append_child(element).map_err(dom_error)?;
        Ok(())
    }

    fn set_display(&self, element: &HtmlElement, display: &str) -> Result<()> {
        log::debug!("[LP] web: display -> {}", display);
        element
            .style()
            .set_property("display", display)
            .map_err(dom_error)
    }

    fn on_submit(&self, form: &Element, mut handler: SubmitHandler) -> Result<()> {
        // The event is left untouched so the browser's own submission proceeds.
        let callback = Closure::wrap(Box::new(move |_event: Event| {
            handler();
        }) as Box<dyn FnMut(Event)>);
        form.add_event_listener_with_callback("submit", callback.as_ref().unchecked_ref())
            .map_err(dom_error)?;
        // Listener lives as long as the page.
        callback.forget();
        Ok(())
    }
}
