//! The seam between the indicator and the host document.
//!
//! A `Page` owns no indicator state. It only knows how to find the form,
//! build and attach the status element, flip its `display`, and wire the
//! form's `submit` event to a callback.

use crate::config::IndicatorConfig;
use crate::error::Result;
use crate::indicator::StatusIndicator;

/// `<body>` attribute holding an optional JSON [`IndicatorConfig`].
pub const CONFIG_ATTRIBUTE: &str = "data-loading-indicator";

/// Callback run on every `submit` of the form.
pub type SubmitHandler = Box<dyn FnMut()>;

/// Host document operations needed by [`crate::LoadingIndicator`].
///
/// Handles are cheap clones of references into the document, so a page and
/// its element can be moved into the submit callback.
pub trait Page: Clone + 'static {
    type Form;
    type Element: Clone + 'static;

    /// First element matching `selector`, or `IndicatorError::FormNotFound`.
    fn find_form(&self, selector: &str) -> Result<Self::Form>;

    /// Value of an attribute on `<body>`.
    fn body_attribute(&self, name: &str) -> Option<String>;

    /// Build a detached `div` carrying the indicator's label and class,
    /// hidden with `display: none`.
    fn create_status(&self, status: &StatusIndicator) -> Result<Self::Element>;

    fn append_to_body(&self, element: &Self::Element) -> Result<()>;

    fn set_display(&self, element: &Self::Element, display: &str) -> Result<()>;

    /// Run `handler` on every `submit` of `form` for the life of the page.
    /// The default action must be left alone.
    fn on_submit(&self, form: &Self::Form, handler: SubmitHandler) -> Result<()>;
}

/// Resolve the configuration for `page`.
///
/// Uses the JSON in [`CONFIG_ATTRIBUTE`] when `<body>` carries it, the
/// defaults otherwise.
pub fn load_config<P: Page>(page: &P) -> Result<IndicatorConfig> {
    match page.body_attribute(CONFIG_ATTRIBUTE) {
        Some(json) => {
            log::debug!("[LP] config: reading {}", CONFIG_ATTRIBUTE);
            IndicatorConfig::from_json(&json)
        }
        None => Ok(IndicatorConfig::default()),
    }
}
