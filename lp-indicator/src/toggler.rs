//! Installs the status element and reveals it on submit.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::IndicatorConfig;
use crate::error::Result;
use crate::indicator::StatusIndicator;
use crate::page::Page;

/// Handle to an installed loading indicator.
///
/// Owns the form and status element handles. The submit listener shares
/// the same `StatusIndicator` through an `Rc`, so visibility observed here
/// reflects every submit the page has seen.
pub struct LoadingIndicator<P: Page> {
    page: P,
    form: P::Form,
    element: P::Element,
    status: Rc<RefCell<StatusIndicator>>,
    visible_display: String,
}

impl<P: Page> LoadingIndicator<P> {
    /// Locate the form, append the hidden status element and register the
    /// submit listener.
    ///
    /// Fails before touching the document if the config is invalid or no
    /// form matches `config.form_selector`.
    pub fn install(page: P, config: &IndicatorConfig) -> Result<Self> {
        config.validate()?;
        let form = page.find_form(&config.form_selector)?;

        let status = StatusIndicator::new(config.label.as_str(), config.class_name.as_str());
        let element = page.create_status(&status)?;
        page.append_to_body(&element)?;
        log::debug!("[LP] indicator: appended .{} to body", status.class_name());

        let status = Rc::new(RefCell::new(status));
        let handler_page = page.clone();
        let handler_element = element.clone();
        let handler_status = Rc::clone(&status);
        let display = config.visible_display.clone();
        page.on_submit(
            &form,
            Box::new(move || {
                if let Err(e) = reveal(&handler_page, &handler_element, &handler_status, &display) {
                    log::error!("[LP] indicator: failed to show on submit: {}", e);
                }
            }),
        )?;

        log::info!(
            "[LP] indicator: installed on '{}' with label '{}'",
            config.form_selector,
            config.label
        );
        Ok(Self {
            page,
            form,
            element,
            status,
            visible_display: config.visible_display.clone(),
        })
    }

    pub fn is_visible(&self) -> bool {
        self.status.borrow().is_visible()
    }

    pub fn label(&self) -> String {
        self.status.borrow().label().to_string()
    }

    /// Reveal the indicator the same way a submit does.
    pub fn show(&self) -> Result<()> {
        reveal(&self.page, &self.element, &self.status, &self.visible_display)
    }

    pub fn form(&self) -> &P::Form {
        &self.form
    }

    pub fn element(&self) -> &P::Element {
        &self.element
    }
}

fn reveal<P: Page>(
    page: &P,
    element: &P::Element,
    status: &RefCell<StatusIndicator>,
    display: &str,
) -> Result<()> {
    page.set_display(element, display)?;
    if status.borrow_mut().show() {
        log::info!("[LP] indicator: form submitted, showing status");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IndicatorError;
    use crate::memory::{MemoryForm, MemoryPage};

    fn page_with_form() -> MemoryPage {
        MemoryPage::new().with_form(MemoryForm::new())
    }

    #[test]
    fn install_appends_hidden_status() {
        let page = page_with_form();
        let indicator = LoadingIndicator::install(page.clone(), &IndicatorConfig::default()).unwrap();

        let children = page.body_children();
        assert_eq!(children.len(), 1, "exactly one status element should be appended");
        let el = &children[0];
        assert_eq!(el.tag, "div");
        assert_eq!(el.class_name, "loading");
        assert_eq!(el.text, "送信中...");
        assert_eq!(el.display, "none");
        assert!(!indicator.is_visible());
    }

    #[test]
    fn submit_shows_status() {
        let page = page_with_form();
        let indicator = LoadingIndicator::install(page.clone(), &IndicatorConfig::default()).unwrap();

        assert_eq!(page.submit(0).unwrap(), 1);
        assert!(indicator.is_visible());
        assert_eq!(page.body_children()[0].display, "block");
    }

    #[test]
    fn repeated_submits_stay_visible() {
        let page = page_with_form();
        let indicator = LoadingIndicator::install(page.clone(), &IndicatorConfig::default()).unwrap();

        for _ in 0..3 {
            page.submit(0).unwrap();
        }
        assert!(indicator.is_visible());
        assert_eq!(page.body_children()[0].display, "block");
        assert_eq!(page.body_children().len(), 1);
    }

    #[test]
    fn label_matches_config() {
        let page = page_with_form();
        let config = IndicatorConfig {
            label: "Generating your LP...".to_string(),
            visible_display: "flex".to_string(),
            ..IndicatorConfig::default()
        };
        let indicator = LoadingIndicator::install(page.clone(), &config).unwrap();
        assert_eq!(indicator.label(), "Generating your LP...");

        page.submit(0).unwrap();
        let el = &page.body_children()[0];
        assert_eq!(el.text, "Generating your LP...");
        assert_eq!(el.display, "flex");
    }

    #[test]
    fn show_matches_submit_path() {
        let page = page_with_form();
        let indicator = LoadingIndicator::install(page.clone(), &IndicatorConfig::default()).unwrap();

        indicator.show().unwrap();
        assert!(indicator.is_visible());
        assert_eq!(page.body_children()[0].display, "block");
    }

    #[test]
    fn missing_form_fails_without_mutating_page() {
        let page = MemoryPage::new();
        let result = LoadingIndicator::install(page.clone(), &IndicatorConfig::default());

        assert!(matches!(result, Err(IndicatorError::FormNotFound(ref s)) if s == "form"));
        assert!(page.body_children().is_empty());
    }

    #[test]
    fn invalid_config_fails_before_lookup() {
        let page = page_with_form();
        let config = IndicatorConfig {
            class_name: String::new(),
            ..IndicatorConfig::default()
        };
        let result = LoadingIndicator::install(page.clone(), &config);

        assert!(matches!(result, Err(IndicatorError::InvalidConfig(_))));
        assert!(page.body_children().is_empty());
    }

    #[test]
    fn binds_to_selected_form_only() {
        let page = MemoryPage::new()
            .with_form(MemoryForm::new().with_id("search"))
            .with_form(MemoryForm::new().with_id("lp-form"));
        let config = IndicatorConfig {
            form_selector: "#lp-form".to_string(),
            ..IndicatorConfig::default()
        };
        let indicator = LoadingIndicator::install(page.clone(), &config).unwrap();

        assert_eq!(page.submit(0).unwrap(), 0, "other form has no listener");
        assert!(!indicator.is_visible());
        page.submit(1).unwrap();
        assert!(indicator.is_visible());
    }
}
