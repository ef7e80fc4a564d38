//! Headless [`Page`] backed by plain Rust data.
//!
//! Mirrors the handful of DOM behaviours the indicator relies on: selector
//! lookup over forms, element creation, `<body>` children and `submit`
//! dispatch. Supported selectors are `form`, `#id`, `.class` and the
//! `form#id` / `form.class` combinations.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::config::HIDDEN_DISPLAY;
use crate::error::{IndicatorError, Result};
use crate::indicator::StatusIndicator;
use crate::page::{Page, SubmitHandler};

/// A form in a [`MemoryPage`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryForm {
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    fn matches(&self, selector: &str) -> Option<bool> {
        let rest = selector.strip_prefix("form").unwrap_or(selector);
        if rest.is_empty() {
            return (!selector.is_empty()).then_some(true);
        }
        if let Some(id) = rest.strip_prefix('#') {
            return Some(self.id.as_deref() == Some(id));
        }
        if let Some(class) = rest.strip_prefix('.') {
            return Some(self.classes.iter().any(|c| c == class));
        }
        None
    }
}

/// An element created through [`Page::create_status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryElement {
    pub tag: String,
    pub class_name: String,
    pub text: String,
    pub display: String,
}

#[derive(Default)]
struct PageState {
    forms: Vec<MemoryForm>,
    body_attributes: HashMap<String, String>,
    elements: Vec<MemoryElement>,
    body: Vec<usize>,
    listeners: Vec<(usize, Rc<RefCell<SubmitHandler>>)>,
}

/// In-memory document. Clones share the same state.
#[derive(Clone, Default)]
pub struct MemoryPage {
    state: Rc<RefCell<PageState>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(self, form: MemoryForm) -> Self {
        self.state.borrow_mut().forms.push(form);
        self
    }

    pub fn with_body_attribute(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.state
            .borrow_mut()
            .body_attributes
            .insert(name.into(), value.into());
        self
    }

    /// Fire `submit` on the form at `form_index`, returning how many
    /// listeners ran.
    pub fn submit(&self, form_index: usize) -> Result<usize> {
        let handlers: Vec<Rc<RefCell<SubmitHandler>>> = {
            let state = self.state.borrow();
            if form_index >= state.forms.len() {
                return Err(IndicatorError::Dom(format!("no form at index {form_index}")));
            }
            state
                .listeners
                .iter()
                .filter(|(form, _)| *form == form_index)
                .map(|(_, handler)| Rc::clone(handler))
                .collect()
        };
        // Listeners may call back into the page, so no borrow is held here.
        for handler in &handlers {
            let mut handler = handler.borrow_mut();
            (*handler)();
        }
        Ok(handlers.len())
    }

    /// Snapshot of the elements appended to `<body>`, in order.
    pub fn body_children(&self) -> Vec<MemoryElement> {
        let state = self.state.borrow();
        state
            .body
            .iter()
            .map(|&idx| state.elements[idx].clone())
            .collect()
    }
}

impl Page for MemoryPage {
    type Form = usize;
    type Element = usize;

    fn find_form(&self, selector: &str) -> Result<usize> {
        let state = self.state.borrow();
        let selector = selector.trim();
        for (idx, form) in state.forms.iter().enumerate() {
            match form.matches(selector) {
                Some(true) => return Ok(idx),
                Some(false) => {}
                None => {
                    return Err(IndicatorError::Dom(format!(
                        "unsupported selector: {selector}"
                    )))
                }
            }
        }
        Err(IndicatorError::FormNotFound(selector.to_string()))
    }

    fn body_attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().body_attributes.get(name).cloned()
    }

    fn create_status(&self, status: &StatusIndicator) -> Result<usize> {
        let mut state = self.state.borrow_mut();
        state.elements.push(MemoryElement {
            tag: "div".to_string(),
            class_name: status.class_name().to_string(),
            text: status.label().to_string(),
            display: HIDDEN_DISPLAY.to_string(),
        });
        Ok(state.elements.len() - 1)
    }

    fn append_to_body(&self, element: &usize) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if *element >= state.elements.len() {
            return Err(IndicatorError::Dom(format!("unknown element {element}")));
        }
        state.body.push(*element);
        Ok(())
    }

    fn set_display(&self, element: &usize, display: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        let el = state
            .elements
            .get_mut(*element)
            .ok_or_else(|| IndicatorError::Dom(format!("unknown element {element}")))?;
        el.display = display.to_string();
        Ok(())
    }

    fn on_submit(&self, form: &usize, handler: SubmitHandler) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if *form >= state.forms.len() {
            return Err(IndicatorError::Dom(format!("no form at index {form}")));
        }
        state.listeners.push((*form, Rc::new(RefCell::new(handler))));
        Ok(())
    }
}
