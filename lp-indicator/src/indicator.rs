//! The status indicator model.

/// In-memory state of the "submitting..." status element.
///
/// The label and class are fixed at construction. Visibility starts out
/// false and only ever moves to true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusIndicator {
    label: String,
    class_name: String,
    visible: bool,
}

impl StatusIndicator {
    /// Create a hidden indicator.
    pub fn new(label: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            class_name: class_name.into(),
            visible: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Mark the indicator visible. Returns `true` if this call changed it.
    pub fn show(&mut self) -> bool {
        let was_hidden = !self.visible;
        self.visible = true;
        was_hidden
    }
}
