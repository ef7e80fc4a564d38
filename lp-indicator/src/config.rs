//! Indicator configuration.
//!
//! Defaults reproduce the landing-page script: a `div.loading` reading
//! "送信中..." attached after the first `form`. Pages can override any field
//! with a JSON object (see [`crate::page::load_config`]).

use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};

/// Default status label ("Submitting...").
pub const DEFAULT_LABEL: &str = "送信中...";
/// Default CSS class carried by the status element.
pub const DEFAULT_CLASS: &str = "loading";
/// Default selector for the page's form.
pub const DEFAULT_FORM_SELECTOR: &str = "form";
/// Default CSS `display` value for the visible state.
pub const DEFAULT_VISIBLE_DISPLAY: &str = "block";
/// CSS `display` value for the hidden state.
pub const HIDDEN_DISPLAY: &str = "none";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndicatorConfig {
    /// Text shown inside the status element
    pub label: String,
    /// CSS class applied to the status element
    pub class_name: String,
    /// Selector used to locate the form
    pub form_selector: String,
    /// CSS `display` value applied on submit
    pub visible_display: String,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            class_name: DEFAULT_CLASS.to_string(),
            form_selector: DEFAULT_FORM_SELECTOR.to_string(),
            visible_display: DEFAULT_VISIBLE_DISPLAY.to_string(),
        }
    }
}

impl IndicatorConfig {
    /// Parse a JSON object, filling missing fields from the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is usable.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("label", &self.label),
            ("class_name", &self.class_name),
            ("form_selector", &self.form_selector),
            ("visible_display", &self.visible_display),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(IndicatorError::InvalidConfig(format!("{name} must not be empty")));
            }
        }
        if self.visible_display.trim().eq_ignore_ascii_case(HIDDEN_DISPLAY) {
            return Err(IndicatorError::InvalidConfig(
                "visible_display must not be \"none\"".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_page_script() {
        let config = IndicatorConfig::default();
        assert_eq!(config.label, "送信中...");
        assert_eq!(config.class_name, "loading");
        assert_eq!(config.form_selector, "form");
        assert_eq!(config.visible_display, "block");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn from_json_fills_missing_fields() {
        let config = IndicatorConfig::from_json(r#"{"label": "Generating..."}"#).unwrap();
        assert_eq!(config.label, "Generating...");
        assert_eq!(config.class_name, DEFAULT_CLASS);
        assert_eq!(config.form_selector, DEFAULT_FORM_SELECTOR);
    }

    #[test]
    fn from_json_empty_object_is_default() {
        let config = IndicatorConfig::from_json("{}").unwrap();
        assert_eq!(config, IndicatorConfig::default());
    }

    #[test]
    fn from_json_rejects_unknown_fields() {
        let err = IndicatorConfig::from_json(r#"{"lable": "typo"}"#).unwrap_err();
        assert!(matches!(err, IndicatorError::ConfigParse(_)));
    }

    #[test]
    fn from_json_rejects_malformed_input() {
        let err = IndicatorConfig::from_json("{label:").unwrap_err();
        assert!(matches!(err, IndicatorError::ConfigParse(_)));
    }

    #[test]
    fn validate_rejects_empty_label() {
        let err = IndicatorConfig::from_json(r#"{"label": "  "}"#).unwrap_err();
        match err {
            IndicatorError::InvalidConfig(msg) => assert!(msg.contains("label")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_hidden_visible_display() {
        let config = IndicatorConfig {
            visible_display: "None".to_string(),
            ..IndicatorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(IndicatorError::InvalidConfig(_))
        ));
    }

    #[test]
    fn round_trips_through_serde() {
        let config = IndicatorConfig {
            form_selector: "#lp-form".to_string(),
            visible_display: "flex".to_string(),
            ..IndicatorConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(IndicatorConfig::from_json(&json).unwrap(), config);
    }
}
