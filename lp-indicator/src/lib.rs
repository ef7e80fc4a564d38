//! Loading indicator shown while a landing-page form submits.
//!
//! On install the indicator looks up the page's form, appends a hidden
//! status element to `<body>` and reveals it when the form fires `submit`.
//! The submission itself is never intercepted.
//!
//! # Architecture
//!
//! - [`Page`] abstracts the two DOM handles the indicator owns (form and
//!   status element). `lp-indicator-web` implements it over `web-sys`;
//!   [`MemoryPage`] implements it headlessly for tests and non-browser hosts.
//! - `Rc<RefCell<StatusIndicator>>` is shared between the handle and the
//!   submit callback, matching the single-threaded WASM event loop.
//!
//! # Usage
//!
//! ```rust
//! use lp_indicator::{IndicatorConfig, LoadingIndicator, MemoryForm, MemoryPage};
//!
//! let page = MemoryPage::new().with_form(MemoryForm::new());
//! let indicator = LoadingIndicator::install(page.clone(), &IndicatorConfig::default()).unwrap();
//! assert!(!indicator.is_visible());
//!
//! page.submit(0).unwrap();
//! assert!(indicator.is_visible());
//! ```

pub mod config;
pub mod error;
pub mod indicator;
pub mod memory;
pub mod page;
mod toggler;

pub use config::IndicatorConfig;
pub use error::{IndicatorError, Result};
pub use indicator::StatusIndicator;
pub use memory::{MemoryElement, MemoryForm, MemoryPage};
pub use page::{load_config, Page, SubmitHandler, CONFIG_ATTRIBUTE};
pub use toggler::LoadingIndicator;
