//! Look up point-of-sale terminal models by name.
//!
//! The logic kernel (normalization, substring filtering and the result
//! policy) is independent of the egui front end in [`app`].

pub mod advisory;
pub mod app;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod labels;
pub mod logging;
pub mod matcher;
pub mod presenter;
pub mod record;

pub use catalog::{Catalog, CatalogError};
pub use config::{ConfigError, SearchConfig, WidgetBindings};
pub use controller::TerminalSearch;
pub use presenter::{DetailLine, DetailView, Suggestion, View};
pub use record::{RecordError, TerminalRecord};
