//! imstack - styling and theming showcase for `imstack_ui`
//!
//! The library half holds the demo application and its configuration so the
//! binary stays a thin runner and the demo can be exercised from tests.

pub mod config;
pub mod demo;

pub use config::{AppConfig, ConfigError, LogLevel, CONFIG_VERSION};
pub use demo::{scripted_input, Message, StylingDemo};
