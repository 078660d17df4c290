//! # formkit-core
//!
//! Core types for the formkit workspace. This crate has no internal
//! dependencies and provides the foundation for all other crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Engine settings and TOML loading
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;

pub use error::{FormError, FormResult};
pub use settings::Settings;
