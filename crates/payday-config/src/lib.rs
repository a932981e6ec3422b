//! payday-config
//!
//! The `conf.json` model read by the payday CLI.
//! Owns the Config data structure, disk persistence helpers, and validation
//! into the inputs expected by payday-core.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{Config, PaymentConfig, PaymentsConfig};
