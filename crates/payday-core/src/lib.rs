//! payday-core
//!
//! Pay period arithmetic for payday.
//! Depends on payday-domain. No CLI, no terminal I/O, no configuration files.

pub mod dates;
pub mod error;
pub mod frequency;
pub mod pay_cycle_service;
pub mod period_service;
pub mod recurrence_service;
pub mod summary_service;
pub mod time;


pub use dates::*;
pub use error::CoreError;
pub use frequency::*;
pub use pay_cycle_service::*;
pub use period_service::*;
pub use recurrence_service::*;
pub use summary_service::*;
pub use time::*;
