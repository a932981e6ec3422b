//! payday-domain
//!
//! Pure domain models (payment templates, occurrences, pay periods, summaries).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod common;
pub mod payment;
pub mod period;

pub use common::*;
pub use payment::*;
pub use period::*;
