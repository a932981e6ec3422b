#![doc(test(attr(deny(warnings))))]

//! payday shows which recurring payments fall due in the current pay period
//! and how much of the period's income remains once they are paid.
//!
//! The date arithmetic lives in `payday-core`; this crate wires configuration,
//! logging and the terminal report together.

pub mod cli;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("payday tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
