use payday_config::ConfigError;
use payday_core::CoreError;
use thiserror::Error;

/// Error type surfaced by the payday CLI.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Core(#[from] CoreError),
}
