//! Error type for the fail-loud adapter variant.

use std::io;

use thiserror::Error;

/// Failure surfaced by [`crate::adapter::try_run`].
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The scheduler itself could not be constructed.
    #[error("failed to build async runtime: {0}")]
    Runtime(#[from] io::Error),

    /// The async entrypoint completed abnormally.
    #[error("entrypoint failed: {0}")]
    Entrypoint(anyhow::Error),
}
