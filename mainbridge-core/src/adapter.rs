//! The process entrypoint adapter.
//!
//! Bridges the synchronous process-start convention to exactly one
//! cooperatively scheduled async call: build a fresh scheduler, drive the
//! entrypoint to completion, map its outcome to an exit status. There is no
//! timeout and no cancellation at this layer; if the entrypoint never
//! completes, neither does the adapter.

use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::process;

use tracing::debug;

use crate::error::LaunchError;
use crate::runtime;
use crate::status::ExitStatus;

/// Drive `entrypoint` to completion on a fresh single-threaded runtime.
///
/// Fail-loud variant: entrypoint failures and runtime construction failures
/// surface to the caller instead of collapsing into an exit status.
pub fn try_run<F, Fut>(entrypoint: F) -> Result<ExitStatus, LaunchError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = anyhow::Result<i32>>,
{
    // Scoped to this call: dropped on every return path, never reused.
    let runtime = runtime::build()?;
    let code = runtime
        .block_on(entrypoint())
        .map_err(LaunchError::Entrypoint)?;
    Ok(ExitStatus::from_code(code))
}

/// Drive `entrypoint` to completion and always produce an exit status.
///
/// Catch-all variant: any failure, whether an `Err` or a panic unwinding out
/// of the entrypoint, collapses to [`ExitStatus::FAILURE`]. Failure detail
/// stays at this boundary and is logged at debug level only.
pub fn run<F, Fut>(entrypoint: F) -> ExitStatus
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = anyhow::Result<i32>>,
{
    match panic::catch_unwind(AssertUnwindSafe(|| try_run(entrypoint))) {
        Ok(Ok(status)) => status,
        Ok(Err(err)) => {
            debug!("entrypoint failed: {err}");
            ExitStatus::FAILURE
        }
        Err(_) => {
            debug!("entrypoint panicked");
            ExitStatus::FAILURE
        }
    }
}

/// Run the entrypoint and terminate the process with the resolved status.
///
/// Never returns; nothing in this component runs after the exit.
pub fn exec<F, Fut>(entrypoint: F) -> !
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = anyhow::Result<i32>>,
{
    process::exit(run(entrypoint).code())
}
