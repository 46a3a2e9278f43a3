//! MainBridge Core Library
//!
//! Boundary glue between the host's blocking process-exit convention and a
//! single asynchronous entrypoint:
//! - Exit status mapping
//! - Scoped single-threaded runtime construction
//! - The entrypoint adapter (`run`, `try_run`, `exec`)
//! - Python bindings (pyo3, optional)

pub mod adapter;
pub mod error;
pub mod runtime;
pub mod status;

#[cfg(feature = "python")]
pub mod python;

pub use adapter::{exec, run, try_run};
pub use error::LaunchError;
pub use status::ExitStatus;
