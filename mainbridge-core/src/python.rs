//! Python bindings for mainbridge-core
//!
//! For deployments where the async main ships inside a Python extension
//! module and the host's asyncio loop is the top-level scheduler. A host
//! crate's `#[pymodule]` wraps its entrypoint future with [`awaitable_status`]
//! and the Python shim does `sys.exit(await main())`.

use std::future::Future;

use pyo3::prelude::*;

use crate::status::ExitStatus;

/// Wrap a status-yielding future into a Python awaitable.
///
/// The awaitable resolves to the mapped integer exit status. The same
/// catch-all as [`crate::adapter::run`] applies on the Rust side: a failed
/// future resolves to 1 rather than raising into Python.
pub fn awaitable_status<'py, F>(py: Python<'py>, entrypoint: F) -> PyResult<Bound<'py, PyAny>>
where
    F: Future<Output = anyhow::Result<i32>> + Send + 'static,
{
    pyo3_async_runtimes::tokio::future_into_py(py, async move {
        let status = match entrypoint.await {
            Ok(code) => ExitStatus::from_code(code),
            Err(err) => {
                tracing::debug!("entrypoint failed: {err:#}");
                ExitStatus::FAILURE
            }
        };
        Ok(status.code())
    })
}
