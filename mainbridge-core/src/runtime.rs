//! Scoped construction of the cooperative scheduler.

use std::io;

use tokio::runtime::{Builder, Runtime};

/// Build a fresh single-threaded runtime for one adapter invocation.
///
/// The caller owns the returned runtime exclusively; dropping it tears the
/// scheduler down completely, so nothing carries over to a later run.
pub fn build() -> io::Result<Runtime> {
    Builder::new_current_thread().enable_all().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_produces_usable_runtime() {
        let runtime = build().unwrap();
        assert_eq!(runtime.block_on(async { 41 + 1 }), 42);
    }

    #[test]
    fn test_sequential_builds_are_independent() {
        let first = build().unwrap();
        first.block_on(async {});
        drop(first);

        let second = build().unwrap();
        assert_eq!(second.block_on(async { 7 }), 7);
    }
}
