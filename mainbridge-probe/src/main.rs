//! MainBridge Probe
//!
//! Scriptable host process for exercising the entrypoint adapter end to end.
//! The first argument selects the async entrypoint's behavior; the process
//! exit code is whatever the adapter resolves. Used by the integration tests
//! to observe real process exits; not meant for anything else.

use std::env;
use std::io;
use std::time::Duration;

use anyhow::{anyhow, bail, Result};
use tracing::info;

fn main() {
    // Log to stderr; stdout carries the invocation marker checked by tests.
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let mode = env::args().nth(1).unwrap_or_else(|| "ok:0".to_string());
    info!("mainbridge-probe starting in mode {mode}");

    mainbridge_core::exec(move || async move {
        println!("entrypoint-invoked");
        run_mode(&mode).await
    })
}

async fn run_mode(mode: &str) -> Result<i32> {
    if let Some(code) = mode.strip_prefix("ok:") {
        let code = code
            .parse::<i32>()
            .map_err(|_| anyhow!("bad status value {code:?}"))?;
        return Ok(code);
    }

    match mode {
        "fail" => bail!("simulated fault"),
        "panic" => panic!("simulated panic"),
        "yield" => {
            // One real suspension before completing.
            tokio::time::sleep(Duration::from_millis(1)).await;
            Ok(0)
        }
        other => bail!("unknown probe mode {other:?}"),
    }
}
