//! Stderr logging bootstrap. Initialized once per process; later calls with
//! any level are no-ops so tests and the CLI can both call it freely.

use flexi_logger::{Logger, LoggerHandle};
use once_cell::sync::OnceCell;

// The handle must stay alive for the lifetime of the process.
static LOGGING_STARTED: OnceCell<LoggerHandle> = OnceCell::new();

/// Start stderr logging at the given level (`RUST_LOG` overrides it).
/// Idempotent: the first successful call wins.
pub fn init(level: &str) -> Result<(), String> {
    let normalized = normalize_level(level)?;

    if LOGGING_STARTED.get().is_some() {
        return Ok(());
    }

    LOGGING_STARTED.get_or_try_init(|| -> Result<LoggerHandle, String> {
        Logger::try_with_env_or_str(normalized)
            .map_err(|err| format!("invalid log level `{normalized}`: {err}"))?
            .log_to_stderr()
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))
    })?;

    Ok(())
}

/// Default level per build mode: `debug` for debug builds, `info` otherwise.
pub fn default_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}
