use std::panic;
use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

// Keeps the non-blocking writer flushing for the life of the process.
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// One-call logging setup for a talentpool binary: an env-filtered fmt
/// subscriber writing to stdout, or to daily-rotated files when
/// `TP_LOG_DIR` is set, plus a panic hook that reports panics through the
/// subscriber. `RUST_LOG` controls filtering; the default is `info`.
/// Calling it more than once is a no-op.
pub fn init(app_name: &'static str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match log_dir() {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, format!("{app_name}.log"));
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = FILE_GUARD.set(guard);
            fmt.with_writer(writer).try_init()
        }
        None => fmt.try_init(),
    };

    if result.is_ok() {
        report_panics(app_name);
    }
}

fn log_dir() -> Option<PathBuf> {
    let dir = PathBuf::from(std::env::var_os("TP_LOG_DIR")?);
    match std::fs::create_dir_all(&dir) {
        Ok(()) => Some(dir),
        Err(err) => {
            eprintln!(
                "could not create TP_LOG_DIR {}: {err}; logging to stdout",
                dir.display()
            );
            None
        }
    }
}

fn report_panics(app_name: &'static str) {
    panic::set_hook(Box::new(move |info| {
        let message = if let Some(s) = info.payload().downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };

        let location = info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());

        tracing::error!(application = app_name, %location, panic = %message, "panic");
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init("tp-test");
        init("tp-test");
    }
}
