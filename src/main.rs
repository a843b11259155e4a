//! artsea binary entrypoint kept minimal. The full runtime lives in `artsea::app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

use artsea::{app, args, theme};

struct ArtseaTimer;

impl tracing_subscriber::fmt::time::FormatTime for ArtseaTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S").to_string();
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the global tracing subscriber.
///
/// Inputs:
/// - `level`: Default filter used when `RUST_LOG` is unset
/// - `to_stderr`: Log to stderr instead of the log file (print mode)
///
/// Details:
/// - The TUI owns the terminal, so interactive runs log to `~/.config/artsea/logs/artsea.log`;
///   stderr is the fallback when the file cannot be opened.
fn init_logging(level: &str, to_stderr: bool) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let log_path = theme::logs_dir().join("artsea.log");
    let file = if to_stderr {
        None
    } else {
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
        {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("artsea: failed to open {}: {e}", log_path.display());
                None
            }
        }
    };
    if let Some(file) = file {
        let (non_blocking, guard) = tracing_appender::non_blocking(file);
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_target(false)
            .with_ansi(false)
            .with_writer(non_blocking)
            .with_timer(ArtseaTimer)
            .init();
        let _ = LOG_GUARD.set(guard);
        tracing::info!(path = %log_path.display(), "logging initialized");
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_target(false)
            .with_ansi(false)
            .with_writer(std::io::stderr)
            .with_timer(ArtseaTimer)
            .init();
    }
}

#[tokio::main]
async fn main() {
    let args = args::Args::parse();
    init_logging(&args::determine_log_level(&args), args.print);

    let mut settings = theme::settings();
    args.apply_to_settings(&mut settings);
    let options = app::StartOptions {
        search: args.search.clone(),
        filters: args.filter_selection(),
        page: args.page,
        direct_id: args.id,
    };
    tracing::info!(
        view = settings.default_view.as_str(),
        print = args.print,
        "artsea starting"
    );

    let result = if args.print {
        app::run_print(settings, options).await
    } else {
        app::run(settings, options).await
    };
    if let Err(err) = result {
        tracing::error!(error = %err, "application error");
        eprintln!("artsea: {err}");
        std::process::exit(1);
    }
    tracing::info!("artsea exited");
}
