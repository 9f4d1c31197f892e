use std::path::Path;

use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_FILE_PREFIX: &str = "tnt-backend.log";

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub json: bool,
    pub log_dir: Option<String>,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Stdout logging, plus a daily rolling file when a directory is given.
///
/// The guard must outlive every log call or buffered file output is lost.
pub fn build_subscriber(
    options: &LogOptions,
) -> (impl Subscriber + Send + Sync + 'static, Option<WorkerGuard>) {
    let json = options.json;
    let (file_writer, guard) = match &options.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(Path::new(dir), LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    let stdout_text = (!json).then(fmt::layer);
    let stdout_json = json.then(|| fmt::layer().json());
    let file_text = file_writer
        .clone()
        .filter(|_| !json)
        .map(|writer| fmt::layer().with_writer(writer).with_ansi(false));
    let file_json = file_writer
        .filter(|_| json)
        .map(|writer| fmt::layer().json().with_writer(writer).with_ansi(false));

    let subscriber = tracing_subscriber::registry()
        .with(env_filter())
        .with(stdout_text)
        .with(stdout_json)
        .with(file_text)
        .with(file_json);
    (subscriber, guard)
}

pub fn init_tracing(options: &LogOptions) -> Option<WorkerGuard> {
    let (subscriber, guard) = build_subscriber(options);
    subscriber.init();
    guard
}
