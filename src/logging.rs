use crate::cli::Args;
use nba_gateway::AppError;
use nba_gateway::Config;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_LOG_FILE_NAME: &str = "nba_gateway.log";

/// Builds the level filter: `RUST_LOG` first, then our crate's default level.
fn build_filter(debug: bool) -> Result<EnvFilter, AppError> {
    let mut directives = vec![if debug {
        "nba_gateway=debug"
    } else {
        "nba_gateway=info"
    }];
    if debug {
        directives.push("tower_http=debug");
    }

    directives
        .into_iter()
        .try_fold(EnvFilter::from_default_env(), |filter, directive| {
            directive
                .parse()
                .map(|d| filter.add_directive(d))
                .map_err(|e| {
                    AppError::log_setup_error(format!("Invalid log directive {directive}: {e}"))
                })
        })
}

/// Splits the configured log path into directory and file name, falling back
/// to the platform log directory.
fn log_location(config: &Config) -> (String, String) {
    match &config.log_file_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path.parent().unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(DEFAULT_LOG_FILE_NAME);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), DEFAULT_LOG_FILE_NAME.to_string()),
    }
}

/// Sets up logging for the server.
///
/// Logs always go to a daily rolling file; stdout gets a copy unless
/// `--quiet` is given.
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args, config: &Config) -> Result<(String, WorkerGuard), AppError> {
    let (log_dir, log_file_name) = log_location(config);

    // Create log directory if it doesn't exist
    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must outlive the server so buffered lines are flushed
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(build_filter(args.debug)?);

    let stdout_layer = if args.quiet {
        None
    } else {
        Some(
            fmt::Layer::new()
                .with_writer(stdout)
                .with_ansi(true)
                .with_filter(build_filter(args.debug)?),
        )
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .map_err(|e| AppError::log_setup_error(format!("Failed to install subscriber: {e}")))?;

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_location() {
        let (dir, file) = log_location(&Config::default());
        assert_eq!(dir, Config::get_log_dir_path());
        assert_eq!(file, DEFAULT_LOG_FILE_NAME);
    }

    #[test]
    fn test_custom_log_location() {
        let config = Config {
            log_file_path: Some("/var/log/gw/access.log".to_string()),
            ..Config::default()
        };
        let (dir, file) = log_location(&config);
        assert_eq!(dir, "/var/log/gw");
        assert_eq!(file, "access.log");
    }

    #[test]
    fn test_filters_build_for_both_levels() {
        assert!(build_filter(false).is_ok());
        assert!(build_filter(true).is_ok());
    }
}
