use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use nba_gateway::Config;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// NBA statistics gateway
///
/// Serves simplified JSON views of live scoreboards, box scores, play-by-play,
/// player and team statistics and shot charts. Upstream responses are cached
/// in memory with per-category lifetimes (live scores for 30 seconds, season
/// aggregates for hours).
///
/// Settings come from the config file, then environment variables, then the
/// flags below, each overriding the previous.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Address to listen on, e.g. 0.0.0.0:8000
    #[arg(long = "bind", short = 'b', value_name = "ADDR", help_heading = "Server")]
    pub bind: Option<String>,

    /// Timeout in seconds for each upstream request
    #[arg(long = "http-timeout", value_name = "SECONDS", help_heading = "Server")]
    pub http_timeout: Option<u64>,

    /// List current configuration settings and exit
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Write the effective settings (including flags given with this one)
    /// to the config file and exit
    #[arg(long = "save-config", help_heading = "Configuration")]
    pub save_config: bool,

    /// Log at debug level, including per-request spans
    #[arg(long = "debug", help_heading = "Logging")]
    pub debug: bool,

    /// Log only to the log file, not to stdout
    #[arg(long = "quiet", short = 'q', help_heading = "Logging")]
    pub quiet: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Logging")]
    pub log_file: Option<String>,
}

impl Args {
    /// Applies flag values on top of a loaded configuration.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(bind) = &self.bind {
            config.bind_address = bind.clone();
        }
        if let Some(timeout) = self.http_timeout {
            config.http_timeout_seconds = timeout;
        }
        if let Some(log_file) = &self.log_file {
            config.log_file_path = Some(log_file.clone());
        }
    }
}
