use std::path::PathBuf;

use clap::Parser;

/// edgebar: auto-hiding main bar and sidebars, driven headlessly against a
/// simulated desktop.
#[derive(Parser, Debug)]
#[command(name = "edgebar", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error) or a full
    /// filter directive.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Keep the main bar pinned regardless of the config file.
    #[arg(long)]
    pub no_auto_hide: bool,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,

    /// Simulated screen width in pixels.
    #[arg(long, default_value_t = 1920)]
    pub width: i32,

    /// Simulated screen height in pixels.
    #[arg(long, default_value_t = 1080)]
    pub height: i32,
}

impl Args {
    /// The `tracing` filter directive for `--log-level`, if given.
    ///
    /// Bare level names are scoped to the edgebar crates.
    pub fn log_directive(&self) -> Option<String> {
        let level = self.log_level.as_deref()?;
        match level {
            "trace" | "debug" | "info" | "warn" | "error" => Some(format!("edgebar={level}")),
            other => Some(other.to_string()),
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
