mod cli;
mod demo;

use edgebar_common::types::ScreenRect;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = cli::parse();

    // Config comes first so its log level can seed the filter.
    let loaded = edgebar_config::load_config(args.config.as_deref());
    let mut config = loaded.as_ref().cloned().unwrap_or_default();
    if args.no_auto_hide {
        config.behavior.auto_hide = false;
    }

    let log_directive = args
        .log_directive()
        .unwrap_or_else(|| config.logging.level.directive().to_string());
    let filter = match log_directive.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::new("edgebar=info"),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("edgebar v{} starting...", env!("CARGO_PKG_VERSION"));
    match &loaded {
        Ok(_) => tracing::info!(auto_hide = config.behavior.auto_hide, "config loaded"),
        Err(e) => tracing::warn!("Config load failed, using defaults: {e}"),
    }

    if args.print_config {
        println!("{}", edgebar_config::config_to_json(&config));
        return;
    }

    let screen = ScreenRect::new(0, 0, args.width, args.height);
    if screen.is_empty() {
        tracing::error!(width = args.width, height = args.height, "screen size must be positive");
        return;
    }

    if let Err(e) = demo::run(&config, screen).await {
        tracing::error!("demo failed: {e}");
    }
    tracing::info!("Shutdown complete");
}
