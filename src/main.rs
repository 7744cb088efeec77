use std::path::PathBuf;

use clap::{ArgAction, Parser};

use addressbook::config::{self, Config, DEFAULT_CONFIG_FILE};

#[derive(Debug, Parser)]
#[command(version, about = "Keep track of contacts and groups from the terminal")]
struct Cli {
    /// Verbosity (-v, -vv, -vvv); overrides the configured log level
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Path to the application config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    let loaded = config::load::<Config>(&cli.config);
    setup_logging(cli.verbose, &loaded.value.log_level);
    loaded.log(&cli.config);
    let config = loaded.value;

    if let Err(e) = addressbook::cli::run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so they never interleave with command feedback.
fn setup_logging(verbosity: u8, configured: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = match verbosity {
        0 => EnvFilter::try_new(configured).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
