//! CLI entry point for the shuttle API fetcher.
//!
//! `stops` prints the parsed stop list, `routes` prints the raw routes
//! payload. Data goes to stdout, logs to stderr and, when `LOG_FILE_PATH`
//! is set, a rolling JSON file.

use anyhow::Result;
use clap::{Parser, Subcommand};
use shuttle_fetch::config::Config;
use shuttle_fetch::fetch::BasicClient;
use shuttle_fetch::output::{OutputFormat, write_routes, write_stops};
use shuttle_fetch::{routes, stops};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "shuttle_fetch")]
#[command(about = "Fetch stops and routes from the RPI shuttle tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and print the shuttle stops
    Stops {
        /// URL or saved response file (defaults to the configured stops URL)
        #[arg(value_name = "FILE_OR_URL")]
        source: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Fetch and print the raw routes payload
    Routes {
        /// URL or saved response file (defaults to the configured routes URL)
        #[arg(value_name = "FILE_OR_URL")]
        source: Option<String>,

        /// Pretty-print the JSON
        #[arg(short, long, default_value_t = false)]
        pretty: bool,
    },
    /// Build typed route records (not implemented yet; always fails)
    GetRoutes,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    // The JSON log file is opt-in so a plain run writes nothing but stdout.
    let (json_layer, _file_guard) = match std::env::var("LOG_FILE_PATH") {
        Ok(log_file_path) => {
            let log_dir = Path::new(&log_file_path)
                .parent()
                .unwrap_or(Path::new("logs"));
            let log_file_name = Path::new(&log_file_path)
                .file_name()
                .unwrap_or(OsStr::new("shuttle_fetch.log"));

            let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
            let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(non_blocking_file)
                .with_filter(
                    EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?),
                );
            (Some(layer), Some(file_guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let client = match config.timeout {
        Some(timeout) => BasicClient::with_timeout(timeout)?,
        None => BasicClient::new(),
    };

    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Stops { source, format } => {
            let source = source.unwrap_or(config.stops_url);
            let stops = stops::run(&client, &source).await?;
            write_stops(&mut stdout, &stops, format)?;
        }
        Commands::Routes { source, pretty } => {
            let source = source.unwrap_or(config.routes_url);
            let data = routes::run(&client, &source).await?;
            write_routes(&mut stdout, &data, pretty)?;
        }
        Commands::GetRoutes => {
            info!("Requesting typed routes");
            let never = routes::get_routes()?;
            match never {}
        }
    }

    Ok(())
}
