use anyhow::Result;
use clap::Parser;

use backend_bootstrap::telemetry::{init_tracing, LogOptions};

#[derive(Parser, Debug)]
#[command(name = "tnt-backend")]
#[command(about = "Tracking event dispatcher", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Write logs to a daily rolling file in this directory as well as stdout
    #[arg(long)]
    log_dir: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = init_tracing(&LogOptions {
        json: args.log_json,
        log_dir: args.log_dir.clone(),
    });

    if let Some(config) = args.config {
        std::env::set_var("TNT_CONFIG", config);
    }

    backend_bootstrap::run().await
}
