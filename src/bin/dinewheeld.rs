//! dinewheel server binary

use anyhow::Result;
use clap::Parser;

use dinewheel::config::AppConfig;
use dinewheel::server::ServerBuilder;

#[derive(Parser)]
#[command(name = "dinewheeld", about = "Restaurant list and random picker server")]
struct Args {
    /// Path to the YAML configuration file (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = match args.config.as_deref() {
        Some(path) => AppConfig::from_yaml_file(path)?,
        None => AppConfig::default(),
    };

    ServerBuilder::new().with_config(config).serve().await
}
