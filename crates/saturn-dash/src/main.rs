//! Saturn dashboard - main entry point

use anyhow::Result;
use clap::Parser;
use saturn_charts::PlottersRenderer;
use saturn_common::{init_logging, Config, HttpCsvSource};
use saturn_dash::pipeline;
use tracing::info;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Override the data base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Override the chart output directory
    #[arg(long)]
    out_dir: Option<String>,

    /// Log level
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(base_url) = args.base_url {
        config.data.base_url = base_url;
    }
    if let Some(out_dir) = args.out_dir {
        config.output.dir = out_dir;
    }
    if let Some(log_level) = args.log_level {
        config.logging.level = log_level;
    }

    init_logging(&config.logging.level).map_err(|e| anyhow::anyhow!(e))?;
    info!("fetching Saturn data from {}", config.data.base_url);

    let source = HttpCsvSource::new(&config.data)?;
    let renderer = PlottersRenderer::new(
        &config.output.dir,
        config.output.width,
        config.output.height,
    );

    pipeline::run_pipeline(&source, &renderer).await?;
    info!("charts written to {}", config.output.dir);
    Ok(())
}
