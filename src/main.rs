use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::error;

use itemdb_gen::config::Config;
use itemdb_gen::constants::DEFAULT_CONFIG_PATH;
use itemdb_gen::idempotency::WriteOutcome;
use itemdb_gen::logging;
use itemdb_gen::pipeline::Pipeline;

#[derive(Parser)]
#[command(name = "itemdb_gen")]
#[command(about = "Generate the game item registry script from tab-delimited item sheets")]
#[command(version = "0.1.0")]
struct Cli {
    /// Configuration file; built-in source list and paths are used if it does not exist
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;

    let result = match Pipeline::run(&config) {
        Ok(result) => result,
        Err(e) => {
            error!("Pipeline failed: {}", e);
            return Err(e).context("item registry generation failed");
        }
    };

    match &result.outcome {
        WriteOutcome::Written { .. } => println!("\n✅ Item registry generated!"),
        WriteOutcome::Unchanged { .. } => println!("\n✅ Item registry unchanged"),
    }
    println!("   📁 {}", result.output_file.display());
    println!("   📊 {} items", result.total_items);

    Ok(())
}
