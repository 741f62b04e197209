mod error;
mod generate;
mod icon;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use generate::DEFAULT_SIZES;

#[derive(Parser)]
#[command(
    name = "extension-icons",
    version,
    about = "Generate the PNG icon set for the browser extension"
)]
struct Cli {
    /// Output directory for icons
    #[arg(short, long, default_value = "icons")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("extension_icons=info".parse()?);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    match generate::run(&cli.output, &DEFAULT_SIZES) {
        Ok(written) => {
            info!(
                "All {} icons generated successfully in {}/",
                written.len(),
                cli.output.display()
            );
            Ok(())
        }
        Err(e) => {
            error!("Error generating icons: {}", e);
            Err(e).with_context(|| format!("icon generation into {} failed", cli.output.display()))
        }
    }
}
