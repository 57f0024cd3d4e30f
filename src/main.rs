//! seo-meta command line.

use anyhow::Result;
use clap::Parser;
use seo_meta::cli::render::{run_config, run_render, run_tags};
use seo_meta::cli::{Cli, Command};
use seo_meta::config::{ConfigLoader, ConfigPaths};
use seo_meta::logging::{self, LogTarget};
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&LogTarget::parse(&cli.log), cli.verbose)?;

    let loader = match &cli.config {
        Some(path) => ConfigLoader::load_from(ConfigPaths::discover(), Some(path.into()))?,
        None => ConfigLoader::load()?,
    };
    for (tier, path) in loader.sources() {
        debug!(tier = %tier, path = %path.display(), "Using config");
    }
    let config = loader.into_config();

    let output = match &cli.command {
        Command::Render(args) => run_render(&config, args)?,
        Command::Tags(args) => run_tags(&config, args)?,
        Command::Config => run_config(&config)?,
    };
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }

    Ok(())
}
