//! Devosfera - site settings and link directories for the devosfera blog.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use devosfera::cli::{self, Cli, Commands};
use devosfera::config::{SiteConfig, init_config};
use devosfera::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { dry, force } => cli::init::new_config(&cli.config, *dry, *force),
        Commands::Validate { args } => {
            let config = init_config(SiteConfig::load(&cli.config)?);
            cli::validate::validate_site(&config, args)
        }
        Commands::Export { args } => {
            let config = init_config(SiteConfig::load(&cli.config)?);
            config.validate()?;
            cli::export::export_site(&config, args)
        }
    }
}
