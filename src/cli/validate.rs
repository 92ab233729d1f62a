//! `validate` command: report every config problem at once.

use anyhow::Result;

use crate::cli::ValidateArgs;
use crate::config::{ConfigDiagnostics, ConfigError, SiteConfig};
use crate::log;

/// Diagnostics for `config`, with errors demoted under `--warn-only`.
pub fn collect(config: &SiteConfig, args: &ValidateArgs) -> ConfigDiagnostics {
    let mut diag = config.diagnose();
    if args.warn_only {
        diag.demote_errors();
    }
    diag
}

pub fn validate_site(config: &SiteConfig, args: &ValidateArgs) -> Result<()> {
    let diag = collect(config, args);
    diag.print_warnings();
    diag.into_result().map_err(ConfigError::Diagnostics)?;

    let links = config.links();
    log!(
        "validate";
        "'{}' ok: {} identity links, {} share links",
        config.site.title,
        links.identity().len(),
        links.share().len()
    );
    Ok(())
}
