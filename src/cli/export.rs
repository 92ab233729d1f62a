//! `export` command: site settings and resolved links for the renderer.

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::io::Write;

use crate::cli::{ExportArgs, ExportFormat};
use crate::config::{SiteConfig, SiteSettings};
use crate::links::LinkDescriptor;
use crate::log;

/// Exported document, keyed the way page templates import it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SiteExport<'a> {
    site: &'a SiteSettings,
    socials: &'a [LinkDescriptor],
    share_links: &'a [LinkDescriptor],
}

impl<'a> SiteExport<'a> {
    fn new(config: &'a SiteConfig) -> Self {
        let links = config.links();
        Self {
            site: &config.site,
            socials: links.identity(),
            share_links: links.share(),
        }
    }
}

/// Serialize `config` in the requested format.
pub fn render(config: &SiteConfig, format: ExportFormat, pretty: bool) -> Result<String> {
    let export = SiteExport::new(config);
    let text = match (format, pretty) {
        (ExportFormat::Json, true) => serde_json::to_string_pretty(&export)?,
        (ExportFormat::Json, false) => serde_json::to_string(&export)?,
        (ExportFormat::Toml, true) => toml::to_string_pretty(&export)?,
        (ExportFormat::Toml, false) => toml::to_string(&export)?,
    };
    Ok(text)
}

pub fn export_site(config: &SiteConfig, args: &ExportArgs) -> Result<()> {
    let text = render(config, args.format, args.pretty)?;

    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", text)?;
        log!("export"; "wrote {}", output_path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}
