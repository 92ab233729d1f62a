//! Configuration file generation.
//!
//! Writes a commented `devosfera.toml` holding the built-in settings.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::config::{IconsConfig, SiteSettings};
use crate::links::{LinkEntry, TITLE_PLACEHOLDER, default_share_links, default_socials};
use crate::log;

/// Generate devosfera.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# Devosfera configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));

    // [site] with [site.editPost] and [site.introAudio]
    out.push_str(&SiteSettings::template_with_header());
    out.push('\n');

    // [icons] section
    out.push_str(&IconsConfig::template_with_header());
    out.push('\n');

    out.push_str(&format!(
        "# Author identity links, in display order.\n# {TITLE_PLACEHOLDER} in linkTitle is replaced by the site title.\n"
    ));
    push_links(&mut out, "socials", &default_socials());

    out.push_str("# Post share links; the post URL is appended to href.\n");
    push_links(&mut out, "shareLinks", &default_share_links());

    out
}

/// Append `[[key]]` tables for `entries`.
fn push_links(out: &mut String, key: &str, entries: &[LinkEntry]) {
    let quote = |s: &str| toml::Value::String(s.to_string()).to_string();
    for entry in entries {
        out.push_str(&format!("[[{key}]]\n"));
        out.push_str(&format!("name = {}\n", quote(&entry.name)));
        out.push_str(&format!("href = {}\n", quote(&entry.href)));
        out.push_str(&format!("linkTitle = {}\n", quote(&entry.link_title)));
        out.push_str(&format!("icon = {}\n\n", quote(entry.icon.name())));
    }
}

/// Write the default config to `path`.
///
/// An existing file is only replaced with `force`.
pub fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "'{}' already exists, use --force to overwrite",
            path.display()
        );
    }

    fs::write(path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))
}

/// `init` command.
pub fn new_config(config_path: &Path, dry_run: bool, force: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    write_config(config_path, force)?;
    log!("init"; "wrote {}", config_path.display());
    Ok(())
}
