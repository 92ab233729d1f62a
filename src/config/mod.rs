//! Site configuration management for `devosfera.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── icons      # [icons]
//! │   └── site/      # [site], [site.editPost], [site.introAudio]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section            | Purpose                                          |
//! |--------------------|--------------------------------------------------|
//! | `[site]`           | Site settings record (title, author, toggles...) |
//! | `[[socials]]`      | Author identity links                            |
//! | `[[shareLinks]]`   | Post share links                                 |
//! | `[icons]`          | Icon asset directory                             |
//!
//! Every section is optional; omitted ones keep the built-in values.

pub mod section;
pub mod types;
mod util;

pub use util::find_config_file;

// Re-export from section/
pub use section::{
    EditPostConfig, IconsConfig, IntroAudioConfig, MAX_SCHEDULED_MARGIN, ScheduleState,
    SiteSettings, TextDirection,
};

// Re-export from types/
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config, reload_config,
};

use crate::links::{
    IconResolver, LinkDirectories, LinkEntry, LinkKind, default_share_links, default_socials,
};
use crate::utils::hash;
use crate::{debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config filename
pub const CONFIG_FILE: &str = "devosfera.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing devosfera.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site settings record
    #[serde(default)]
    pub site: SiteSettings,

    /// Identity links, in display order
    #[serde(default = "default_socials")]
    pub socials: Vec<LinkEntry>,

    /// Share links, in display order
    #[serde(default = "default_share_links")]
    pub share_links: Vec<LinkEntry>,

    /// Icon asset location
    #[serde(default)]
    pub icons: IconsConfig,

    /// Keys present in the file but not understood (internal use only)
    #[serde(skip)]
    unknown_fields: Vec<String>,

    /// Link directories composed from the fields above (internal use only)
    #[serde(skip)]
    links: LinkDirectories,

    /// Hash of the file content this config was parsed from (internal use only)
    #[serde(skip)]
    content_hash: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let mut config = Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            site: SiteSettings::default(),
            socials: default_socials(),
            share_links: default_share_links(),
            icons: IconsConfig::default(),
            unknown_fields: Vec::new(),
            links: LinkDirectories::default(),
            content_hash: 0,
        };
        config.compose_links();
        config
    }
}

impl SiteConfig {
    /// Load configuration for the CLI.
    ///
    /// Searches upward from cwd for `config_name`. Without a config file
    /// the built-in site is used, rooted at cwd.
    pub fn load(config_name: &Path) -> Result<Self> {
        match find_config_file(config_name) {
            Some(path) => {
                debug!("config"; "loading {}", path.display());
                Self::from_path(&path)
            }
            None => {
                log!("warning"; "'{}' not found, using built-in settings", config_name.display());
                let cwd = std::env::current_dir().context("Failed to get current working directory")?;
                let mut config = Self::default();
                config.set_root(&cwd);
                Ok(config)
            }
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let (mut config, unknown_fields) = Self::parse_with_ignored(content)?;
        config.unknown_fields = unknown_fields;
        config.compose_links();
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_file_content(path, &content)
    }

    /// Build from `content` already read from `path`.
    pub(crate) fn from_file_content(path: &Path, content: &str) -> Result<Self> {
        let mut config = Self::from_str(content)
            .with_context(|| format!("Failed to parse '{}'", path.display()))?;
        config.content_hash = hash::compute(content);

        let path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        config.config_path = path;
        config.set_root(&root);
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    fn compose_links(&mut self) {
        self.links = LinkDirectories::compose(&self.site, &self.socials, &self.share_links);
    }

    /// Identity and share links with the site title interpolated.
    #[inline]
    pub fn links(&self) -> &LinkDirectories {
        &self.links
    }

    /// Keys in the file that no section understands.
    pub fn unknown_fields(&self) -> &[String] {
        &self.unknown_fields
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Entries of one link collection as configured.
    pub fn entries(&self, kind: LinkKind) -> &[LinkEntry] {
        match kind {
            LinkKind::Identity => &self.socials,
            LinkKind::Share => &self.share_links,
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Collect every error and warning without failing.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        for field in &self.unknown_fields {
            diag.warn(FieldPath::owned(field.clone()), "unknown field, ignored");
        }

        self.site.validate(&mut diag);

        for kind in [LinkKind::Identity, LinkKind::Share] {
            for (index, entry) in self.entries(kind).iter().enumerate() {
                entry.validate(kind, index, &mut diag);
            }
        }

        self.check_icons(&mut diag);
        diag
    }

    /// Warn about icons the asset directory cannot provide.
    fn check_icons(&self, diag: &mut ConfigDiagnostics) {
        let resolver = self.icons.resolver(&self.root);
        if !resolver.exists() {
            diag.warn(
                IconsConfig::FIELDS.dir,
                format!("icon directory '{}' not found", resolver.dir().display()),
            );
            return;
        }

        for kind in [LinkKind::Identity, LinkKind::Share] {
            for (index, entry) in self.entries(kind).iter().enumerate() {
                if entry.icon.is_well_formed() && resolver.resolve(&entry.icon).is_none() {
                    diag.warn(
                        FieldPath::item(kind.collection(), index, "icon"),
                        format!(
                            "icon '{}' not found at '{}'",
                            entry.icon,
                            resolver.path_for(&entry.icon).display()
                        ),
                    );
                }
            }
        }
    }

    /// Validate configuration.
    ///
    /// Prints warnings and returns all collected errors at once.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnose();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(SiteConfig::from_str("[site\ntitle = \"Devosfera\"").is_err());
    }

    #[test]
    fn test_empty_file_is_builtin_site() {
        let config = SiteConfig::from_str("").unwrap();
        assert_eq!(config.site, SiteSettings::default());
        assert_eq!(config.links().identity().len(), 4);
        assert_eq!(config.links().share().len(), 6);
        assert_eq!(config.links(), SiteConfig::default().links());
    }

    #[test]
    fn test_site_title_flows_into_links() {
        let config = SiteConfig::from_str("[site]\ntitle = \"Mi Blog\"").unwrap();
        assert_eq!(config.links().identity()[0].link_title, "Mi Blog en GitHub");
        assert_eq!(config.links().identity()[3].link_title, "Envia un correo a Mi Blog");
    }

    #[test]
    fn test_configured_links_replace_builtin() {
        let content = r#"
[[socials]]
name = "Mastodon"
href = "https://mastodon.social/@devosfera"
linkTitle = "{title} en Mastodon"
icon = "IconMastodon"

[[shareLinks]]
name = "X"
href = "https://x.com/intent/post?url="
linkTitle = "Comparte este post en X"
icon = "IconBrandX"
"#;
        let config = SiteConfig::from_str(content).unwrap();
        let identity = config.links().identity();
        assert_eq!(identity.len(), 1);
        assert_eq!(identity[0].link_title, "Devosfera en Mastodon");
        assert_eq!(config.links().share().len(), 1);
        assert!(config.unknown_fields().is_empty());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\nsubtitle = \"x\"\n[unknown_section]\nfield = \"value\"";
        let config = SiteConfig::from_str(content).unwrap();

        assert_eq!(config.site.title, "Test");
        let unknown = config.unknown_fields();
        assert!(unknown.iter().any(|f| f == "site.subtitle"));
        assert!(unknown.iter().any(|f| f.contains("unknown_section")));

        let diag = config.diagnose();
        assert!(diag.is_empty());
        assert!(diag.warnings().iter().any(|w| w.field.as_str() == "site.subtitle"));
    }

    #[test]
    fn test_invalid_direction_is_parse_error() {
        assert!(SiteConfig::from_str("[site]\ndir = \"sideways\"").is_err());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let content = r#"
[site]
postPerIndex = 0
postPerPage = 0

[site.introAudio]
enabled = true
duration = 0

[[shareLinks]]
name = "Telegram"
href = "https://t.me/share/url"
linkTitle = "Comparte este post por Telegram"
icon = "IconTelegram"
"#;
        let config = SiteConfig::from_str(content).unwrap();
        let diag = config.diagnose();
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            [
                "site.postPerIndex",
                "site.postPerPage",
                "site.introAudio.duration",
                "shareLinks[0].href"
            ]
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_path_sets_root_and_checks_icons() {
        let temp = TempDir::new().unwrap();
        let icons = temp.path().join("src/assets/icons");
        fs::create_dir_all(&icons).unwrap();
        for name in ["IconGitHub", "IconBrandX", "IconLinkedin"] {
            fs::write(icons.join(format!("{name}.svg")), "<svg/>").unwrap();
        }
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "[site]\ntitle = \"Devosfera\"\n").unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.get_root(), temp.path().canonicalize().unwrap());

        let diag = config.diagnose();
        assert!(diag.is_empty());
        let missing: Vec<_> = diag.warnings().iter().map(|w| w.field.as_str()).collect();
        assert_eq!(
            missing,
            [
                "socials[3].icon",
                "shareLinks[0].icon",
                "shareLinks[1].icon",
                "shareLinks[3].icon",
                "shareLinks[4].icon",
                "shareLinks[5].icon"
            ]
        );
    }

    #[test]
    fn test_missing_icon_dir_is_single_warning() {
        let mut config = SiteConfig::default();
        let temp = TempDir::new().unwrap();
        config.set_root(temp.path());

        let diag = config.diagnose();
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.warnings()[0].field.as_str(), "icons.dir");
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = SiteConfig::from_path(Path::new("/definitely/not/here/devosfera.toml"))
            .unwrap_err();
        assert!(err.to_string().contains("IO error"));
    }
}
