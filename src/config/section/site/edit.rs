//! `[site.editPost]` configuration.
//!
//! # Example
//!
//! ```toml
//! [site.editPost]
//! enabled = true
//! text = "Editar este post"
//! url = "https://github.com/0xdres/astro-devosfera/edit/main/"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::util::{require_non_empty, validate_http_url};

/// "Edit this post" link shown under each post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "site.editPost")]
pub struct EditPostConfig {
    /// Show the edit link.
    pub enabled: bool,

    /// Link text.
    pub text: String,

    /// Base URL; the post path is appended to it.
    pub url: String,
}

impl Default for EditPostConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            text: "Editar este post".into(),
            url: "https://github.com/0xdres/astro-devosfera/edit/main/".into(),
        }
    }
}

impl EditPostConfig {
    /// Edit URL for a post path relative to the repository root.
    ///
    /// Exactly one `/` separates base and path regardless of how either
    /// side is written. `None` when the link is disabled.
    pub fn edit_url(&self, post_path: &str) -> Option<String> {
        if !self.enabled {
            return None;
        }
        let base = self.url.trim_end_matches('/');
        let path = post_path.trim_start_matches('/');
        Some(format!("{base}/{path}"))
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enabled {
            return;
        }

        require_non_empty(&self.text, Self::FIELDS.text, diag);

        if !require_non_empty(&self.url, Self::FIELDS.url, diag) {
            return;
        }
        let errors_before = diag.len();
        validate_http_url(&self.url, Self::FIELDS.url, diag);
        if diag.len() == errors_before && !self.url.ends_with('/') {
            diag.error_with_hint(
                Self::FIELDS.url,
                "must end with '/' so post paths can be appended",
                format!("use \"{}/\"", self.url),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_url_joins_with_single_slash() {
        let edit = EditPostConfig::default();
        let expected = "https://github.com/0xdres/astro-devosfera/edit/main/src/data/blog/hola.md";
        assert_eq!(edit.edit_url("src/data/blog/hola.md").as_deref(), Some(expected));
        assert_eq!(edit.edit_url("/src/data/blog/hola.md").as_deref(), Some(expected));
    }

    #[test]
    fn test_edit_url_disabled() {
        let edit = EditPostConfig {
            enabled: false,
            ..Default::default()
        };
        assert_eq!(edit.edit_url("src/data/blog/hola.md"), None);
    }

    #[test]
    fn test_validate_requires_trailing_slash() {
        let edit = EditPostConfig {
            url: "https://github.com/0xdres/astro-devosfera/edit/main".into(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        edit.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site.editPost.url");
    }

    #[test]
    fn test_validate_skipped_when_disabled() {
        let edit = EditPostConfig {
            enabled: false,
            text: String::new(),
            url: "not a url".into(),
        };
        let mut diag = ConfigDiagnostics::new();
        edit.validate(&mut diag);
        assert!(diag.is_empty());
    }
}
