//! Link entries as configured, and the descriptors built from them.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use super::icon::IconRef;
use crate::config::section::SiteSettings;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Placeholder in `linkTitle` replaced by the site title.
pub const TITLE_PLACEHOLDER: &str = "{title}";

/// Characters left unescaped in a share target (as `encodeURIComponent`).
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Which directory a link belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Author/site profiles, fixed destinations.
    Identity,
    /// Per-post share actions, target appended at render time.
    Share,
}

impl LinkKind {
    /// Config key of the collection.
    pub const fn collection(&self) -> &'static str {
        match self {
            Self::Identity => "socials",
            Self::Share => "shareLinks",
        }
    }
}

/// A link as written in `[[socials]]` / `[[shareLinks]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkEntry {
    pub name: String,
    pub href: String,
    /// May contain `{title}`.
    pub link_title: String,
    pub icon: IconRef,
}

/// A link ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkDescriptor {
    pub name: String,
    pub href: String,
    pub link_title: String,
    pub icon: IconRef,
}

impl LinkEntry {
    pub fn new(name: &str, href: &str, link_title: &str, icon: &str) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            link_title: link_title.into(),
            icon: icon.into(),
        }
    }

    /// Interpolate the site title; every other field is copied verbatim.
    pub fn resolve(&self, site: &SiteSettings) -> LinkDescriptor {
        LinkDescriptor {
            name: self.name.clone(),
            href: self.href.clone(),
            link_title: self.link_title.replace(TITLE_PLACEHOLDER, &site.title),
            icon: self.icon.clone(),
        }
    }

    /// Check one entry of `kind` at position `index`.
    pub fn validate(&self, kind: LinkKind, index: usize, diag: &mut ConfigDiagnostics) {
        let field = |key: &str| FieldPath::item(kind.collection(), index, key);

        if self.name.trim().is_empty() {
            diag.error(field("name"), "must not be empty");
        }

        if self.link_title.trim().is_empty() {
            diag.error(field("linkTitle"), "must not be empty");
        } else if self.link_title.replace(TITLE_PLACEHOLDER, "").contains(['{', '}']) {
            diag.error_with_hint(
                field("linkTitle"),
                format!("unknown placeholder in '{}'", self.link_title),
                format!("only {TITLE_PLACEHOLDER} is substituted"),
            );
        }

        if !self.icon.is_well_formed() {
            diag.error_with_hint(
                field("icon"),
                format!("'{}' is not an icon name", self.icon),
                "use the asset name without directory or extension, e.g. \"IconGitHub\"",
            );
        }

        self.validate_href(kind, field("href"), diag);
    }

    fn validate_href(&self, kind: LinkKind, field: FieldPath, diag: &mut ConfigDiagnostics) {
        if self.href.trim().is_empty() {
            diag.error(field, "must not be empty");
            return;
        }
        if let Err(e) = url::Url::parse(&self.href) {
            diag.error(field, format!("invalid URL: {e}"));
            return;
        }
        if kind == LinkKind::Share && !self.href.ends_with('=') {
            diag.error_with_hint(
                field,
                "share link must end with '=' so the post URL can be appended",
                "e.g. \"https://t.me/share/url?url=\"",
            );
        }
    }
}

impl LinkDescriptor {
    /// Share URL for `target`, escaped as a query value.
    ///
    /// `href` itself is left as configured.
    pub fn share_url(&self, target: &str) -> String {
        format!("{}{}", self.href, utf8_percent_encode(target, QUERY_VALUE))
    }
}
