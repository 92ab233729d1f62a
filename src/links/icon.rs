//! Icon references and their resolution.
//!
//! A link only names its icon. Turning that name into something
//! renderable belongs to the asset pipeline, modelled here as
//! [`IconResolver`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Opaque reference to an icon asset, e.g. `IconGitHub`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(String);

impl IconRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// A usable reference is a bare asset name: non-empty, no path parts.
    pub fn is_well_formed(&self) -> bool {
        !self.0.is_empty()
            && !self.0.contains(['/', '\\'])
            && !self.0.starts_with('.')
    }
}

impl From<&str> for IconRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves icon references into assets the renderer can load.
pub trait IconResolver {
    /// Location of the asset, or `None` if it does not exist.
    fn resolve(&self, icon: &IconRef) -> Option<PathBuf>;
}

/// Icons stored as `<dir>/<name>.<extension>` files.
#[derive(Debug, Clone)]
pub struct IconDir {
    dir: PathBuf,
    extension: String,
}

impl IconDir {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Expected asset path, whether or not it exists.
    pub fn path_for(&self, icon: &IconRef) -> PathBuf {
        self.dir.join(format!("{}.{}", icon.name(), self.extension))
    }

    pub fn exists(&self) -> bool {
        self.dir.is_dir()
    }
}

impl IconResolver for IconDir {
    fn resolve(&self, icon: &IconRef) -> Option<PathBuf> {
        if !icon.is_well_formed() {
            return None;
        }
        let path = self.path_for(icon);
        path.is_file().then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_icon_dir_resolves_existing_svg() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("IconGitHub.svg"), "<svg/>").unwrap();

        let icons = IconDir::new(temp.path(), "svg");
        assert_eq!(
            icons.resolve(&IconRef::from("IconGitHub")),
            Some(temp.path().join("IconGitHub.svg"))
        );
        assert_eq!(icons.resolve(&IconRef::from("IconTelegram")), None);
    }

    #[test]
    fn test_dotted_name_keeps_every_segment() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Icon.v2.svg"), "<svg/>").unwrap();

        let icons = IconDir::new(temp.path(), "svg");
        let icon = IconRef::from("Icon.v2");
        assert!(icon.is_well_formed());
        assert_eq!(icons.path_for(&icon), temp.path().join("Icon.v2.svg"));
        assert_eq!(icons.resolve(&icon), Some(temp.path().join("Icon.v2.svg")));
    }

    #[test]
    fn test_malformed_refs_never_resolve() {
        let temp = TempDir::new().unwrap();
        let icons = IconDir::new(temp.path(), "svg");
        assert!(!IconRef::from("../secret").is_well_formed());
        assert!(!IconRef::from("").is_well_formed());
        assert_eq!(icons.resolve(&IconRef::from("../secret")), None);
    }

    #[test]
    fn test_serialized_as_plain_name() {
        let json = serde_json::to_string(&IconRef::from("IconMail")).unwrap();
        assert_eq!(json, "\"IconMail\"");
    }
}
