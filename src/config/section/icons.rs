//! `[icons]` configuration: where link icon assets live.

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::links::IconDir;

/// Icon assets referenced by `[[socials]]` and `[[shareLinks]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "icons")]
pub struct IconsConfig {
    /// Icon directory, relative to the site root.
    pub dir: PathBuf,

    /// Icon file extension.
    pub extension: String,
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            dir: "src/assets/icons".into(),
            extension: "svg".into(),
        }
    }
}

impl IconsConfig {
    /// Resolver rooted at the site root.
    pub fn resolver(&self, root: &Path) -> IconDir {
        IconDir::new(root.join(&self.dir), self.extension.trim_start_matches('.'))
    }
}
