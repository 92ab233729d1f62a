//! Config field path.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// A dotted path to a config key, e.g. `site.postPerPage`.
///
/// Static paths come from `#[derive(Config)]`:
///
/// ```ignore
/// diag.error(SiteSettings::FIELDS.post_per_page, "must be greater than 0");
/// ```
///
/// Array items use [`FieldPath::item`], e.g. `shareLinks[2].href`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Path computed at runtime (e.g. an unknown key reported by the parser).
    pub fn owned(path: impl Into<String>) -> Self {
        Self(Cow::Owned(path.into()))
    }

    /// Path to a key inside an array-of-tables entry.
    pub fn item(collection: &str, index: usize, key: &str) -> Self {
        Self(Cow::Owned(format!("{collection}[{index}].{key}")))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
