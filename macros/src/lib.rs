//! Proc macros for devosfera.
//!
//! # Config derive macro
//!
//! Generates field path accessors and a commented TOML template.
//!
//! ```ignore
//! /// Site-wide settings.
//! #[derive(Config, Serialize, Deserialize)]
//! #[serde(rename_all = "camelCase")]
//! #[config(section = "site")]
//! pub struct SiteSettings {
//!     /// Site title.
//!     pub title: String,
//!
//!     /// Items on the home page.
//!     pub post_per_index: u32,
//!
//!     /// Edit link settings.
//!     #[config(sub)]
//!     pub edit_post: EditPostConfig,
//! }
//!
//! // Generates:
//! // - SiteSettings::FIELDS.post_per_index -> FieldPath("site.postPerIndex")
//! // - SiteSettings::template() -> TOML body with comments
//! // - SiteSettings::template_with_header() -> with [site] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path
//! - `#[serde(rename_all = "...")]` - honoured when naming TOML keys
//!
//! Field-level:
//! - `#[config(skip)]` / `#[serde(skip)]` - Skip from FIELDS and template
//! - `#[config(sub)]` - Nested config section, emitted after plain keys
//! - `#[config(name = "x")]` / `#[serde(rename = "x")]` - Custom TOML key
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `IconsConfig` → `icons`
//! - `SiteSettings` → `site`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
