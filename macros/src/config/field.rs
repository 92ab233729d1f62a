//! Field information structures and parsing.

use syn::Type;

use crate::config::attr::{extract_doc_comment, get_custom_name, get_serde_rename, has_attr};
use crate::config::types::apply_rename_all;

/// Parsed field information.
pub struct FieldInfo {
    pub name: syn::Ident,
    pub toml_name: String,
    pub doc: Option<String>,
    pub skip: bool,
    pub sub: bool,
    pub ty: Type,
}

impl FieldInfo {
    /// Parse field info from a syn::Field.
    ///
    /// Key precedence: `#[config(name)]`, `#[serde(rename)]`, container
    /// `rename_all`, then the Rust identifier.
    pub fn from_field(field: &syn::Field, rename_all: Option<&str>) -> Option<Self> {
        let ident = field.ident.as_ref()?;
        let attrs = &field.attrs;

        let toml_name = get_custom_name(attrs)
            .or_else(|| get_serde_rename(attrs))
            .unwrap_or_else(|| apply_rename_all(&ident.to_string(), rename_all));

        Some(Self {
            name: ident.clone(),
            toml_name,
            doc: extract_doc_comment(attrs),
            skip: has_attr(attrs, "config", "skip") || has_attr(attrs, "serde", "skip"),
            sub: has_attr(attrs, "config", "sub"),
            ty: field.ty.clone(),
        })
    }
}
