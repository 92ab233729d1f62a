//! Attribute parsing helpers for Config derive macro.

use syn::{Attribute, Lit, Meta, meta::ParseNestedMeta};

/// Get section name from #[config(section = "xxx")].
pub fn get_section(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "config", "section")
}

/// Get custom field name from #[config(name = "xxx")].
pub fn get_custom_name(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "config", "name")
}

/// Get serde field rename from #[serde(rename = "xxx")].
pub fn get_serde_rename(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "serde", "rename")
}

/// Get serde container casing from #[serde(rename_all = "xxx")].
pub fn get_rename_all(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "serde", "rename_all")
}

/// Get string value from #[<namespace>(key = "value")].
fn get_string_attr(attrs: &[Attribute], namespace: &str, key: &str) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident(namespace) {
            continue;
        }
        let mut value = None;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) && meta.input.peek(syn::Token![=]) {
                let lit: syn::LitStr = meta.value()?.parse()?;
                value = Some(lit.value());
                return Ok(());
            }
            skip_meta_value(&meta)
        });
        if value.is_some() {
            return value;
        }
    }
    None
}

/// Check if attribute has a flag like #[config(skip)] or #[serde(skip)].
pub fn has_attr(attrs: &[Attribute], namespace: &str, key: &str) -> bool {
    for attr in attrs {
        if !attr.path().is_ident(namespace) {
            continue;
        }
        let mut found = false;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) && !meta.input.peek(syn::Token![=]) {
                found = true;
            }
            skip_meta_value(&meta)
        });
        if found {
            return true;
        }
    }
    false
}

/// Consume `= value` or `(...)` after a meta key we are not interested in.
fn skip_meta_value(meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
    if meta.input.peek(syn::Token![=]) {
        let _: Lit = meta.value()?.parse()?;
    } else if meta.input.peek(syn::token::Paren) {
        let _: proc_macro2::TokenTree = meta.input.parse()?;
    }
    Ok(())
}

/// Extract doc comment from #[doc = "..."] attributes.
pub fn extract_doc_comment(attrs: &[Attribute]) -> Option<String> {
    let docs: Vec<String> = attrs
        .iter()
        .filter_map(|attr| {
            if !attr.path().is_ident("doc") {
                return None;
            }
            if let Meta::NameValue(nv) = &attr.meta
                && let syn::Expr::Lit(expr_lit) = &nv.value
                && let Lit::Str(s) = &expr_lit.lit
            {
                return Some(s.value());
            }
            None
        })
        .collect();

    if docs.is_empty() {
        None
    } else {
        Some(docs.join("\n").trim().to_string())
    }
}
