//! Template generation code for Config derive macro.

use proc_macro2::TokenStream;
use quote::quote;

use crate::config::field::FieldInfo;

/// Generate template code (TokenStream) for fields.
///
/// Plain keys are emitted before nested sections: once a `[section]`
/// header is written every following key belongs to it.
pub fn generate_template_code(fields: &[&FieldInfo]) -> TokenStream {
    let plain = fields
        .iter()
        .filter(|f| !f.sub)
        .map(|f| generate_field_template_code(f));
    let subs = fields
        .iter()
        .filter(|f| f.sub)
        .map(|f| generate_sub_template_code(f));

    quote! {
        #(#plain)*
        #(#subs)*
    }
}

/// Doc comment lines as TOML comments.
fn doc_code(info: &FieldInfo) -> TokenStream {
    match info.doc {
        Some(ref doc) => {
            let doc_str: String = doc.lines().map(|l| format!("# {}\n", l.trim())).collect();
            quote! { out.push_str(#doc_str); }
        }
        None => quote! {},
    }
}

/// Nested section: delegate to the field type's own template.
fn generate_sub_template_code(info: &FieldInfo) -> TokenStream {
    let field_ty = &info.ty;
    quote! {
        out.push('\n');
        out.push_str(&<#field_ty>::template_with_header());
    }
}

/// Generate TOML template code for a single key.
fn generate_field_template_code(info: &FieldInfo) -> TokenStream {
    let field_name = &info.name;
    let toml_name = &info.toml_name;
    let doc_code = doc_code(info);

    quote! {
        #doc_code
        out.push_str(#toml_name);
        out.push_str(" = ");
        out.push_str(&toml::Value::try_from(default.#field_name.clone())
            .map(|v| v.to_string())
            .unwrap_or_default());
        out.push('\n');
    }
}
