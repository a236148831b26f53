// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Doc comment extraction.
//!
//! Doc comments (`///` and `/** */`) reach the macro as `#[doc = "..."]`
//! attributes. With `#[entity(doc_comments)]`, the first non-empty line of a
//! field's docs becomes the column comment:
//!
//! ```rust,ignore
//! #[derive(EntityMeta)]
//! #[entity(doc_comments)]
//! pub struct User {
//!     /// Login handle.
//!     ///
//!     /// Unique per tenant.
//!     #[column]
//!     pub login: String,
//! }
//!
//! // column comment: "Login handle."
//! ```

use syn::Attribute;

/// Combine every `#[doc = "..."]` attribute into one trimmed string.
///
/// Returns `None` when there are no doc comments, or only blank ones.
pub fn extract_doc_comments(attrs: &[Attribute]) -> Option<String> {
    let lines: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| {
            if let syn::Meta::NameValue(meta) = &attr.meta
                && let syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(lit_str),
                    ..
                }) = &meta.value
            {
                return Some(lit_str.value().trim().to_string());
            }
            None
        })
        .collect();

    let combined = lines.join("\n");
    let trimmed = combined.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// First non-empty doc line.
pub fn extract_doc_summary(attrs: &[Attribute]) -> Option<String> {
    extract_doc_comments(attrs).and_then(|docs| {
        docs.lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string)
    })
}
