// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Struct-level attribute parsing with darling.
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `table` | No | naming strategy | Table name |
//! | `schema` | No | none | Storage schema |
//! | `doc_comments` | No | `false` | Doc summaries become column comments |
//! | `all_fields` | No | `false` | Register fields without `#[column]` too |

use darling::FromDeriveInput;
use syn::{Generics, Ident};

/// Struct-level attributes parsed from `#[entity(...)]`.
///
/// Internal to parsing; generators read [`EntityDef`](super::EntityDef).
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(entity), supports(struct_named))]
pub struct EntityAttrs {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics, carried into the generated impl.
    pub generics: Generics,

    /// Explicit table name.
    #[darling(default)]
    pub table: Option<String>,

    /// Storage schema.
    #[darling(default)]
    pub schema: Option<String>,

    /// Use each field's doc summary as its column comment.
    #[darling(default)]
    pub doc_comments: bool,

    /// Register every field as a regular column unless skipped.
    #[darling(default)]
    pub all_fields: bool
}
