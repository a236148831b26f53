// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Struct-level parsing and the [`EntityDef`] consumed by the generator.
//!
//! # Module Structure
//!
//! ```text
//! entity/
//! ├── mod.rs   — EntityDef definition and parsing
//! ├── attrs.rs — EntityAttrs (darling parsing struct)
//! └── tests.rs
//! ```

mod attrs;
#[cfg(test)]
mod tests;

pub use attrs::EntityAttrs;
use darling::FromDeriveInput;
use syn::{DeriveInput, Generics, Ident};

use super::field::{ColumnConfig, FieldDef};

/// Parsed struct definition.
#[derive(Debug)]
pub struct EntityDef {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics.
    pub generics: Generics,

    /// Explicit table name from `#[entity(table = "...")]`.
    pub table: Option<String>,

    /// Storage schema from `#[entity(schema = "...")]`.
    pub schema: Option<String>,

    /// Whether doc summaries fill in missing comments.
    pub doc_comments: bool,

    /// Whether fields without `#[column]` are registered.
    pub all_fields: bool,

    /// Every named field, in declaration order.
    pub fields: Vec<FieldDef>
}

impl EntityDef {
    /// Parse the struct and all of its fields.
    ///
    /// Field errors are accumulated so that every bad attribute is reported
    /// in one compilation.
    ///
    /// # Errors
    ///
    /// Returns error for non-struct input, tuple structs, unknown keys or
    /// conflicting column modes.
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let named = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => &named.named,
                _ => {
                    return Err(darling::Error::custom("EntityMeta requires named fields")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(
                    darling::Error::custom("EntityMeta can only be derived for structs")
                        .with_span(&input.ident)
                );
            }
        };

        let attrs = EntityAttrs::from_derive_input(input)?;

        let mut errors = darling::Error::accumulator();
        let fields: Vec<FieldDef> = named
            .iter()
            .filter_map(|field| errors.handle(FieldDef::from_field(field)))
            .collect();
        errors.finish()?;

        Ok(Self {
            ident: attrs.ident,
            generics: attrs.generics,
            table: attrs.table,
            schema: attrs.schema,
            doc_comments: attrs.doc_comments,
            all_fields: attrs.all_fields,
            fields
        })
    }

    /// Get the struct name.
    #[must_use]
    pub fn name(&self) -> &Ident {
        &self.ident
    }

    /// Fields registered as columns, with the configuration to emit.
    ///
    /// A field is registered when it carries `#[column]` without `skip`, or
    /// when `all_fields` is set and the field is neither skipped nor a
    /// junction table. With `doc_comments`, a missing comment is taken from
    /// the field's doc summary.
    #[must_use]
    pub fn columns(&self) -> Vec<(&FieldDef, ColumnConfig)> {
        self.fields
            .iter()
            .filter_map(|field| {
                let mut config = match &field.column {
                    Some(config) if config.skip => return None,
                    Some(config) => config.clone(),
                    None if self.all_fields && field.join_table.is_none() => {
                        ColumnConfig::default()
                    }
                    None => return None
                };
                if self.doc_comments && config.comment.is_none() {
                    config.comment = field.doc.clone();
                }
                Some((field, config))
            })
            .collect()
    }

    /// Fields carrying `#[join_table]`.
    pub fn join_table_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|field| field.join_table.is_some())
    }
}
