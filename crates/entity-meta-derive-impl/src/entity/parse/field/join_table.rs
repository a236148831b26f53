// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Junction table declaration parsing.
//!
//! ```rust,ignore
//! #[join_table(
//!     name = "post_tags",
//!     join_column = "post_id",
//!     referenced_column = "id",
//!     inverse_join_column = "tag_id",
//!     inverse_referenced_column = "id"
//! )]
//! pub tags: Vec<Tag>,
//! ```
//!
//! All keys are optional; `#[join_table]` alone declares a junction table
//! whose names are left to downstream layers.

use syn::{Attribute, LitStr, Meta};

/// Junction table declaration parsed from `#[join_table(...)]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinTableConfig {
    /// Junction table name.
    pub name: Option<String>,

    /// Owning side column.
    pub join_column: Option<String>,

    /// Column referenced by the owning side.
    pub referenced_column: Option<String>,

    /// Inverse side column.
    pub inverse_join_column: Option<String>,

    /// Column referenced by the inverse side.
    pub inverse_referenced_column: Option<String>
}

impl JoinTableConfig {
    /// Parse from a `#[join_table]` or `#[join_table(...)]` attribute.
    ///
    /// # Errors
    ///
    /// Returns error for unknown keys and non-string values.
    pub fn from_attr(attr: &Attribute) -> syn::Result<Self> {
        let mut config = Self::default();

        match &attr.meta {
            Meta::Path(_) => {}
            Meta::List(meta_list) => {
                meta_list.parse_nested_meta(|meta| {
                    let slot = if meta.path.is_ident("name") {
                        &mut config.name
                    } else if meta.path.is_ident("join_column") {
                        &mut config.join_column
                    } else if meta.path.is_ident("referenced_column") {
                        &mut config.referenced_column
                    } else if meta.path.is_ident("inverse_join_column") {
                        &mut config.inverse_join_column
                    } else if meta.path.is_ident("inverse_referenced_column") {
                        &mut config.inverse_referenced_column
                    } else {
                        return Err(meta.error("unknown join_table attribute"));
                    };

                    let _: syn::Token![=] = meta.input.parse()?;
                    let value: LitStr = meta.input.parse()?;
                    *slot = Some(value.value());
                    Ok(())
                })?;
            }
            Meta::NameValue(_) => {
                return Err(syn::Error::new_spanned(
                    attr,
                    "expected #[join_table] or #[join_table(...)]"
                ));
            }
        }

        Ok(config)
    }

    /// Check if the owning side column carries any option.
    #[must_use]
    pub fn has_join_column(&self) -> bool {
        self.join_column.is_some() || self.referenced_column.is_some()
    }

    /// Check if the inverse side column carries any option.
    #[must_use]
    pub fn has_inverse_join_column(&self) -> bool {
        self.inverse_join_column.is_some() || self.inverse_referenced_column.is_some()
    }
}
