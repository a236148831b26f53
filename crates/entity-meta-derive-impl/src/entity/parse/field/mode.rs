// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Column mode names.
//!
//! | Mode | `mode = "..."` | Shorthand |
//! |------|----------------|-----------|
//! | Regular | `regular` | — |
//! | Virtual | `virtual` | — |
//! | Primary | `primary` | `primary` |
//! | CreateDate | `createDate`, `create_date` | `create_date` |
//! | UpdateDate | `updateDate`, `update_date` | `update_date` |
//! | Version | `version` | `version` |
//! | TreeChildrenCount | `treeChildrenCount`, `tree_children_count` | `tree_children_count` |
//! | TreeLevel | `treeLevel`, `tree_level` | `tree_level` |

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

/// Column mode as written in `#[column(...)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeDef {
    /// Plain stored column.
    Regular,
    /// Computed, not stored.
    Virtual,
    /// Primary key.
    Primary,
    /// Creation timestamp.
    CreateDate,
    /// Update timestamp.
    UpdateDate,
    /// Version counter.
    Version,
    /// Tree children count.
    TreeChildrenCount,
    /// Tree level.
    TreeLevel
}

impl ModeDef {
    /// Parse a `mode = "..."` value, camelCase or snake_case.
    ///
    /// Returns `None` for unrecognized values.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "regular" => Some(Self::Regular),
            "virtual" => Some(Self::Virtual),
            "primary" => Some(Self::Primary),
            "createDate" | "create_date" => Some(Self::CreateDate),
            "updateDate" | "update_date" => Some(Self::UpdateDate),
            "version" => Some(Self::Version),
            "treeChildrenCount" | "tree_children_count" => Some(Self::TreeChildrenCount),
            "treeLevel" | "tree_level" => Some(Self::TreeLevel),
            _ => None
        }
    }

    /// Mode selected by a bare shorthand key such as `#[column(primary)]`.
    #[must_use]
    pub fn from_shorthand(key: &str) -> Option<Self> {
        match key {
            "primary" => Some(Self::Primary),
            "create_date" => Some(Self::CreateDate),
            "update_date" => Some(Self::UpdateDate),
            "version" => Some(Self::Version),
            "tree_children_count" => Some(Self::TreeChildrenCount),
            "tree_level" => Some(Self::TreeLevel),
            _ => None
        }
    }

    /// Canonical name, used in diagnostics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Virtual => "virtual",
            Self::Primary => "primary",
            Self::CreateDate => "createDate",
            Self::UpdateDate => "updateDate",
            Self::Version => "version",
            Self::TreeChildrenCount => "treeChildrenCount",
            Self::TreeLevel => "treeLevel"
        }
    }
}

impl ToTokens for ModeDef {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let variant = match self {
            Self::Regular => quote!(Regular),
            Self::Virtual => quote!(Virtual),
            Self::Primary => quote!(Primary),
            Self::CreateDate => quote!(CreateDate),
            Self::UpdateDate => quote!(UpdateDate),
            Self::Version => quote!(Version),
            Self::TreeChildrenCount => quote!(TreeChildrenCount),
            Self::TreeLevel => quote!(TreeLevel)
        };
        tokens.extend(quote!(::entity_meta::ColumnMode::#variant));
    }
}
