// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! Proc-macro implementation of `#[derive(EntityMeta)]`.
//!
//! Internal crate. Use `entity-meta`, which re-exports the derive next to
//! the runtime types the generated code refers to.
//!
//! # Attribute Quick Reference
//!
//! ## Struct-Level `#[entity(...)]`
//!
//! ```rust,ignore
//! #[derive(EntityMeta)]
//! #[entity(
//!     table = "users",   // Optional: explicit table name
//!     schema = "auth",   // Optional: storage schema
//!     doc_comments,      // Optional: field doc summary becomes the comment
//!     all_fields         // Optional: register every field as a column
//! )]
//! pub struct User { /* ... */ }
//! ```
//!
//! ## Field-Level Attributes
//!
//! ```rust,ignore
//! pub struct User {
//!     #[column(primary, generated)]
//!     pub id: i64,
//!
//!     #[column(name = "email_address", length = 320, unique)]
//!     pub email: String,
//!
//!     #[column(nullable, comment = "Shown on the profile page")]
//!     pub bio: Option<String>,
//!
//!     #[column(create_date)]
//!     pub created_at: DateTime<Utc>,
//!
//!     #[column(mode = "virtual")]
//!     pub post_count: i64,
//!
//!     #[join_table(name = "user_roles", join_column = "user_id")]
//!     pub roles: Vec<Role>,
//! }
//! ```

mod entity;
mod utils;

use proc_macro::TokenStream;

/// Derive registry declarations for a struct.
///
/// Implements `DeclareMetadata`: one table declaration, one column
/// declaration per `#[column]` field and one junction table declaration per
/// `#[join_table]` field, each added to the registry in field order.
///
/// # Column Attributes
///
/// | Key | Value | Effect |
/// |-----|-------|--------|
/// | `name` | string | Explicit column name, bypasses naming strategy |
/// | `sql_type` | string | Storage type |
/// | `length` | string or integer | Length qualifier |
/// | `generated` | flag or bool | Auto-increment |
/// | `unique` | flag or bool | Uniqueness |
/// | `nullable` | flag or bool | Nullability |
/// | `definition` | string | Storage definition override |
/// | `comment` | string | Column comment |
/// | `old_name` | string | Previous column name |
/// | `precision` | integer | Numeric precision |
/// | `scale` | integer | Numeric scale |
/// | `collation` | string | Collation |
/// | `mode` | string | Any mode by name, e.g. `"virtual"` |
/// | `primary`, `create_date`, `update_date`, `version`, `tree_children_count`, `tree_level` | flag | Mode shorthands |
/// | `skip` | flag | Do not register the field |
///
/// At most one mode per field. Unknown keys are rejected.
///
/// # Join Table Attributes
///
/// | Key | Effect |
/// |-----|--------|
/// | `name` | Junction table name |
/// | `join_column` | Owning side column |
/// | `referenced_column` | Column referenced by `join_column` |
/// | `inverse_join_column` | Inverse side column |
/// | `inverse_referenced_column` | Column referenced by `inverse_join_column` |
///
/// A `#[join_table]` field cannot also carry `#[column]`.
///
/// # Example
///
/// ```rust,ignore
/// use entity_meta::{EntityMeta, MetadataArgsRegistry, MetadataBuilder, Target};
///
/// #[derive(EntityMeta)]
/// #[entity(table = "posts")]
/// pub struct Post {
///     #[column(primary)]
///     pub id: u64,
///     #[column]
///     pub title: String,
/// }
///
/// let mut registry = MetadataArgsRegistry::new();
/// registry.declare::<Post>();
/// let post = MetadataBuilder::new(&registry).build_entity(Target::of::<Post>())?;
/// ```
#[proc_macro_derive(EntityMeta, attributes(entity, column, join_table))]
pub fn derive_entity_meta(input: TokenStream) -> TokenStream {
    entity::derive(input)
}
