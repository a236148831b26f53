// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! EntityMeta derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! entity.rs (orchestrator)
//! │
//! ├── parse/       → Attribute parsing (EntityDef, FieldDef, ColumnConfig)
//! │
//! └── declare.rs   → impl DeclareMetadata (registry add calls)
//! ```
//!
//! # Generated Code
//!
//! For a struct like:
//!
//! ```rust,ignore
//! #[derive(EntityMeta)]
//! #[entity(table = "users")]
//! pub struct User {
//!     #[column(primary)]
//!     pub id: Uuid,
//! }
//! ```
//!
//! The macro generates:
//!
//! ```rust,ignore
//! impl ::entity_meta::DeclareMetadata for User {
//!     fn declare(registry: &mut ::entity_meta::MetadataArgsRegistry) {
//!         let target = ::entity_meta::Target::of::<Self>();
//!         registry.add_table(::entity_meta::TableArgs::new(target).with_name("users"));
//!         registry.add_column(
//!             ::entity_meta::RawColumnArgs::new(target, "id")
//!                 .with_mode(::entity_meta::ColumnMode::Primary)
//!                 .with_property_type("Uuid")
//!         );
//!     }
//! }
//! ```

mod declare;
pub mod parse;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use self::parse::EntityDef;

/// Main entry point for the EntityMeta derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match EntityDef::from_derive_input(&input) {
        Ok(entity) => declare::generate(&entity).into(),
        Err(err) => err.write_errors().into()
    }
}
