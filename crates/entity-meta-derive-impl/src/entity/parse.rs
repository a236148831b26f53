// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the EntityMeta derive macro.
//!
//! Struct-level `#[entity(...)]` is parsed with [`darling`]. Field-level
//! `#[column(...)]` and `#[join_table(...)]` are parsed by hand with
//! `parse_nested_meta`, since they mix bare flags, `key = bool` and
//! literals of several kinds.
//!
//! # Architecture
//!
//! ```text
//! parse.rs (coordinator)
//! ├── entity/          - Struct-level parsing (EntityDef, EntityAttrs)
//! └── field.rs         - Field-level parsing (FieldDef)
//!     ├── column.rs     - #[column(...)] (ColumnConfig)
//!     ├── mode.rs       - Column mode names (ModeDef)
//!     └── join_table.rs - #[join_table(...)] (JoinTableConfig)
//! ```
//!
//! # Data Structures
//!
//! ```text
//! EntityDef
//! ├── ident: Ident             (struct name, e.g., "User")
//! ├── generics: Generics
//! ├── table: Option<String>
//! ├── schema: Option<String>
//! ├── doc_comments: bool
//! ├── all_fields: bool
//! └── fields: Vec<FieldDef>
//!     └── FieldDef
//!         ├── ident: Ident
//!         ├── ty: Type
//!         ├── doc: Option<String>              (first doc line)
//!         ├── column: Option<ColumnConfig>
//!         └── join_table: Option<JoinTableConfig>
//! ```
//!
//! # Errors
//!
//! Every error carries the span of the offending tokens and surfaces as a
//! `compile_error!` through [`darling::Error::write_errors`].

mod entity;
mod field;

pub use entity::EntityDef;
pub use field::{ColumnConfig, FieldDef, JoinTableConfig, ModeDef};
