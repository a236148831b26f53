// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # entity-meta
//!
//! One crate, all features. Re-exports:
//! - [`EntityMeta`] derive macro from `entity-meta-derive-impl`
//! - All types from `entity-meta-core` ([`MetadataArgsRegistry`],
//!   [`MetadataBuilder`], [`ColumnMetadata`], [`NamingStrategy`])
//!
//! # Quick Start
//!
//! ```rust
//! use entity_meta::{EntityMeta, MetadataArgsRegistry, MetadataBuilder, NamingConvention, Target};
//!
//! #[derive(EntityMeta)]
//! #[entity(table = "users")]
//! pub struct User {
//!     #[column(primary, generated)]
//!     pub id: i64,
//!
//!     #[column(unique, length = 320)]
//!     pub email_address: String,
//!
//!     #[column(create_date, name = "created")]
//!     pub created_at: u64
//! }
//!
//! let mut registry = MetadataArgsRegistry::new();
//! registry.declare::<User>();
//!
//! let user = MetadataBuilder::new(&registry)
//!     .with_naming_strategy(NamingConvention::Camel.strategy())
//!     .build_entity(Target::of::<User>())
//!     .unwrap();
//!
//! assert_eq!(user.table_name(), "users");
//! let names: Vec<_> = user.columns().iter().map(|c| c.name().into_owned()).collect();
//! assert_eq!(names, ["id", "emailAddress", "created"]);
//! assert!(user.columns()[0].is_primary());
//! assert_eq!(user.columns()[1].property_type(), Some("string"));
//! ```

pub use entity_meta_core::*;
pub use entity_meta_derive_impl::EntityMeta;
