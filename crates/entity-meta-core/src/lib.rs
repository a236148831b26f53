// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core types for entity-meta.
//!
//! Declarations describing how struct members map to table columns are
//! collected into a [`MetadataArgsRegistry`], then resolved by a
//! [`MetadataBuilder`] into [`EntityMetadata`] graphs that downstream schema
//! and query layers read.
//!
//! # Architecture
//!
//! ```text
//! #[derive(EntityMeta)] / manual calls
//!            │
//!            ▼
//! ┌────────────────────────┐
//! │  MetadataArgsRegistry  │  tables · columns · join_tables
//! └───────────┬────────────┘
//!             │ filter_by_target
//!             ▼
//! ┌────────────────────────┐      ┌────────────────┐
//! │    MetadataBuilder     │◄─────│ NamingStrategy │
//! └───────────┬────────────┘      └────────────────┘
//!             ▼
//!      EntityMetadata
//!       └─ ColumnMetadata*
//! ```
//!
//! # Overview
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`RawColumnArgs`] | Unresolved column declaration |
//! | [`MetadataArgsRegistry`] | Store of every declaration |
//! | [`ColumnMetadata`] | Resolved column with defaults applied |
//! | [`EntityMetadata`] | Resolved structure |
//! | [`NamingStrategy`] | Derives column and table names |
//! | [`BuilderConfig`] | Naming convention and strict mode |
//!
//! # Usage
//!
//! Most users should use `entity-meta`, which re-exports this crate along
//! with the derive. Manual declarations work the same way:
//!
//! ```rust
//! use entity_meta_core::prelude::*;
//!
//! struct Account;
//!
//! let mut registry = MetadataArgsRegistry::new();
//! registry.add_column(
//!     RawColumnArgs::new(Target::of::<Account>(), "id")
//!         .with_mode(ColumnMode::Primary)
//!         .with_property_type("Uuid")
//! );
//!
//! let account = MetadataBuilder::new(&registry)
//!     .build_entity(Target::of::<Account>())
//!     .unwrap();
//! let id = &account.columns()[0];
//! assert!(id.is_primary());
//! assert_eq!(id.property_type(), Some("uuid"));
//! assert!(!id.is_nullable());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod args;
pub mod builder;
pub mod column;
pub mod config;
pub mod entity;
pub mod error;
pub mod mode;
pub mod naming;
pub mod prelude;
pub mod property;
pub mod registry;
pub mod validate;

pub use args::{
    ColumnOptions, JoinColumnOptions, JoinTableArgs, JoinTableOptions, RawColumnArgs, TableArgs
};
pub use builder::MetadataBuilder;
pub use column::ColumnMetadata;
pub use config::BuilderConfig;
pub use entity::EntityMetadata;
pub use error::{ConfigError, MetadataError};
pub use mode::ColumnMode;
pub use naming::{
    ConventionNamingStrategy, DefaultNamingStrategy, NamingConvention, NamingStrategy,
    SharedNamingStrategy
};
pub use property::{PropertyArgs, PropertyRef, Target, TargetedArgs};
pub use registry::{ArgsCollection, DeclareMetadata, MetadataArgsRegistry};
pub use validate::ValidationIssue;
