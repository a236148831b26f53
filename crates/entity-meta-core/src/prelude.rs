// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust
//! use entity_meta_core::prelude::*;
//! ```

pub use crate::{
    BuilderConfig, ColumnMetadata, ColumnMode, ColumnOptions, DeclareMetadata, EntityMetadata,
    MetadataArgsRegistry, MetadataBuilder, MetadataError, NamingConvention, NamingStrategy,
    RawColumnArgs, Target
};
