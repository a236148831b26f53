// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types.
//!
//! Registry insertion and column construction never fail. Errors only come
//! from building an entity graph out of conflicting declarations, from the
//! opt-in validation pass, and from parsing configuration values.

use thiserror::Error;

use crate::{property::Target, validate::ValidationIssue};

/// Error raised while building metadata from the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    /// The same member was declared more than once on one structure.
    #[error("property `{property}` of `{target}` is declared {count} times as {kind}")]
    DuplicateProperty {
        /// Owning structure.
        target:   Target,
        /// Member declared more than once.
        property: String,
        /// Which collection holds the duplicates (`column`, `join table`).
        kind:     &'static str,
        /// Number of declarations found.
        count:    usize
    },

    /// Table declarations of one structure disagree on a value.
    #[error("table {key} of `{target}` is declared with conflicting values: {}", .values.join(", "))]
    ConflictingTable {
        /// Owning structure.
        target: Target,
        /// Which table setting disagrees (`name`, `schema`).
        key:    &'static str,
        /// Distinct declared values, sorted.
        values: Vec<String>
    },

    /// The resolved entity violates one or more cross-field invariants.
    #[error("invalid metadata for `{target}`: {}", join_issues(.issues))]
    Invalid {
        /// Owning structure.
        target: Target,
        /// Every violation found, in column order.
        issues: Vec<ValidationIssue>
    }
}

impl MetadataError {
    /// Structure the error is about.
    #[must_use]
    pub const fn target(&self) -> Target {
        match self {
            Self::DuplicateProperty {
                target, ..
            }
            | Self::ConflictingTable {
                target, ..
            }
            | Self::Invalid {
                target, ..
            } => *target
        }
    }
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Error raised while parsing configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Naming convention name not recognised.
    #[error("unknown naming convention `{0}`")]
    UnknownNamingConvention(String),

    /// Column mode name not recognised.
    #[error("unknown column mode `{0}`")]
    UnknownColumnMode(String),

    /// Boolean setting with a value that is not a boolean.
    #[error("invalid boolean `{value}` for `{key}`")]
    InvalidFlag {
        /// Setting name.
        key:   &'static str,
        /// Offending value.
        value: String
    }
}
