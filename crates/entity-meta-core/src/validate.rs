// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Cross-field checks over resolved columns.
//!
//! Resolution itself accepts anything. This pass is opt-in, either through
//! [`BuilderConfig::strict`](crate::BuilderConfig) or by calling
//! [`EntityMetadata::validate`](crate::EntityMetadata::validate).
//!
//! # Checks
//!
//! | Issue | Condition |
//! |-------|-----------|
//! | [`ScaleExceedsPrecision`](ValidationIssue::ScaleExceedsPrecision) | `scale > precision` |
//! | [`ScaleWithoutPrecision`](ValidationIssue::ScaleWithoutPrecision) | scale declared, precision not |
//! | [`DuplicateColumnName`](ValidationIssue::DuplicateColumnName) | two columns resolve to one name |
//! | [`MultipleSpecialColumns`](ValidationIssue::MultipleSpecialColumns) | more than one create date, update date or version column |
//!
//! Several primary columns are a composite key and are accepted. Issues are
//! collected, not fail-fast, and reported in an order that does not depend
//! on declaration order.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::{column::ColumnMetadata, mode::ColumnMode};

/// Modes that may appear at most once per structure.
const SINGLETON_MODES: [ColumnMode; 3] =
    [ColumnMode::CreateDate, ColumnMode::UpdateDate, ColumnMode::Version];

/// One violated invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    /// Scale larger than precision.
    #[error("column `{property}`: scale {scale} exceeds precision {precision}")]
    ScaleExceedsPrecision {
        /// Member name.
        property:  String,
        /// Declared precision.
        precision: u32,
        /// Declared scale.
        scale:     u32
    },

    /// Scale declared without a precision.
    #[error("column `{property}`: scale {scale} declared without precision")]
    ScaleWithoutPrecision {
        /// Member name.
        property: String,
        /// Declared scale.
        scale:    u32
    },

    /// Several members resolve to the same column name.
    #[error("column name `{name}` is used by {}", .properties.join(", "))]
    DuplicateColumnName {
        /// Resolved column name.
        name:       String,
        /// Members sharing it, sorted.
        properties: Vec<String>
    },

    /// A mode that must be unique appears on several members.
    #[error("more than one {mode} column: {}", .properties.join(", "))]
    MultipleSpecialColumns {
        /// Offending mode.
        mode:       ColumnMode,
        /// Members carrying it, sorted.
        properties: Vec<String>
    }
}

/// Check every invariant over one structure's columns.
#[must_use]
pub fn validate_columns(columns: &[ColumnMetadata]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let mut sorted: Vec<&ColumnMetadata> = columns.iter().collect();
    sorted.sort_by(|a, b| a.property_name().cmp(b.property_name()));

    for column in &sorted {
        check_precision(column, &mut issues);
    }

    check_duplicate_names(&sorted, &mut issues);
    check_singleton_modes(&sorted, &mut issues);

    issues
}

fn check_precision(column: &ColumnMetadata, issues: &mut Vec<ValidationIssue>) {
    match (column.precision(), column.scale()) {
        (Some(precision), Some(scale)) if scale > precision => {
            issues.push(ValidationIssue::ScaleExceedsPrecision {
                property: column.property_name().to_string(),
                precision,
                scale
            });
        }
        (None, Some(scale)) => {
            issues.push(ValidationIssue::ScaleWithoutPrecision {
                property: column.property_name().to_string(),
                scale
            });
        }
        _ => {}
    }
}

fn check_duplicate_names(columns: &[&ColumnMetadata], issues: &mut Vec<ValidationIssue>) {
    let mut by_name: BTreeMap<String, Vec<String>> = BTreeMap::new();

    // virtual columns have no storage name to collide on
    for column in columns.iter().filter(|column| !column.is_virtual()) {
        by_name
            .entry(column.name().into_owned())
            .or_default()
            .push(column.property_name().to_string());
    }

    for (name, properties) in by_name {
        if properties.len() > 1 {
            issues.push(ValidationIssue::DuplicateColumnName {
                name,
                properties
            });
        }
    }
}

fn check_singleton_modes(columns: &[&ColumnMetadata], issues: &mut Vec<ValidationIssue>) {
    for mode in SINGLETON_MODES {
        let properties: Vec<String> = columns
            .iter()
            .filter(|column| column.mode() == mode)
            .map(|column| column.property_name().to_string())
            .collect();

        if properties.len() > 1 {
            issues.push(ValidationIssue::MultipleSpecialColumns {
                mode,
                properties
            });
        }
    }
}
