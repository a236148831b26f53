// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Semantic role of a column.
//!
//! A column has exactly one [`ColumnMode`]. Special roles such as primary
//! key or version counter are variants of a single enum, so a column can
//! never be both a primary key and a timestamp.
//!
//! | Mode | Canonical name | Meaning |
//! |------|----------------|---------|
//! | [`Regular`](ColumnMode::Regular) | `regular` | Plain mapped column |
//! | [`Virtual`](ColumnMode::Virtual) | `virtual` | Not mapped to storage |
//! | [`Primary`](ColumnMode::Primary) | `primary` | Part of the primary key |
//! | [`CreateDate`](ColumnMode::CreateDate) | `createDate` | Set on insert |
//! | [`UpdateDate`](ColumnMode::UpdateDate) | `updateDate` | Set on every update |
//! | [`Version`](ColumnMode::Version) | `version` | Incremented on update |
//! | [`TreeChildrenCount`](ColumnMode::TreeChildrenCount) | `treeChildrenCount` | Tree node child count |
//! | [`TreeLevel`](ColumnMode::TreeLevel) | `treeLevel` | Tree node depth |

use std::{fmt, str::FromStr};

use crate::error::ConfigError;

/// Kind of column. Not a storage type, but the role the column plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColumnMode {
    /// Plain column.
    #[default]
    Regular,

    /// Column that is not mapped to storage.
    Virtual,

    /// Primary key column.
    Primary,

    /// Creation timestamp, written once on insert.
    CreateDate,

    /// Update timestamp, rewritten on every update.
    UpdateDate,

    /// Optimistic-locking version counter.
    Version,

    /// Number of children of a tree node.
    TreeChildrenCount,

    /// Depth of a tree node.
    TreeLevel
}

impl ColumnMode {
    /// Every mode, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Regular,
        Self::Virtual,
        Self::Primary,
        Self::CreateDate,
        Self::UpdateDate,
        Self::Version,
        Self::TreeChildrenCount,
        Self::TreeLevel
    ];

    /// Canonical name of the mode.
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

    /// Check if this is the primary key mode.
    #[must_use]
    pub const fn is_primary(&self) -> bool {
        matches!(self, Self::Primary)
    }

    /// Check if this is the creation timestamp mode.
    #[must_use]
    pub const fn is_create_date(&self) -> bool {
        matches!(self, Self::CreateDate)
    }

    /// Check if this is the update timestamp mode.
    #[must_use]
    pub const fn is_update_date(&self) -> bool {
        matches!(self, Self::UpdateDate)
    }

    /// Check if this is the version counter mode.
    #[must_use]
    pub const fn is_version(&self) -> bool {
        matches!(self, Self::Version)
    }

    /// Check if this is the virtual mode.
    #[must_use]
    pub const fn is_virtual(&self) -> bool {
        matches!(self, Self::Virtual)
    }

    /// Check if this is the tree children count mode.
    #[must_use]
    pub const fn is_tree_children_count(&self) -> bool {
        matches!(self, Self::TreeChildrenCount)
    }

    /// Check if this is the tree level mode.
    #[must_use]
    pub const fn is_tree_level(&self) -> bool {
        matches!(self, Self::TreeLevel)
    }
}

impl fmt::Display for ColumnMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnMode {
    type Err = ConfigError;

    /// Parse a mode from its canonical name or its snake_case spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(Self::Regular),
            "virtual" => Ok(Self::Virtual),
            "primary" => Ok(Self::Primary),
            "createDate" | "create_date" => Ok(Self::CreateDate),
            "updateDate" | "update_date" => Ok(Self::UpdateDate),
            "version" => Ok(Self::Version),
            "treeChildrenCount" | "tree_children_count" => Ok(Self::TreeChildrenCount),
            "treeLevel" | "tree_level" => Ok(Self::TreeLevel),
            other => Err(ConfigError::UnknownColumnMode(other.to_string()))
        }
    }
}
