// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Naming strategies.
//!
//! A [`NamingStrategy`] derives storage-facing names from member and type
//! names when no explicit name was declared. Implementations must be pure:
//! the same input always yields the same output for one instance.
//!
//! # Built-in Strategies
//!
//! | Strategy | Column `createdAt` | Table `UserProfile` |
//! |----------|--------------------|---------------------|
//! | [`DefaultNamingStrategy`] | `createdAt` | `UserProfile` |
//! | `Snake` convention | `created_at` | `user_profile` |
//! | `Camel` convention | `createdAt` | `userProfile` |
//! | `Pascal` convention | `CreatedAt` | `UserProfile` |
//! | `Kebab` convention | `created-at` | `user-profile` |
//! | `ScreamingSnake` convention | `CREATED_AT` | `USER_PROFILE` |

use std::{fmt, str::FromStr, sync::Arc};

use convert_case::{Case, Casing};

use crate::error::ConfigError;

/// Naming strategy shared by every column of a resolution session.
pub type SharedNamingStrategy = Arc<dyn NamingStrategy>;

/// Derives storage-facing names from declared names.
pub trait NamingStrategy: Send + Sync + fmt::Debug {
    /// Column name for a member without an explicit name.
    fn column_name(&self, property_name: &str) -> String;

    /// Table name for a structure without an explicit table name.
    fn table_name(&self, target_name: &str) -> String {
        target_name.to_string()
    }

    /// Name of the junction table of a many-to-many relation.
    ///
    /// Built from the owning table, the owning property and the inverse
    /// table, each passed through [`column_name`](Self::column_name) /
    /// [`table_name`](Self::table_name) beforehand by the caller.
    fn join_table_name(
        &self,
        first_table: &str,
        second_table: &str,
        first_property: &str
    ) -> String {
        format!("{first_table}_{first_property}_{second_table}")
    }
}

/// Leaves every name unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultNamingStrategy;

impl NamingStrategy for DefaultNamingStrategy {
    fn column_name(&self, property_name: &str) -> String {
        property_name.to_string()
    }
}

/// Case convention applied by [`ConventionNamingStrategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NamingConvention {
    /// Keep names as declared.
    #[default]
    Preserve,

    /// `snake_case`.
    Snake,

    /// `camelCase`.
    Camel,

    /// `PascalCase`.
    Pascal,

    /// `kebab-case`.
    Kebab,

    /// `SCREAMING_SNAKE_CASE`.
    ScreamingSnake
}

impl NamingConvention {
    /// Canonical name of the convention.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Preserve => "preserve",
            Self::Snake => "snake",
            Self::Camel => "camel",
            Self::Pascal => "pascal",
            Self::Kebab => "kebab",
            Self::ScreamingSnake => "screaming_snake"
        }
    }

    /// Apply the convention to one name.
    #[must_use]
    pub fn apply(&self, name: &str) -> String {
        match self {
            Self::Preserve => name.to_string(),
            Self::Snake => name.to_case(Case::Snake),
            Self::Camel => name.to_case(Case::Camel),
            Self::Pascal => name.to_case(Case::Pascal),
            Self::Kebab => name.to_case(Case::Kebab),
            Self::ScreamingSnake => name.to_case(Case::UpperSnake)
        }
    }

    /// Shared strategy implementing this convention.
    ///
    /// `Preserve` yields the [`DefaultNamingStrategy`].
    #[must_use]
    pub fn strategy(self) -> SharedNamingStrategy {
        match self {
            Self::Preserve => Arc::new(DefaultNamingStrategy),
            convention => Arc::new(ConventionNamingStrategy::new(convention))
        }
    }
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamingConvention {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "preserve" => Ok(Self::Preserve),
            "snake" | "snake_case" => Ok(Self::Snake),
            "camel" | "camelcase" | "camel_case" => Ok(Self::Camel),
            "pascal" | "pascalcase" | "pascal_case" => Ok(Self::Pascal),
            "kebab" | "kebab_case" => Ok(Self::Kebab),
            "screaming_snake" | "screaming_snake_case" => Ok(Self::ScreamingSnake),
            _ => Err(ConfigError::UnknownNamingConvention(s.to_string()))
        }
    }
}

/// Applies a [`NamingConvention`] to column, table and join table names.
///
/// # Example
///
/// ```rust
/// use entity_meta_core::{ConventionNamingStrategy, NamingConvention, NamingStrategy};
///
/// let naming = ConventionNamingStrategy::new(NamingConvention::Snake);
/// assert_eq!(naming.column_name("createdAt"), "created_at");
/// assert_eq!(naming.table_name("UserProfile"), "user_profile");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConventionNamingStrategy {
    convention: NamingConvention
}

impl ConventionNamingStrategy {
    /// Create a strategy for the given convention.
    #[must_use]
    pub const fn new(convention: NamingConvention) -> Self {
        Self {
            convention
        }
    }

    /// Convention in use.
    #[must_use]
    pub const fn convention(&self) -> NamingConvention {
        self.convention
    }
}

impl NamingStrategy for ConventionNamingStrategy {
    fn column_name(&self, property_name: &str) -> String {
        self.convention.apply(property_name)
    }

    fn table_name(&self, target_name: &str) -> String {
        self.convention.apply(target_name)
    }

    fn join_table_name(
        &self,
        first_table: &str,
        second_table: &str,
        first_property: &str
    ) -> String {
        let joined = format!("{first_table}_{first_property}_{second_table}");
        self.convention.apply(&joined)
    }
}
