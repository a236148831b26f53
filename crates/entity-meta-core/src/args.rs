// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Raw declaration payloads.
//!
//! Raw args are captured exactly as declared and stored in the
//! [`MetadataArgsRegistry`](crate::MetadataArgsRegistry). Nothing here is
//! resolved or defaulted: every option is an [`Option`], so "declared as
//! `false`" and "not declared" stay distinguishable.
//!
//! # Collections
//!
//! | Type | One entry per | Produced by |
//! |------|---------------|-------------|
//! | [`TableArgs`] | Declared structure | `#[entity(...)]` |
//! | [`RawColumnArgs`] | Declared column member | `#[column(...)]` |
//! | [`JoinTableArgs`] | Many-to-many relation member | `#[join_table(...)]` |

use crate::{
    mode::ColumnMode,
    property::{PropertyArgs, Target, TargetedArgs}
};

/// Column options as declared.
///
/// Keys that were not declared stay `None`. Unknown keys never reach this
/// struct.
///
/// # Example
///
/// ```rust
/// use entity_meta_core::ColumnOptions;
///
/// let options = ColumnOptions::default()
///     .with_name("user_email")
///     .with_length("255")
///     .with_unique(true);
/// assert_eq!(options.name.as_deref(), Some("user_email"));
/// assert_eq!(options.nullable, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnOptions {
    /// Explicit column name.
    pub name: Option<String>,

    /// Explicit storage type (e.g. `"varchar"`, `"decimal"`).
    pub column_type: Option<String>,

    /// Maximum length in storage. Kept as text (`"255"`, `"max"`).
    pub length: Option<String>,

    /// Auto-increment / generated value.
    pub generated: Option<bool>,

    /// UNIQUE constraint.
    pub unique: Option<bool>,

    /// Column accepts NULL.
    pub nullable: Option<bool>,

    /// Raw storage definition appended to the column.
    pub column_definition: Option<String>,

    /// Column comment.
    pub comment: Option<String>,

    /// Previous column name, used to detect renames.
    pub old_column_name: Option<String>,

    /// Total number of digits of a decimal column.
    pub precision: Option<u32>,

    /// Digits right of the decimal point of a decimal column.
    pub scale: Option<u32>,

    /// Column collation.
    pub collation: Option<String>
}

impl ColumnOptions {
    /// Set the explicit column name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the explicit storage type.
    #[must_use]
    pub fn with_column_type(mut self, column_type: impl Into<String>) -> Self {
        self.column_type = Some(column_type.into());
        self
    }

    /// Set the length.
    #[must_use]
    pub fn with_length(mut self, length: impl Into<String>) -> Self {
        self.length = Some(length.into());
        self
    }

    /// Set the auto-increment flag.
    #[must_use]
    pub const fn with_generated(mut self, generated: bool) -> Self {
        self.generated = Some(generated);
        self
    }

    /// Set the uniqueness flag.
    #[must_use]
    pub const fn with_unique(mut self, unique: bool) -> Self {
        self.unique = Some(unique);
        self
    }

    /// Set the nullability flag.
    #[must_use]
    pub const fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = Some(nullable);
        self
    }

    /// Set the raw storage definition.
    #[must_use]
    pub fn with_column_definition(mut self, definition: impl Into<String>) -> Self {
        self.column_definition = Some(definition.into());
        self
    }

    /// Set the comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Set the previous column name.
    #[must_use]
    pub fn with_old_column_name(mut self, old_name: impl Into<String>) -> Self {
        self.old_column_name = Some(old_name.into());
        self
    }

    /// Set the precision.
    #[must_use]
    pub const fn with_precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Set the scale.
    #[must_use]
    pub const fn with_scale(mut self, scale: u32) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Set the collation.
    #[must_use]
    pub fn with_collation(mut self, collation: impl Into<String>) -> Self {
        self.collation = Some(collation.into());
        self
    }
}

/// One captured column declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawColumnArgs {
    /// Owning structure.
    pub target: Target,

    /// Member name.
    pub property_name: String,

    /// Declared mode. `None` resolves to [`ColumnMode::Regular`].
    pub mode: Option<ColumnMode>,

    /// Reflected member type, as written (e.g. `String`, `DateTime`).
    pub property_type: Option<String>,

    /// Declared options.
    pub options: ColumnOptions
}

impl RawColumnArgs {
    /// Args with no mode, no reflected type and no options.
    #[must_use]
    pub fn new(target: Target, property_name: impl Into<String>) -> Self {
        Self {
            target,
            property_name: property_name.into(),
            mode: None,
            property_type: None,
            options: ColumnOptions::default()
        }
    }

    /// Set the declared mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: ColumnMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set the reflected member type.
    #[must_use]
    pub fn with_property_type(mut self, property_type: impl Into<String>) -> Self {
        self.property_type = Some(property_type.into());
        self
    }

    /// Replace the options.
    #[must_use]
    pub fn with_options(mut self, options: ColumnOptions) -> Self {
        self.options = options;
        self
    }
}

impl TargetedArgs for RawColumnArgs {
    fn target(&self) -> Target {
        self.target
    }
}

impl PropertyArgs for RawColumnArgs {
    fn property_name(&self) -> &str {
        &self.property_name
    }
}

/// One side of a junction table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinColumnOptions {
    /// Column name inside the junction table.
    pub name: Option<String>,

    /// Column of the referenced table.
    pub referenced_column_name: Option<String>
}

/// Options of a many-to-many junction table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinTableOptions {
    /// Junction table name.
    pub name: Option<String>,

    /// Column pointing at the owning side.
    pub join_column: Option<JoinColumnOptions>,

    /// Column pointing at the inverse side.
    pub inverse_join_column: Option<JoinColumnOptions>
}

/// One captured junction table declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinTableArgs {
    /// Owning structure.
    pub target: Target,

    /// Relation member name.
    pub property_name: String,

    /// Declared options.
    pub options: JoinTableOptions
}

impl JoinTableArgs {
    /// Args with empty options.
    #[must_use]
    pub fn new(target: Target, property_name: impl Into<String>) -> Self {
        Self {
            target,
            property_name: property_name.into(),
            options: JoinTableOptions::default()
        }
    }

    /// Replace the options.
    #[must_use]
    pub fn with_options(mut self, options: JoinTableOptions) -> Self {
        self.options = options;
        self
    }
}

impl TargetedArgs for JoinTableArgs {
    fn target(&self) -> Target {
        self.target
    }
}

impl PropertyArgs for JoinTableArgs {
    fn property_name(&self) -> &str {
        &self.property_name
    }
}

/// One captured structure declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableArgs {
    /// Declared structure.
    pub target: Target,

    /// Explicit table name.
    pub name: Option<String>,

    /// Storage schema.
    pub schema: Option<String>
}

impl TableArgs {
    /// Args with no explicit name or schema.
    #[must_use]
    pub const fn new(target: Target) -> Self {
        Self {
            target,
            name: None,
            schema: None
        }
    }

    /// Set the explicit table name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the schema.
    #[must_use]
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }
}

impl TargetedArgs for TableArgs {
    fn target(&self) -> Target {
        self.target
    }
}
