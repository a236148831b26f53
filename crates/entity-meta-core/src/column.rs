// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Resolved column metadata.
//!
//! [`ColumnMetadata::new`] turns one [`RawColumnArgs`] into an immutable
//! record. Construction is pure and never fails:
//!
//! | Input | Resolved as |
//! |-------|-------------|
//! | `mode` | Declared mode, else [`ColumnMode::Regular`]. Never inferred |
//! | `property_type` | Lower-cased, else absent |
//! | every option | Copied only if declared; accessors apply defaults |
//!
//! # Name Resolution
//!
//! The column name is computed on access, not stored:
//!
//! 1. An explicit `name` option always wins.
//! 2. Otherwise the attached [`NamingStrategy`] maps the member name.
//! 3. Without a strategy the member name is used unchanged.
//!
//! [`ColumnMetadata::with_naming_strategy`] rebinds a record to another
//! strategy, which replays a resolution under a different convention
//! without going back to the raw args.

use std::{borrow::Cow, fmt};

use crate::{
    args::{ColumnOptions, RawColumnArgs},
    mode::ColumnMode,
    naming::{NamingStrategy, SharedNamingStrategy},
    property::PropertyRef
};

/// Immutable description of one column.
#[derive(Clone)]
pub struct ColumnMetadata {
    property:      PropertyRef,
    mode:          ColumnMode,
    property_type: Option<String>,
    options:       ColumnOptions,
    naming:        Option<SharedNamingStrategy>
}

impl ColumnMetadata {
    /// Resolve one raw declaration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use entity_meta_core::{ColumnMetadata, ColumnMode, ColumnOptions, RawColumnArgs, Target};
    ///
    /// struct User;
    ///
    /// let args = RawColumnArgs::new(Target::of::<User>(), "createdAt")
    ///     .with_mode(ColumnMode::CreateDate)
    ///     .with_options(ColumnOptions::default().with_name("created_at"));
    /// let column = ColumnMetadata::new(&args);
    ///
    /// assert_eq!(column.name(), "created_at");
    /// assert!(column.is_create_date());
    /// assert!(!column.is_primary());
    /// ```
    #[must_use]
    pub fn new(args: &RawColumnArgs) -> Self {
        Self {
            property:      PropertyRef::new(args.target, args.property_name.clone()),
            mode:          args.mode.unwrap_or_default(),
            property_type: args.property_type.as_deref().map(str::to_lowercase),
            options:       args.options.clone(),
            naming:        None
        }
    }

    /// Same record, names derived through `naming`.
    #[must_use]
    pub fn with_naming_strategy(mut self, naming: SharedNamingStrategy) -> Self {
        self.naming = Some(naming);
        self
    }

    /// Same record, without a naming strategy.
    #[must_use]
    pub fn without_naming_strategy(mut self) -> Self {
        self.naming = None;
        self
    }

    /// Attached naming strategy, if any.
    #[must_use]
    pub fn naming_strategy(&self) -> Option<&SharedNamingStrategy> {
        self.naming.as_ref()
    }

    /// Column name in storage.
    #[must_use]
    pub fn name(&self) -> Cow<'_, str> {
        if let Some(name) = &self.options.name {
            return Cow::Borrowed(name);
        }

        match &self.naming {
            Some(naming) => Cow::Owned(naming.column_name(self.property.property_name())),
            None => Cow::Borrowed(self.property.property_name())
        }
    }

    /// Column name under an arbitrary strategy, ignoring the attached one.
    #[must_use]
    pub fn name_with(&self, naming: &dyn NamingStrategy) -> Cow<'_, str> {
        match &self.options.name {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(naming.column_name(self.property.property_name()))
        }
    }

    /// Check if the name was declared explicitly.
    #[must_use]
    pub fn has_explicit_name(&self) -> bool {
        self.options.name.is_some()
    }

    /// Declared member.
    #[must_use]
    pub const fn property(&self) -> &PropertyRef {
        &self.property
    }

    /// Member name.
    #[must_use]
    pub fn property_name(&self) -> &str {
        self.property.property_name()
    }

    /// Resolved mode.
    #[must_use]
    pub const fn mode(&self) -> ColumnMode {
        self.mode
    }

    /// Lower-cased reflected member type.
    ///
    /// `None` means the type has to be inferred elsewhere.
    #[must_use]
    pub fn property_type(&self) -> Option<&str> {
        self.property_type.as_deref()
    }

    /// Options exactly as declared, with presence preserved.
    #[must_use]
    pub const fn options(&self) -> &ColumnOptions {
        &self.options
    }

    /// Explicit storage type. `None` leaves the choice to the type mapper.
    #[must_use]
    pub fn column_type(&self) -> Option<&str> {
        self.options.column_type.as_deref()
    }

    /// Maximum length, `""` when not declared.
    #[must_use]
    pub fn length(&self) -> &str {
        self.options.length.as_deref().unwrap_or_default()
    }

    /// Auto-increment flag, `false` when not declared.
    #[must_use]
    pub fn is_auto_increment(&self) -> bool {
        self.options.generated.unwrap_or(false)
    }

    /// Uniqueness flag, `false` when not declared.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        self.options.unique.unwrap_or(false)
    }

    /// Nullability flag, `false` when not declared.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.options.nullable.unwrap_or(false)
    }

    /// Raw storage definition, `""` when not declared.
    #[must_use]
    pub fn column_definition(&self) -> &str {
        self.options.column_definition.as_deref().unwrap_or_default()
    }

    /// Comment, `""` when not declared.
    #[must_use]
    pub fn comment(&self) -> &str {
        self.options.comment.as_deref().unwrap_or_default()
    }

    /// Previous column name.
    #[must_use]
    pub fn old_column_name(&self) -> Option<&str> {
        self.options.old_column_name.as_deref()
    }

    /// Decimal precision.
    #[must_use]
    pub const fn precision(&self) -> Option<u32> {
        self.options.precision
    }

    /// Decimal scale.
    #[must_use]
    pub const fn scale(&self) -> Option<u32> {
        self.options.scale
    }

    /// Collation.
    #[must_use]
    pub fn collation(&self) -> Option<&str> {
        self.options.collation.as_deref()
    }

    /// Check if this column is (part of) the primary key.
    #[must_use]
    pub const fn is_primary(&self) -> bool {
        self.mode.is_primary()
    }

    /// Check if this column holds the creation timestamp.
    #[must_use]
    pub const fn is_create_date(&self) -> bool {
        self.mode.is_create_date()
    }

    /// Check if this column holds the update timestamp.
    #[must_use]
    pub const fn is_update_date(&self) -> bool {
        self.mode.is_update_date()
    }

    /// Check if this column holds the version counter.
    #[must_use]
    pub const fn is_version(&self) -> bool {
        self.mode.is_version()
    }

    /// Check if this column is virtual (not mapped to storage).
    #[must_use]
    pub const fn is_virtual(&self) -> bool {
        self.mode.is_virtual()
    }

    /// Check if this column counts tree children.
    #[must_use]
    pub const fn is_tree_children_count(&self) -> bool {
        self.mode.is_tree_children_count()
    }

    /// Check if this column holds the tree level.
    #[must_use]
    pub const fn is_tree_level(&self) -> bool {
        self.mode.is_tree_level()
    }
}

impl From<&RawColumnArgs> for ColumnMetadata {
    fn from(args: &RawColumnArgs) -> Self {
        Self::new(args)
    }
}

impl fmt::Debug for ColumnMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnMetadata")
            .field("property", &self.property)
            .field("name", &self.name())
            .field("mode", &self.mode)
            .field("property_type", &self.property_type)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Records compare by content. The attached strategy is ignored; compare
/// [`name`](ColumnMetadata::name) to compare resolved names.
impl PartialEq for ColumnMetadata {
    fn eq(&self, other: &Self) -> bool {
        self.property == other.property
            && self.mode == other.mode
            && self.property_type == other.property_type
            && self.options == other.options
    }
}

impl Eq for ColumnMetadata {}
