// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Resolved metadata of one structure.
//!
//! [`EntityMetadata`] is what downstream schema and query layers read. It
//! owns its columns and exposes them read-only; join tables are carried as
//! captured, since materializing them is not this crate's concern.

use std::borrow::Cow;

use crate::{
    args::JoinTableArgs,
    column::ColumnMetadata,
    error::MetadataError,
    naming::SharedNamingStrategy,
    property::Target,
    validate::validate_columns
};

/// Metadata graph of one declared structure.
#[derive(Debug, Clone)]
pub struct EntityMetadata {
    pub(crate) target:      Target,
    pub(crate) table_name:  Option<String>,
    pub(crate) schema:      Option<String>,
    pub(crate) columns:     Vec<ColumnMetadata>,
    pub(crate) join_tables: Vec<JoinTableArgs>,
    pub(crate) naming:      Option<SharedNamingStrategy>
}

impl EntityMetadata {
    /// Declared structure.
    #[must_use]
    pub const fn target(&self) -> Target {
        self.target
    }

    /// Table name: declared name, else the naming strategy applied to the
    /// type's short name, else the short name itself.
    #[must_use]
    pub fn table_name(&self) -> Cow<'_, str> {
        if let Some(name) = &self.table_name {
            return Cow::Borrowed(name);
        }

        match &self.naming {
            Some(naming) => Cow::Owned(naming.table_name(self.target.short_name())),
            None => Cow::Borrowed(self.target.short_name())
        }
    }

    /// Storage schema, if declared.
    #[must_use]
    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    /// Every column, in declaration order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnMetadata] {
        &self.columns
    }

    /// Column declared on the member `property_name`.
    #[must_use]
    pub fn column(&self, property_name: &str) -> Option<&ColumnMetadata> {
        self.columns
            .iter()
            .find(|column| column.property_name() == property_name)
    }

    /// Column whose resolved name is `name`.
    #[must_use]
    pub fn column_by_name(&self, name: &str) -> Option<&ColumnMetadata> {
        self.columns.iter().find(|column| column.name() == name)
    }

    /// Primary key columns, in declaration order.
    pub fn primary_columns(&self) -> impl Iterator<Item = &ColumnMetadata> {
        self.columns.iter().filter(|column| column.is_primary())
    }

    /// Creation timestamp column.
    #[must_use]
    pub fn create_date_column(&self) -> Option<&ColumnMetadata> {
        self.columns.iter().find(|column| column.is_create_date())
    }

    /// Update timestamp column.
    #[must_use]
    pub fn update_date_column(&self) -> Option<&ColumnMetadata> {
        self.columns.iter().find(|column| column.is_update_date())
    }

    /// Version counter column.
    #[must_use]
    pub fn version_column(&self) -> Option<&ColumnMetadata> {
        self.columns.iter().find(|column| column.is_version())
    }

    /// Columns mapped to storage (everything but virtual columns).
    pub fn stored_columns(&self) -> impl Iterator<Item = &ColumnMetadata> {
        self.columns.iter().filter(|column| !column.is_virtual())
    }

    /// Captured junction table declarations, unresolved.
    #[must_use]
    pub fn join_tables(&self) -> &[JoinTableArgs] {
        &self.join_tables
    }

    /// Captured junction table declared on `property_name`.
    #[must_use]
    pub fn join_table(&self, property_name: &str) -> Option<&JoinTableArgs> {
        self.join_tables
            .iter()
            .find(|args| args.property_name == property_name)
    }

    /// Same graph with every column bound to `naming`.
    #[must_use]
    pub fn with_naming_strategy(mut self, naming: SharedNamingStrategy) -> Self {
        self.columns = self
            .columns
            .into_iter()
            .map(|column| column.with_naming_strategy(naming.clone()))
            .collect();
        self.naming = Some(naming);
        self
    }

    /// Run cross-field validation.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::Invalid`] with every issue found.
    pub fn validate(&self) -> Result<(), MetadataError> {
        let issues = validate_columns(&self.columns);
        if issues.is_empty() {
            Ok(())
        } else {
            Err(MetadataError::Invalid {
                target: self.target,
                issues
            })
        }
    }
}
