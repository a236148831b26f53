// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Raw args registry.
//!
//! The registry collects every declaration before anything is resolved.
//! It is an ordinary owned value: create one per resolution session, let
//! declarations append to it, hand it to a
//! [`MetadataBuilder`](crate::MetadataBuilder), and [`reset`] it (or drop
//! it) before the next session.
//!
//! # Lifecycle
//!
//! ```text
//! MetadataArgsRegistry::new()   empty
//!        │
//!        ▼
//! declare / add ...             grows, append-only, any order
//!        │
//!        ▼
//! MetadataBuilder::build_*      read-only
//!        │
//!        ▼
//! reset()                       empty again, all collections at once
//! ```
//!
//! Insertion order is preserved but carries no meaning. The registry has no
//! internal locking; guard it externally when declarations are loaded from
//! several threads.
//!
//! [`reset`]: MetadataArgsRegistry::reset

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::{
    args::{JoinTableArgs, RawColumnArgs, TableArgs},
    property::{Target, TargetedArgs}
};

/// Append-only collection of one kind of raw args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgsCollection<T> {
    entries: Vec<T>
}

impl<T> Default for ArgsCollection<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new()
        }
    }
}

impl<T> ArgsCollection<T> {
    /// Create an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new()
        }
    }

    /// Append one entry. No uniqueness check.
    pub fn add(&mut self, entry: T) {
        self.entries.push(entry);
    }

    /// All entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T: TargetedArgs> ArgsCollection<T> {
    /// Entries declared on `target`, in insertion order.
    pub fn filter_by_target(&self, target: Target) -> impl Iterator<Item = &T> + '_ {
        self.entries
            .iter()
            .filter(move |entry| entry.target() == target)
    }
}

impl<'a, T> IntoIterator for &'a ArgsCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<T> Extend<T> for ArgsCollection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

/// Declarations of one structure.
///
/// Implemented by `#[derive(EntityMeta)]`, or by hand:
///
/// ```rust
/// use entity_meta_core::{
///     ColumnMode, DeclareMetadata, MetadataArgsRegistry, RawColumnArgs, Target
/// };
///
/// struct User;
///
/// impl DeclareMetadata for User {
///     fn declare(registry: &mut MetadataArgsRegistry) {
///         registry.add_column(
///             RawColumnArgs::new(Target::of::<Self>(), "id").with_mode(ColumnMode::Primary)
///         );
///     }
/// }
///
/// let mut registry = MetadataArgsRegistry::new();
/// registry.declare::<User>();
/// assert_eq!(registry.columns.len(), 1);
/// ```
pub trait DeclareMetadata {
    /// Append this structure's declarations to `registry`.
    fn declare(registry: &mut MetadataArgsRegistry);
}

/// Every raw declaration of a resolution session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataArgsRegistry {
    /// Structure declarations.
    pub tables: ArgsCollection<TableArgs>,

    /// Column declarations.
    pub columns: ArgsCollection<RawColumnArgs>,

    /// Junction table declarations.
    pub join_tables: ArgsCollection<JoinTableArgs>
}

impl MetadataArgsRegistry {
    /// Create an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tables:      ArgsCollection::new(),
            columns:     ArgsCollection::new(),
            join_tables: ArgsCollection::new()
        }
    }

    /// Run the declarations of `T`.
    pub fn declare<T: DeclareMetadata>(&mut self) -> &mut Self {
        T::declare(self);
        self
    }

    /// Append a structure declaration.
    pub fn add_table(&mut self, args: TableArgs) {
        trace!(target_type = %args.target, "table declared");
        self.tables.add(args);
    }

    /// Append a column declaration.
    pub fn add_column(&mut self, args: RawColumnArgs) {
        trace!(
            target_type = %args.target,
            property = %args.property_name,
            mode = ?args.mode,
            "column declared"
        );
        self.columns.add(args);
    }

    /// Append a junction table declaration.
    pub fn add_join_table(&mut self, args: JoinTableArgs) {
        trace!(
            target_type = %args.target,
            property = %args.property_name,
            "join table declared"
        );
        self.join_tables.add(args);
    }

    /// Distinct structures with at least one declaration, first-seen order.
    ///
    /// Tables are scanned first, then columns, then join tables.
    #[must_use]
    pub fn targets(&self) -> Vec<Target> {
        let mut seen = HashSet::new();
        self.tables
            .iter()
            .map(|args| args.target)
            .chain(self.columns.iter().map(|args| args.target))
            .chain(self.join_tables.iter().map(|args| args.target))
            .filter(|target| seen.insert(*target))
            .collect()
    }

    /// Total number of entries across every collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len() + self.columns.len() + self.join_tables.len()
    }

    /// Check if every collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear every collection.
    pub fn reset(&mut self) {
        let cleared = self.len();
        self.tables.clear();
        self.columns.clear();
        self.join_tables.clear();
        debug!(cleared, "metadata args registry reset");
    }
}
