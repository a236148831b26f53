// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Builds [`EntityMetadata`] out of a [`MetadataArgsRegistry`].
//!
//! The builder only reads the registry. Each structure is built on its own,
//! so a conflict in one structure never affects another.
//!
//! # Example
//!
//! ```rust
//! use entity_meta_core::{
//!     ColumnMode, MetadataArgsRegistry, MetadataBuilder, NamingConvention, RawColumnArgs,
//!     Target
//! };
//!
//! struct User;
//!
//! let mut registry = MetadataArgsRegistry::new();
//! registry.add_column(
//!     RawColumnArgs::new(Target::of::<User>(), "userId").with_mode(ColumnMode::Primary)
//! );
//!
//! let user = MetadataBuilder::new(&registry)
//!     .with_naming_strategy(NamingConvention::Snake.strategy())
//!     .build_entity(Target::of::<User>())
//!     .unwrap();
//!
//! assert_eq!(user.table_name(), "user");
//! assert_eq!(user.columns()[0].name(), "user_id");
//! ```

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, trace};

use crate::{
    column::ColumnMetadata,
    config::BuilderConfig,
    entity::EntityMetadata,
    error::MetadataError,
    naming::SharedNamingStrategy,
    property::{PropertyArgs, Target},
    registry::{ArgsCollection, MetadataArgsRegistry}
};

/// Resolves registry entries into entity metadata.
#[derive(Debug, Clone)]
pub struct MetadataBuilder<'r> {
    registry: &'r MetadataArgsRegistry,
    naming:   Option<SharedNamingStrategy>,
    strict:   bool
}

impl<'r> MetadataBuilder<'r> {
    /// Builder over `registry`, without a naming strategy and without
    /// validation.
    #[must_use]
    pub const fn new(registry: &'r MetadataArgsRegistry) -> Self {
        Self {
            registry,
            naming: None,
            strict: false
        }
    }

    /// Naming strategy attached to every built column.
    #[must_use]
    pub fn with_naming_strategy(mut self, naming: SharedNamingStrategy) -> Self {
        self.naming = Some(naming);
        self
    }

    /// Apply a configuration: naming convention and strict validation.
    #[must_use]
    pub fn with_config(mut self, config: &BuilderConfig) -> Self {
        self.naming = Some(config.naming.strategy());
        self.strict = config.strict;
        self
    }

    /// Enable or disable validation of every built entity.
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Build the metadata of one structure.
    ///
    /// A structure without declarations yields an entity with no columns.
    ///
    /// # Errors
    ///
    /// - [`MetadataError::DuplicateProperty`] when a member is declared
    ///   twice as a column, or twice as a join table.
    /// - [`MetadataError::ConflictingTable`] when table declarations disagree
    ///   on the table name or schema.
    /// - [`MetadataError::Invalid`] in strict mode, when validation fails.
    pub fn build_entity(&self, target: Target) -> Result<EntityMetadata, MetadataError> {
        check_duplicates(&self.registry.columns, target, "column")?;
        check_duplicates(&self.registry.join_tables, target, "join table")?;

        let columns: Vec<ColumnMetadata> = self
            .registry
            .columns
            .filter_by_target(target)
            .map(|args| {
                let column = match &self.naming {
                    Some(naming) => ColumnMetadata::new(args).with_naming_strategy(naming.clone()),
                    None => ColumnMetadata::new(args)
                };
                trace!(
                    target_type = %target,
                    property = column.property_name(),
                    name = %column.name(),
                    mode = %column.mode(),
                    "column resolved"
                );
                column
            })
            .collect();

        let join_tables = self
            .registry
            .join_tables
            .filter_by_target(target)
            .cloned()
            .collect();

        let tables: Vec<_> = self.registry.tables.filter_by_target(target).collect();
        let table_name = table_value(
            target,
            "name",
            tables.iter().filter_map(|args| args.name.as_deref())
        )?;
        let schema = table_value(
            target,
            "schema",
            tables.iter().filter_map(|args| args.schema.as_deref())
        )?;

        let entity = EntityMetadata {
            target,
            table_name,
            schema,
            columns,
            join_tables,
            naming: self.naming.clone()
        };

        debug!(
            target_type = %target,
            table = %entity.table_name(),
            columns = entity.columns().len(),
            join_tables = entity.join_tables().len(),
            "entity metadata built"
        );

        if self.strict {
            entity.validate()?;
        }

        Ok(entity)
    }

    /// Build every structure present in the registry, in first-seen order.
    ///
    /// # Errors
    ///
    /// Returns the first error of [`build_entity`](Self::build_entity).
    pub fn build_all(&self) -> Result<Vec<EntityMetadata>, MetadataError> {
        self.registry
            .targets()
            .into_iter()
            .map(|target| self.build_entity(target))
            .collect()
    }
}

/// Reject members declared more than once.
///
/// The reported member is the smallest duplicated name, so the outcome does
/// not depend on declaration order.
fn check_duplicates<T: PropertyArgs>(
    collection: &ArgsCollection<T>,
    target: Target,
    kind: &'static str
) -> Result<(), MetadataError> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for args in collection.filter_by_target(target) {
        *counts.entry(args.property_name()).or_default() += 1;
    }

    match counts.into_iter().find(|(_, count)| *count > 1) {
        Some((property, count)) => Err(MetadataError::DuplicateProperty {
            target,
            property: property.to_string(),
            kind,
            count
        }),
        None => Ok(())
    }
}

/// Merge one table setting across every declaration of a structure.
///
/// Repeating the same value is allowed. Distinct values are a conflict,
/// reported sorted so the outcome does not depend on declaration order.
fn table_value<'a>(
    target: Target,
    key: &'static str,
    declared: impl Iterator<Item = &'a str>
) -> Result<Option<String>, MetadataError> {
    let distinct: BTreeSet<&str> = declared.collect();
    match distinct.len() {
        0 => Ok(None),
        1 => Ok(distinct.into_iter().next().map(str::to_string)),
        _ => Err(MetadataError::ConflictingTable {
            target,
            key,
            values: distinct.into_iter().map(str::to_string).collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        args::{ColumnOptions, JoinTableArgs, RawColumnArgs, TableArgs},
        mode::ColumnMode,
        naming::NamingConvention
    };

    struct User;
    struct Post;

    fn raw<T: 'static>(property: &str) -> RawColumnArgs {
        RawColumnArgs::new(Target::of::<T>(), property)
    }

    #[test]
    fn unknown_target_resolves_to_empty_entity() {
        let registry = MetadataArgsRegistry::new();
        let entity = MetadataBuilder::new(&registry)
            .build_entity(Target::of::<User>())
            .unwrap();
        assert!(entity.columns().is_empty());
        assert!(entity.join_tables().is_empty());
        assert_eq!(entity.table_name(), "User");
    }

    #[test]
    fn primary_column_scenario() {
        let mut registry = MetadataArgsRegistry::new();
        registry.add_column(raw::<User>("id").with_mode(ColumnMode::Primary));

        let entity = MetadataBuilder::new(&registry)
            .build_entity(Target::of::<User>())
            .unwrap();
        let id = &entity.columns()[0];
        assert_eq!(id.mode(), ColumnMode::Primary);
        assert!(id.is_primary());
        assert_eq!(id.name(), "id");
    }

    #[test]
    fn create_date_scenario() {
        let mut registry = MetadataArgsRegistry::new();
        registry.add_column(
            raw::<User>("createdAt")
                .with_mode(ColumnMode::CreateDate)
                .with_options(ColumnOptions::default().with_name("created_at"))
        );

        let entity = MetadataBuilder::new(&registry)
            .with_naming_strategy(NamingConvention::Kebab.strategy())
            .build_entity(Target::of::<User>())
            .unwrap();
        let created = entity.column("createdAt").unwrap();
        assert_eq!(created.name(), "created_at");
        assert!(created.is_create_date());
        assert!(!created.is_update_date());
        assert!(!created.is_primary());
        assert!(!created.is_version());
        assert!(!created.is_virtual());
    }

    #[test]
    fn only_target_entries_are_used() {
        let mut registry = MetadataArgsRegistry::new();
        registry.add_column(raw::<User>("id"));
        registry.add_column(raw::<Post>("title"));
        registry.add_column(raw::<User>("email"));
        registry.add_join_table(JoinTableArgs::new(Target::of::<Post>(), "tags"));

        let builder = MetadataBuilder::new(&registry);
        let user = builder.build_entity(Target::of::<User>()).unwrap();
        let names: Vec<_> = user.columns().iter().map(|c| c.property_name()).collect();
        assert_eq!(names, ["id", "email"]);
        assert!(user.join_tables().is_empty());

        let post = builder.build_entity(Target::of::<Post>()).unwrap();
        assert_eq!(post.columns().len(), 1);
        assert_eq!(post.join_table("tags").map(|j| j.property_name.as_str()), Some("tags"));
    }

    #[test]
    fn duplicate_column_is_reported() {
        let mut registry = MetadataArgsRegistry::new();
        registry.add_column(raw::<User>("id").with_mode(ColumnMode::Primary));
        registry.add_column(raw::<User>("id"));
        registry.add_column(raw::<Post>("id"));

        let builder = MetadataBuilder::new(&registry);
        let err = builder.build_entity(Target::of::<User>()).unwrap_err();
        assert_eq!(
            err,
            MetadataError::DuplicateProperty {
                target:   Target::of::<User>(),
                property: "id".to_string(),
                kind:     "column",
                count:    2
            }
        );

        // other structures are unaffected, registry untouched
        assert!(builder.build_entity(Target::of::<Post>()).is_ok());
        assert_eq!(registry.columns.len(), 3);
    }

    #[test]
    fn duplicate_report_is_order_independent() {
        let mut forward = MetadataArgsRegistry::new();
        for name in ["b", "a", "b", "a"] {
            forward.add_column(raw::<User>(name));
        }
        let mut backward = MetadataArgsRegistry::new();
        for name in ["a", "b", "a", "b"] {
            backward.add_column(raw::<User>(name));
        }

        let target = Target::of::<User>();
        assert_eq!(
            MetadataBuilder::new(&forward).build_entity(target).unwrap_err(),
            MetadataBuilder::new(&backward).build_entity(target).unwrap_err()
        );
    }

    #[test]
    fn duplicate_join_table_is_reported() {
        let mut registry = MetadataArgsRegistry::new();
        registry.add_join_table(JoinTableArgs::new(Target::of::<Post>(), "tags"));
        registry.add_join_table(JoinTableArgs::new(Target::of::<Post>(), "tags"));

        let err = MetadataBuilder::new(&registry)
            .build_entity(Target::of::<Post>())
            .unwrap_err();
        assert!(matches!(
            err,
            MetadataError::DuplicateProperty { kind: "join table", count: 2, .. }
        ));
    }

    #[test]
    fn table_args_are_applied() {
        let mut registry = MetadataArgsRegistry::new();
        registry.add_table(TableArgs::new(Target::of::<Post>()).with_schema("blog"));
        registry.add_table(TableArgs::new(Target::of::<Post>()).with_name("posts"));

        let post = MetadataBuilder::new(&registry)
            .build_entity(Target::of::<Post>())
            .unwrap();
        assert_eq!(post.table_name(), "posts");
        assert_eq!(post.schema(), Some("blog"));
    }

    #[test]
    fn repeated_table_values_are_merged() {
        let mut registry = MetadataArgsRegistry::new();
        registry.add_table(
            TableArgs::new(Target::of::<Post>())
                .with_name("posts")
                .with_schema("blog")
        );
        registry.add_table(TableArgs::new(Target::of::<Post>()).with_name("posts"));

        let post = MetadataBuilder::new(&registry)
            .build_entity(Target::of::<Post>())
            .unwrap();
        assert_eq!(post.table_name(), "posts");
        assert_eq!(post.schema(), Some("blog"));
    }

    #[test]
    fn conflicting_table_names_are_reported_in_any_order() {
        let build = |first: &str, second: &str| {
            let mut registry = MetadataArgsRegistry::new();
            registry.add_table(TableArgs::new(Target::of::<Post>()).with_name(first));
            registry.add_table(TableArgs::new(Target::of::<Post>()).with_name(second));
            MetadataBuilder::new(&registry)
                .build_entity(Target::of::<Post>())
                .unwrap_err()
        };

        let forward = build("one", "two");
        assert_eq!(forward, build("two", "one"));
        assert_eq!(
            forward,
            MetadataError::ConflictingTable {
                target: Target::of::<Post>(),
                key:    "name",
                values: vec!["one".to_string(), "two".to_string()]
            }
        );
    }

    #[test]
    fn conflicting_schema_is_reported() {
        let mut registry = MetadataArgsRegistry::new();
        registry.add_table(TableArgs::new(Target::of::<Post>()).with_schema("blog"));
        registry.add_table(TableArgs::new(Target::of::<Post>()).with_schema("archive"));

        let err = MetadataBuilder::new(&registry)
            .build_entity(Target::of::<Post>())
            .unwrap_err();
        assert!(matches!(
            err,
            MetadataError::ConflictingTable { key: "schema", ref values, .. }
                if values == &["archive", "blog"]
        ));
    }

    #[test]
    fn config_sets_naming_and_strictness() {
        let mut registry = MetadataArgsRegistry::new();
        registry.add_column(
            raw::<User>("balance")
                .with_options(ColumnOptions::default().with_precision(2).with_scale(5))
        );

        let lenient = MetadataBuilder::new(&registry)
            .with_config(&BuilderConfig::default().with_naming(NamingConvention::Pascal))
            .build_entity(Target::of::<User>())
            .unwrap();
        assert_eq!(lenient.columns()[0].name(), "Balance");

        let err = MetadataBuilder::new(&registry)
            .with_config(&BuilderConfig::default().with_strict(true))
            .build_entity(Target::of::<User>())
            .unwrap_err();
        assert!(matches!(err, MetadataError::Invalid { .. }));
    }

    #[test]
    fn build_all_in_first_seen_order() {
        let mut registry = MetadataArgsRegistry::new();
        registry.add_column(raw::<Post>("title"));
        registry.add_column(raw::<User>("id"));
        registry.add_column(raw::<Post>("body"));

        let entities = MetadataBuilder::new(&registry).build_all().unwrap();
        let targets: Vec<_> = entities.iter().map(EntityMetadata::target).collect();
        assert_eq!(targets, [Target::of::<Post>(), Target::of::<User>()]);
        assert_eq!(entities[0].columns().len(), 2);
    }

    #[test]
    fn replay_under_another_strategy() {
        let mut registry = MetadataArgsRegistry::new();
        registry.add_column(raw::<User>("firstName"));
        registry.add_column(
            raw::<User>("lastName").with_options(ColumnOptions::default().with_name("surname"))
        );

        let preserved = MetadataBuilder::new(&registry)
            .build_entity(Target::of::<User>())
            .unwrap();
        let snake = preserved
            .clone()
            .with_naming_strategy(NamingConvention::Snake.strategy());

        assert_eq!(preserved.columns()[0].name(), "firstName");
        assert_eq!(snake.columns()[0].name(), "first_name");
        assert_eq!(snake.columns()[1].name(), "surname");
        assert_eq!(snake.table_name(), "user");
    }

    mod order {
        use proptest::prelude::*;

        use super::*;

        fn names() -> impl Strategy<Value = Vec<String>> {
            prop::collection::btree_set("[a-z][a-zA-Z]{0,8}", 0..8)
                .prop_map(|set| set.into_iter().collect())
        }

        proptest! {
            #[test]
            fn columns_follow_declaration_order(names in names()) {
                let mut registry = MetadataArgsRegistry::new();
                for name in &names {
                    registry.add_column(raw::<User>(name));
                }
                registry.add_column(raw::<Post>("noise"));

                let entity = MetadataBuilder::new(&registry)
                    .build_entity(Target::of::<User>())
                    .unwrap();
                let resolved: Vec<_> = entity
                    .columns()
                    .iter()
                    .map(|c| c.property_name().to_string())
                    .collect();
                prop_assert_eq!(resolved, names);
            }

            #[test]
            fn duplicate_report_ignores_permutation(
                names in names(),
                seed in any::<u64>()
            ) {
                prop_assume!(!names.is_empty());
                let mut declared: Vec<String> = names.iter().chain(names.iter()).cloned().collect();
                let mut forward = MetadataArgsRegistry::new();
                for name in &declared {
                    forward.add_column(raw::<User>(name));
                }
                let len = declared.len();
                declared.rotate_left((seed as usize) % len);
                let mut rotated = MetadataArgsRegistry::new();
                for name in &declared {
                    rotated.add_column(raw::<User>(name));
                }

                let target = Target::of::<User>();
                let first = MetadataBuilder::new(&forward).build_entity(target).unwrap_err();
                let second = MetadataBuilder::new(&rotated).build_entity(target).unwrap_err();
                prop_assert_eq!(&first, &second);
                let smallest = names.iter().min().cloned();
                prop_assert!(
                    matches!(first, MetadataError::DuplicateProperty { ref property, .. } if Some(property) == smallest.as_ref()),
                    "expected DuplicateProperty for the smallest name"
                );
            }
        }
    }
}
