// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Basic entity-meta demo.
//!
//! Declares two structs, resolves them under the configuration found in the
//! environment and prints every resolved column.
//!
//! ```text
//! ENTITY_META_NAMING=snake ENTITY_META_STRICT=1 cargo run -p demo-basic
//! RUST_LOG=entity_meta_core=trace cargo run -p demo-basic
//! ```

use chrono::{DateTime, Utc};
use entity_meta::{BuilderConfig, EntityMeta, EntityMetadata, MetadataArgsRegistry, MetadataBuilder};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

// ============================================================================
// Entity Definitions
// ============================================================================

/// Registered account.
#[derive(Debug, Clone, EntityMeta)]
#[allow(non_snake_case)]
#[entity(table = "users", doc_comments)]
pub struct User {
    #[column(primary)]
    pub id: Uuid,

    /// Public handle, unique per installation.
    #[column(unique, length = 64)]
    pub userName: String,

    #[column(nullable, length = 320)]
    pub emailAddress: Option<String>,

    #[column(create_date)]
    pub createdAt: DateTime<Utc>,

    #[column(update_date)]
    pub updatedAt: DateTime<Utc>,

    #[column(version)]
    pub revision: u32
}

/// Forum post, threaded.
#[derive(Debug, Clone, EntityMeta)]
#[allow(non_snake_case)]
#[entity(schema = "forum", all_fields)]
pub struct ForumPost {
    #[column(primary, generated)]
    pub id: i64,

    pub authorId: Uuid,

    #[column(comment = "Markdown source")]
    pub body: String,

    #[column(precision = 5, scale = 2)]
    pub rating: f32,

    #[column(tree_level)]
    pub depth: u32,

    #[column(tree_children_count)]
    pub replyCount: u32,

    #[column(mode = "virtual")]
    pub excerpt: String,

    #[join_table(name = "post_tags", join_column = "post_id", inverse_join_column = "tag_id")]
    pub tags: Vec<String>
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("entity_meta_core=debug,demo_basic=info"))
        )
        .init();

    let config = BuilderConfig::from_env()?;
    tracing::info!(config = %serde_json::to_string(&config)?, "configuration loaded");

    let mut registry = MetadataArgsRegistry::new();
    registry.declare::<User>().declare::<ForumPost>();
    tracing::info!(entries = registry.len(), "declarations collected");

    let entities = MetadataBuilder::new(&registry)
        .with_config(&config)
        .build_all()?;

    for entity in &entities {
        print_entity(entity);
    }

    registry.reset();
    tracing::info!(entries = registry.len(), "registry reset");

    Ok(())
}

fn print_entity(entity: &EntityMetadata) {
    let table = match entity.schema() {
        Some(schema) => format!("{schema}.{}", entity.table_name()),
        None => entity.table_name().into_owned()
    };
    println!("{table} ({})", entity.target().short_name());

    for column in entity.columns() {
        let mut flags = Vec::new();
        if column.is_auto_increment() {
            flags.push("generated");
        }
        if column.is_unique() {
            flags.push("unique");
        }
        if column.is_nullable() {
            flags.push("nullable");
        }

        println!(
            "  {:<16} {:<18} {:<10} {:<20} {}",
            column.name(),
            column.mode(),
            column.property_type().unwrap_or("?"),
            flags.join(","),
            column.comment()
        );
    }

    for join_table in entity.join_tables() {
        println!(
            "  ~ {} via {}",
            join_table.property_name,
            join_table.options.name.as_deref().unwrap_or("<derived>")
        );
    }
}
