// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Minimal struct with a primary key and plain columns.

use chrono::{DateTime, Utc};
use entity_meta::{DeclareMetadata, EntityMeta, MetadataArgsRegistry};
use uuid::Uuid;

#[derive(Debug, Clone, EntityMeta)]
#[entity(table = "users")]
pub struct User {
    #[column(primary)]
    pub id: Uuid,

    #[column]
    pub name: String,

    #[column(create_date)]
    pub created_at: DateTime<Utc>,

    pub session_cache: Vec<u8>
}

fn main() {
    let mut registry = MetadataArgsRegistry::new();
    User::declare(&mut registry);
    assert_eq!(registry.tables.len(), 1);
    assert_eq!(registry.columns.len(), 3);
}
