// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `all_fields` and `doc_comments` together, with raw identifiers.

use entity_meta::{EntityMeta, MetadataArgsRegistry};

#[derive(EntityMeta)]
#[entity(all_fields, doc_comments)]
pub(crate) struct AuditEntry {
    /// Entry id.
    #[column(primary)]
    pub id: i64,

    /// Kind of change.
    pub r#type: String,

    /// Who made the change.
    #[column(comment = "Actor login")]
    pub actor: String,

    #[column(skip)]
    pub raw: Vec<u8>
}

fn main() {
    let mut registry = MetadataArgsRegistry::new();
    registry.declare::<AuditEntry>();
    assert_eq!(registry.columns.len(), 3);
}
