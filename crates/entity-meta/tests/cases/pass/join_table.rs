// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Junction table declarations.

use entity_meta::{EntityMeta, MetadataArgsRegistry};

pub struct Tag;
pub struct Category;

#[derive(EntityMeta)]
pub struct Post {
    #[column(primary)]
    pub id: u64,

    #[join_table(
        name = "post_tags",
        join_column = "post_id",
        referenced_column = "id",
        inverse_join_column = "tag_id",
        inverse_referenced_column = "id"
    )]
    pub tags: Vec<Tag>,

    #[join_table]
    pub categories: Vec<Category>
}

fn main() {
    let mut registry = MetadataArgsRegistry::new();
    registry.declare::<Post>();
    assert_eq!(registry.join_tables.len(), 2);
}
