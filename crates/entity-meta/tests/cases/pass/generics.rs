// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generic structs are declared per instantiation.

use entity_meta::{EntityMeta, MetadataArgsRegistry, Target};

#[derive(EntityMeta)]
pub struct Envelope<T> {
    #[column(primary)]
    pub id: u64,

    #[column(sql_type = "jsonb")]
    pub payload: T
}

#[derive(EntityMeta)]
pub struct Label<'a> {
    #[column]
    pub text: &'a str
}

fn main() {
    let mut registry = MetadataArgsRegistry::new();
    registry.declare::<Envelope<String>>().declare::<Envelope<u32>>();
    registry.declare::<Label<'static>>();
    assert_eq!(registry.targets().len(), 3);
    assert_ne!(Target::of::<Envelope<String>>(), Target::of::<Envelope<u32>>());
}
