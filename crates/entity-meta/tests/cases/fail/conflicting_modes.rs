// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_meta::EntityMeta;

#[derive(EntityMeta)]
#[entity(table = "counters")]
pub struct Counter {
    #[column(primary, version)]
    pub id: i64
}

fn main() {}
