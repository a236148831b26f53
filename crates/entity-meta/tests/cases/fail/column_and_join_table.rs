// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_meta::EntityMeta;

#[derive(EntityMeta)]
pub struct Post {
    #[column]
    #[join_table(name = "post_tags")]
    pub tags: Vec<String>
}

fn main() {}
