// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_meta::EntityMeta;

#[derive(EntityMeta)]
pub struct Post {
    #[column(mode = "deleteDate")]
    pub removed_at: i64
}

fn main() {}
