// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_meta::EntityMeta;

#[derive(EntityMeta)]
#[entity(table = "ids")]
pub struct Id(i64);

fn main() {}
