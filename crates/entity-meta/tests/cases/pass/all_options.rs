// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Every `#[column]` key and every mode.

use entity_meta::EntityMeta;

#[derive(EntityMeta)]
#[entity(table = "invoices", schema = "billing")]
pub struct Invoice {
    #[column(primary, generated, sql_type = "bigint")]
    pub id: i64,

    #[column(
        name = "invoice_number",
        length = 32,
        unique,
        nullable = false,
        comment = "Human readable number",
        old_name = "number",
        collation = "C"
    )]
    pub number: String,

    #[column(precision = 12, scale = 2, definition = "numeric(12, 2) NOT NULL")]
    pub total: f64,

    #[column(length = "max", nullable)]
    pub notes: Option<String>,

    #[column(mode = "virtual")]
    pub line_count: i64,

    #[column(update_date)]
    pub updated_at: u64,

    #[column(version)]
    pub revision: u32,

    #[column(tree_children_count)]
    pub children: u32,

    #[column(tree_level)]
    pub depth: u32,

    #[column(mode = "regular", generated = false)]
    pub external_ref: String,

    #[column(skip)]
    pub scratch: Vec<u8>
}

fn main() {}
