// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Tests for struct-level parsing.
//!
//! Inputs are built with `syn::parse_quote!` and checked against the parsed
//! [`EntityDef`]:
//!
//! ```rust,ignore
//! let input: DeriveInput = syn::parse_quote! {
//!     #[entity(table = "users")]
//!     pub struct User {
//!         #[column(primary)]
//!         pub id: Uuid,
//!     }
//! };
//! let entity = EntityDef::from_derive_input(&input).unwrap();
//! assert_eq!(entity.table.as_deref(), Some("users"));
//! ```

use syn::{DeriveInput, parse_quote};

use super::EntityDef;
use crate::entity::parse::ModeDef;

fn parse(input: DeriveInput) -> EntityDef {
    EntityDef::from_derive_input(&input).unwrap()
}

fn parse_err(input: DeriveInput) -> String {
    EntityDef::from_derive_input(&input).unwrap_err().to_string()
}

#[test]
fn defaults_without_entity_attribute() {
    let entity = parse(parse_quote! {
        pub struct User {
            pub id: i64
        }
    });
    assert_eq!(entity.name(), "User");
    assert!(entity.table.is_none());
    assert!(entity.schema.is_none());
    assert!(!entity.doc_comments);
    assert!(!entity.all_fields);
    assert_eq!(entity.fields.len(), 1);
    assert!(entity.columns().is_empty());
}

#[test]
fn struct_attributes() {
    let entity = parse(parse_quote! {
        #[entity(table = "users", schema = "auth", doc_comments, all_fields)]
        pub struct User {
            pub id: i64
        }
    });
    assert_eq!(entity.table.as_deref(), Some("users"));
    assert_eq!(entity.schema.as_deref(), Some("auth"));
    assert!(entity.doc_comments);
    assert!(entity.all_fields);
}

#[test]
fn unknown_struct_attribute_is_error() {
    let err = parse_err(parse_quote! {
        #[entity(dialect = "postgres")]
        pub struct User {
            pub id: i64
        }
    });
    assert!(err.contains("dialect"));
}

#[test]
fn tuple_struct_is_error() {
    let input: DeriveInput = parse_quote! {
        pub struct Id(i64);
    };
    assert_eq!(parse_err(input), "EntityMeta requires named fields");
}

#[test]
fn enum_is_error() {
    let input: DeriveInput = parse_quote! {
        pub enum Status { Active }
    };
    assert_eq!(parse_err(input), "EntityMeta can only be derived for structs");
}

#[test]
fn columns_keep_field_order() {
    let entity = parse(parse_quote! {
        pub struct Post {
            #[column(update_date)]
            pub updated_at: i64,
            pub cache: String,
            #[column(primary)]
            pub id: i64,
            #[column(skip)]
            pub draft: bool
        }
    });
    let columns: Vec<_> = entity
        .columns()
        .into_iter()
        .map(|(field, config)| (field.name_str(), config.mode))
        .collect();
    assert_eq!(
        columns,
        [
            ("updated_at".to_string(), Some(ModeDef::UpdateDate)),
            ("id".to_string(), Some(ModeDef::Primary))
        ]
    );
}

#[test]
fn all_fields_excludes_join_tables_and_skips() {
    let entity = parse(parse_quote! {
        #[entity(all_fields)]
        pub struct Post {
            pub title: String,
            #[column(skip)]
            pub draft: bool,
            #[join_table]
            pub tags: Vec<Tag>,
            #[column(mode = "virtual")]
            pub tag_count: u32
        }
    });
    let names: Vec<_> = entity
        .columns()
        .into_iter()
        .map(|(field, _)| field.name_str())
        .collect();
    assert_eq!(names, ["title", "tag_count"]);
    assert_eq!(entity.join_table_fields().count(), 1);
}

#[test]
fn doc_comments_fill_missing_comment() {
    let entity = parse(parse_quote! {
        #[entity(doc_comments)]
        pub struct Post {
            /// Headline.
            #[column]
            pub title: String,
            /// Ignored.
            #[column(comment = "Body text")]
            pub body: String,
            #[column]
            pub slug: String
        }
    });
    let comments: Vec<_> = entity
        .columns()
        .into_iter()
        .map(|(_, config)| config.comment)
        .collect();
    assert_eq!(
        comments,
        [
            Some("Headline.".to_string()),
            Some("Body text".to_string()),
            None
        ]
    );
}

#[test]
fn doc_comments_off_keeps_comment_empty() {
    let entity = parse(parse_quote! {
        pub struct Post {
            /// Headline.
            #[column]
            pub title: String
        }
    });
    assert_eq!(entity.columns()[0].1.comment, None);
}

#[test]
fn member_cannot_be_column_and_join_table() {
    let err = parse_err(parse_quote! {
        #[entity(all_fields)]
        pub struct Post {
            #[column(primary)]
            pub id: i64,
            #[column]
            #[join_table(name = "post_tags")]
            pub tags: Vec<String>
        }
    });
    assert!(err.contains("#[column] and #[join_table] are mutually exclusive"));
}

#[test]
fn field_errors_are_accumulated() {
    let input: DeriveInput = parse_quote! {
        pub struct Post {
            #[column(primary, version)]
            pub id: i64,
            #[column(index)]
            pub title: String
        }
    };
    let err = EntityDef::from_derive_input(&input).unwrap_err();
    assert_eq!(err.len(), 2);
}
