// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! - [`column`] — `#[column(...)]` options and mode
//! - [`mode`] — column mode names and shorthands
//! - [`join_table`] — `#[join_table(...)]` options

mod column;
mod join_table;
mod mode;

pub use column::ColumnConfig;
pub use join_table::JoinTableConfig;
pub use mode::ModeDef;
use syn::{Field, Ident, Type, ext::IdentExt};

use crate::utils::docs::extract_doc_summary;

/// Field definition with all parsed attributes.
///
/// # Example
///
/// ```rust,ignore
/// /// Display name.                 // doc = Some("Display name.")
/// #[column(length = 80)]           // column = Some(ColumnConfig { .. })
/// pub name: String,
///
/// #[join_table(name = "user_tags")] // join_table = Some(JoinTableConfig { .. })
/// pub tags: Vec<Tag>,
/// ```
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier.
    pub ident: Ident,

    /// Field type.
    pub ty: Type,

    /// First line of the field's doc comment.
    pub doc: Option<String>,

    /// Parsed `#[column]`, if present.
    pub column: Option<ColumnConfig>,

    /// Parsed `#[join_table]`, if present.
    pub join_table: Option<JoinTableConfig>
}

impl FieldDef {
    /// Parse field definition from syn's `Field`.
    ///
    /// # Errors
    ///
    /// Returns error if the field is unnamed, if an attribute is repeated,
    /// if `#[column]` and `#[join_table]` are combined, or if an attribute
    /// fails to parse.
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("EntityMeta fields must be named").with_span(field)
        })?;

        let mut column = None;
        let mut join_table = None;

        for attr in &field.attrs {
            if attr.path().is_ident("column") {
                if column.is_some() {
                    return Err(
                        darling::Error::custom("duplicate #[column] attribute").with_span(attr)
                    );
                }
                column = Some(ColumnConfig::from_attr(attr)?);
            } else if attr.path().is_ident("join_table") {
                if join_table.is_some() {
                    return Err(darling::Error::custom("duplicate #[join_table] attribute")
                        .with_span(attr));
                }
                join_table = Some(JoinTableConfig::from_attr(attr)?);
            } else {
                continue;
            }

            if column.is_some() && join_table.is_some() {
                return Err(darling::Error::custom(
                    "#[column] and #[join_table] are mutually exclusive"
                )
                .with_span(attr.path()));
            }
        }

        Ok(Self {
            ident,
            ty: field.ty.clone(),
            doc: extract_doc_summary(&field.attrs),
            column,
            join_table
        })
    }

    /// Member name as registered, without any `r#` prefix.
    #[must_use]
    pub fn name_str(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Reflected type name: last path segment of the field type.
    ///
    /// `Option<DateTime<Utc>>` reflects as `Option`. References, tuples,
    /// arrays and other non-path types reflect as `None`.
    #[must_use]
    pub fn property_type(&self) -> Option<String> {
        type_name(&self.ty)
    }
}

fn type_name(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.unraw().to_string()),
        Type::Group(group) => type_name(&group.elem),
        Type::Paren(paren) => type_name(&paren.elem),
        _ => None
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    fn parse(field: Field) -> FieldDef {
        FieldDef::from_field(&field).unwrap()
    }

    #[test]
    fn plain_field() {
        let field = parse(parse_quote! { pub title: String });
        assert_eq!(field.name_str(), "title");
        assert_eq!(field.property_type(), Some("String".to_string()));
        assert!(field.column.is_none());
        assert!(field.join_table.is_none());
        assert!(field.doc.is_none());
    }

    #[test]
    fn raw_identifier_is_unprefixed() {
        let field = parse(parse_quote! { pub r#type: String });
        assert_eq!(field.name_str(), "type");
    }

    #[test]
    fn property_type_is_last_segment() {
        let field = parse(parse_quote! { pub created: chrono::DateTime<chrono::Utc> });
        assert_eq!(field.property_type(), Some("DateTime".to_string()));

        let field = parse(parse_quote! { pub bio: Option<String> });
        assert_eq!(field.property_type(), Some("Option".to_string()));

        let field = parse(parse_quote! { pub age: i32 });
        assert_eq!(field.property_type(), Some("i32".to_string()));
    }

    #[test]
    fn non_path_types_have_no_property_type() {
        let field = parse(parse_quote! { pub name: &'static str });
        assert_eq!(field.property_type(), None);

        let field = parse(parse_quote! { pub pair: (i32, i32) });
        assert_eq!(field.property_type(), None);

        let field = parse(parse_quote! { pub hash: [u8; 32] });
        assert_eq!(field.property_type(), None);
    }

    #[test]
    fn column_and_join_table_parsed() {
        let field = parse(parse_quote! {
            /// Login handle.
            #[column(unique)]
            pub login: String
        });
        assert_eq!(field.column.map(|c| c.unique), Some(Some(true)));
        assert_eq!(field.doc.as_deref(), Some("Login handle."));

        let field = parse(parse_quote! {
            #[join_table(name = "user_roles")]
            pub roles: Vec<Role>
        });
        assert_eq!(
            field.join_table.and_then(|j| j.name),
            Some("user_roles".to_string())
        );
    }

    #[test]
    fn column_with_join_table_is_error() {
        let fields: [Field; 2] = [
            parse_quote! {
                #[column]
                #[join_table(name = "post_tags")]
                pub tags: Vec<String>
            },
            parse_quote! {
                #[join_table(name = "post_tags")]
                #[column(mode = "virtual")]
                pub tags: Vec<String>
            }
        ];
        for field in fields {
            let err = FieldDef::from_field(&field).unwrap_err().to_string();
            assert!(err.contains("mutually exclusive"), "{err}");
        }
    }

    #[test]
    fn duplicate_column_attribute_is_error() {
        let field: Field = parse_quote! {
            #[column(unique)]
            #[column(nullable)]
            pub login: String
        };
        assert!(FieldDef::from_field(&field).is_err());
    }

    #[test]
    fn column_error_propagates() {
        let field: Field = parse_quote! {
            #[column(bogus)]
            pub login: String
        };
        let err = FieldDef::from_field(&field).unwrap_err();
        assert!(err.to_string().contains("bogus"));
    }
}
