// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Column declaration parsing.
//!
//! # Supported Attributes
//!
//! | Attribute | Example | Option |
//! |-----------|---------|--------|
//! | `name` | `#[column(name = "user_name")]` | explicit name |
//! | `sql_type` | `#[column(sql_type = "varchar")]` | storage type |
//! | `length` | `#[column(length = 255)]`, `#[column(length = "max")]` | length |
//! | `generated` | `#[column(generated)]` | auto-increment |
//! | `unique` | `#[column(unique = false)]` | uniqueness |
//! | `nullable` | `#[column(nullable)]` | nullability |
//! | `definition` | `#[column(definition = "int GENERATED ALWAYS")]` | storage definition |
//! | `comment` | `#[column(comment = "...")]` | comment |
//! | `old_name` | `#[column(old_name = "login")]` | previous name |
//! | `precision` | `#[column(precision = 10)]` | precision |
//! | `scale` | `#[column(scale = 2)]` | scale |
//! | `collation` | `#[column(collation = "C")]` | collation |
//! | `mode` | `#[column(mode = "virtual")]` | mode by name |
//! | shorthand | `#[column(primary)]`, `#[column(version)]` | mode |
//! | `skip` | `#[column(skip)]` | not registered |
//!
//! Flags accept `key` or `key = bool`. The explicit `false` is kept, so the
//! resolved options can tell "declared false" from "not declared".

use syn::{Attribute, Lit, LitBool, LitInt, LitStr, Meta, meta::ParseNestedMeta};

use super::mode::ModeDef;

/// Column declaration parsed from `#[column(...)]`.
///
/// # Example
///
/// ```rust,ignore
/// #[column(primary, generated)]
/// pub id: i64,
///
/// #[column(precision = 12, scale = 2, comment = "Gross amount")]
/// pub total: Decimal,
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnConfig {
    /// Explicit column name.
    pub name: Option<String>,

    /// Storage type.
    pub sql_type: Option<String>,

    /// Length qualifier, integers kept as their decimal digits.
    pub length: Option<String>,

    /// Auto-increment flag.
    pub generated: Option<bool>,

    /// Uniqueness flag.
    pub unique: Option<bool>,

    /// Nullability flag.
    pub nullable: Option<bool>,

    /// Storage definition override.
    pub definition: Option<String>,

    /// Column comment.
    pub comment: Option<String>,

    /// Previous column name.
    pub old_name: Option<String>,

    /// Numeric precision.
    pub precision: Option<u32>,

    /// Numeric scale.
    pub scale: Option<u32>,

    /// Collation.
    pub collation: Option<String>,

    /// Mode, `None` leaves it to the resolver default.
    pub mode: Option<ModeDef>,

    /// `#[column(skip)]`: do not register the field.
    pub skip: bool
}

impl ColumnConfig {
    /// Parse column config from a `#[column]` or `#[column(...)]` attribute.
    ///
    /// # Errors
    ///
    /// - unknown key
    /// - value of the wrong literal kind
    /// - a second mode on the same field
    pub fn from_attr(attr: &Attribute) -> syn::Result<Self> {
        let mut config = Self::default();

        match &attr.meta {
            Meta::Path(_) => {}
            Meta::List(meta_list) => {
                meta_list.parse_nested_meta(|meta| config.parse_key(&meta))?;
            }
            Meta::NameValue(_) => {
                return Err(syn::Error::new_spanned(
                    attr,
                    "expected #[column] or #[column(...)]"
                ));
            }
        }

        Ok(config)
    }

    fn parse_key(&mut self, meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
        let key = meta
            .path
            .get_ident()
            .map(ToString::to_string)
            .unwrap_or_default();

        if let Some(mode) = ModeDef::from_shorthand(&key) {
            return self.set_mode(mode, meta);
        }

        match key.as_str() {
            "name" => self.name = Some(parse_str(meta)?),
            "sql_type" => self.sql_type = Some(parse_str(meta)?),
            "length" => self.length = Some(parse_length(meta)?),
            "generated" => self.generated = Some(parse_flag(meta)?),
            "unique" => self.unique = Some(parse_flag(meta)?),
            "nullable" => self.nullable = Some(parse_flag(meta)?),
            "definition" => self.definition = Some(parse_str(meta)?),
            "comment" => self.comment = Some(parse_str(meta)?),
            "old_name" => self.old_name = Some(parse_str(meta)?),
            "precision" => self.precision = Some(parse_u32(meta)?),
            "scale" => self.scale = Some(parse_u32(meta)?),
            "collation" => self.collation = Some(parse_str(meta)?),
            "skip" => self.skip = true,
            "mode" => {
                let _: syn::Token![=] = meta.input.parse()?;
                let value: LitStr = meta.input.parse()?;
                let mode = ModeDef::from_name(&value.value()).ok_or_else(|| {
                    syn::Error::new_spanned(
                        &value,
                        format!("unknown column mode `{}`", value.value())
                    )
                })?;
                return self.set_mode(mode, meta);
            }
            _ => {
                let shown = if key.is_empty() {
                    "path".to_string()
                } else {
                    key
                };
                return Err(meta.error(format!("unknown column attribute `{shown}`")));
            }
        }

        Ok(())
    }

    fn set_mode(&mut self, mode: ModeDef, meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
        if let Some(existing) = self.mode {
            return Err(meta.error(format!(
                "conflicting column modes `{}` and `{}`",
                existing.as_str(),
                mode.as_str()
            )));
        }
        self.mode = Some(mode);
        Ok(())
    }
}

fn parse_str(meta: &ParseNestedMeta<'_>) -> syn::Result<String> {
    let _: syn::Token![=] = meta.input.parse()?;
    let value: LitStr = meta.input.parse()?;
    Ok(value.value())
}

fn parse_flag(meta: &ParseNestedMeta<'_>) -> syn::Result<bool> {
    if meta.input.peek(syn::Token![=]) {
        let _: syn::Token![=] = meta.input.parse()?;
        let value: LitBool = meta.input.parse()?;
        Ok(value.value)
    } else {
        Ok(true)
    }
}

fn parse_u32(meta: &ParseNestedMeta<'_>) -> syn::Result<u32> {
    let _: syn::Token![=] = meta.input.parse()?;
    let value: LitInt = meta.input.parse()?;
    value.base10_parse()
}

fn parse_length(meta: &ParseNestedMeta<'_>) -> syn::Result<String> {
    let _: syn::Token![=] = meta.input.parse()?;
    match meta.input.parse::<Lit>()? {
        Lit::Str(value) => Ok(value.value()),
        Lit::Int(value) => Ok(value.base10_digits().to_string()),
        other => Err(syn::Error::new_spanned(
            other,
            "expected string or integer literal"
        ))
    }
}
