// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `impl DeclareMetadata` generation.
//!
//! Every declaration becomes one registry call, emitted in field order so
//! that resolved columns keep declaration order:
//!
//! | Source | Registry call |
//! |--------|---------------|
//! | `#[entity(...)]` (always) | `add_table(TableArgs)` |
//! | `#[column(...)]` field | `add_column(RawColumnArgs)` |
//! | `#[join_table(...)]` field | `add_join_table(JoinTableArgs)` |
//!
//! Only options that were declared are emitted. Generated paths are
//! absolute (`::entity_meta::...`).

use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericParam, Generics, parse_quote};

use super::parse::{ColumnConfig, EntityDef, FieldDef, JoinTableConfig};

/// Generate the `DeclareMetadata` implementation for an entity.
pub fn generate(entity: &EntityDef) -> TokenStream {
    let ident = entity.name();
    let generics = static_generics(&entity.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let table = table_args(entity);
    let columns = entity
        .columns()
        .into_iter()
        .map(|(field, config)| column_args(field, &config));
    let join_tables = entity.join_table_fields().filter_map(|field| {
        field
            .join_table
            .as_ref()
            .map(|config| join_table_args(field, config))
    });

    quote! {
        #[automatically_derived]
        impl #impl_generics ::entity_meta::DeclareMetadata for #ident #ty_generics #where_clause {
            fn declare(registry: &mut ::entity_meta::MetadataArgsRegistry) {
                let target = ::entity_meta::Target::of::<Self>();
                #table
                #(#columns)*
                #(#join_tables)*
            }
        }
    }
}

/// `Target::of::<Self>()` needs `Self: 'static`, so every generic parameter
/// is bounded by `'static`.
fn static_generics(generics: &Generics) -> Generics {
    let mut generics = generics.clone();
    let params: Vec<GenericParam> = generics.params.iter().cloned().collect();
    let where_clause = generics.make_where_clause();

    for param in params {
        match param {
            GenericParam::Type(ty) => {
                let ident = ty.ident;
                where_clause.predicates.push(parse_quote!(#ident: 'static));
            }
            GenericParam::Lifetime(lt) => {
                let lifetime = lt.lifetime;
                where_clause.predicates.push(parse_quote!(#lifetime: 'static));
            }
            GenericParam::Const(_) => {}
        }
    }

    generics
}

fn table_args(entity: &EntityDef) -> TokenStream {
    let name = entity
        .table
        .as_ref()
        .map(|name| quote!(.with_name(#name)));
    let schema = entity
        .schema
        .as_ref()
        .map(|schema| quote!(.with_schema(#schema)));

    quote! {
        registry.add_table(::entity_meta::TableArgs::new(target) #name #schema);
    }
}

fn column_args(field: &FieldDef, config: &ColumnConfig) -> TokenStream {
    let property = field.name_str();
    let mode = config.mode.map(|mode| quote!(.with_mode(#mode)));
    let property_type = field
        .property_type()
        .map(|ty| quote!(.with_property_type(#ty)));

    let options = column_options(config);
    let options = (!options.is_empty()).then(|| {
        quote! {
            .with_options(::entity_meta::ColumnOptions::default() #options)
        }
    });

    quote! {
        registry.add_column(
            ::entity_meta::RawColumnArgs::new(target, #property)
                #mode
                #property_type
                #options
        );
    }
}

fn column_options(config: &ColumnConfig) -> TokenStream {
    let mut options = TokenStream::new();

    let strings = [
        (&config.name, quote!(with_name)),
        (&config.sql_type, quote!(with_column_type)),
        (&config.length, quote!(with_length)),
        (&config.definition, quote!(with_column_definition)),
        (&config.comment, quote!(with_comment)),
        (&config.old_name, quote!(with_old_column_name)),
        (&config.collation, quote!(with_collation))
    ];
    for (value, method) in strings {
        if let Some(value) = value {
            options.extend(quote!(.#method(#value)));
        }
    }

    let flags = [
        (config.generated, quote!(with_generated)),
        (config.unique, quote!(with_unique)),
        (config.nullable, quote!(with_nullable))
    ];
    for (value, method) in flags {
        if let Some(value) = value {
            options.extend(quote!(.#method(#value)));
        }
    }

    if let Some(precision) = config.precision {
        options.extend(quote!(.with_precision(#precision)));
    }
    if let Some(scale) = config.scale {
        options.extend(quote!(.with_scale(#scale)));
    }

    options
}

fn join_table_args(field: &FieldDef, config: &JoinTableConfig) -> TokenStream {
    let property = field.name_str();
    let name = optional_string(config.name.as_deref());

    let join_column = if config.has_join_column() {
        join_column_options(
            config.join_column.as_deref(),
            config.referenced_column.as_deref()
        )
    } else {
        quote!(::core::option::Option::None)
    };
    let inverse_join_column = if config.has_inverse_join_column() {
        join_column_options(
            config.inverse_join_column.as_deref(),
            config.inverse_referenced_column.as_deref()
        )
    } else {
        quote!(::core::option::Option::None)
    };

    quote! {
        registry.add_join_table(
            ::entity_meta::JoinTableArgs::new(target, #property).with_options(
                ::entity_meta::JoinTableOptions {
                    name: #name,
                    join_column: #join_column,
                    inverse_join_column: #inverse_join_column
                }
            )
        );
    }
}

fn join_column_options(name: Option<&str>, referenced: Option<&str>) -> TokenStream {
    let name = optional_string(name);
    let referenced = optional_string(referenced);
    quote! {
        ::core::option::Option::Some(::entity_meta::JoinColumnOptions {
            name: #name,
            referenced_column_name: #referenced
        })
    }
}

fn optional_string(value: Option<&str>) -> TokenStream {
    match value {
        Some(value) => {
            quote!(::core::option::Option::Some(::std::string::String::from(#value)))
        }
        None => quote!(::core::option::Option::None)
    }
}
