// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Builder configuration.
//!
//! | Setting | Env variable | Default |
//! |---------|--------------|---------|
//! | `naming` | `ENTITY_META_NAMING` | `preserve` |
//! | `strict` | `ENTITY_META_STRICT` | `false` |
//!
//! With the `serde` feature, [`BuilderConfig`] can also be deserialized from
//! any serde format:
//!
//! ```toml
//! naming = "snake"
//! strict = true
//! ```

use crate::{error::ConfigError, naming::NamingConvention};

/// Env variable selecting the naming convention.
pub const NAMING_ENV: &str = "ENTITY_META_NAMING";

/// Env variable enabling strict validation.
pub const STRICT_ENV: &str = "ENTITY_META_STRICT";

/// Settings applied by [`MetadataBuilder::with_config`](crate::MetadataBuilder::with_config).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuilderConfig {
    /// Convention used for names that were not declared explicitly.
    pub naming: NamingConvention,

    /// Run cross-field validation on every built entity.
    pub strict: bool
}

impl BuilderConfig {
    /// Read the configuration from the process environment.
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an unrecognised value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is not recognised.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>
    {
        let mut config = Self::default();

        if let Some(naming) = lookup(NAMING_ENV) {
            config.naming = naming.trim().parse()?;
        }
        if let Some(strict) = lookup(STRICT_ENV) {
            config.strict = parse_flag(STRICT_ENV, &strict)?;
        }

        Ok(config)
    }

    /// Set the naming convention.
    #[must_use]
    pub const fn with_naming(mut self, naming: NamingConvention) -> Self {
        self.naming = naming;
        self
    }

    /// Enable or disable strict validation.
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_string()
        })
    }
}
