// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Identity of declaring structures and their members.
//!
//! A [`Target`] names the struct that owns a declaration. It compares by
//! [`TypeId`], so two targets are equal exactly when they refer to the same
//! Rust type, regardless of how the type name prints.
//!
//! A [`PropertyRef`] pairs a target with one member name and is the identity
//! carried by every resolved column.

use std::{
    any::{TypeId, type_name},
    fmt,
    hash::{Hash, Hasher}
};

/// Identity of a declaring structure.
///
/// # Example
///
/// ```rust
/// use entity_meta_core::Target;
///
/// struct User;
///
/// let target = Target::of::<User>();
/// assert_eq!(target, Target::of::<User>());
/// assert_eq!(target.short_name(), "User");
/// ```
#[derive(Clone, Copy)]
pub struct Target {
    id:   TypeId,
    name: &'static str
}

impl Target {
    /// Target for the type `T`.
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id:   TypeId::of::<T>(),
            name: type_name::<T>()
        }
    }

    /// Full type path as reported by [`std::any::type_name`].
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.name
    }

    /// Last path segment of the type name, without generic arguments.
    ///
    /// `my_app::models::User` becomes `User`, `Wrapper<my_app::User>` becomes
    /// `Wrapper`.
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        let base = self.name.split('<').next().unwrap_or(self.name);
        base.rsplit("::").next().unwrap_or(base)
    }
}

impl PartialEq for Target {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Target {}

impl Hash for Target {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Target").field(&self.name).finish()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A declared member: owning structure plus member name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyRef {
    target:        Target,
    property_name: String
}

impl PropertyRef {
    /// Create a property identity.
    #[must_use]
    pub fn new(target: Target, property_name: impl Into<String>) -> Self {
        Self {
            target,
            property_name: property_name.into()
        }
    }

    /// Owning structure.
    #[must_use]
    pub const fn target(&self) -> Target {
        self.target
    }

    /// Member name as declared.
    #[must_use]
    pub fn property_name(&self) -> &str {
        &self.property_name
    }
}

impl fmt::Display for PropertyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.target.short_name(), self.property_name)
    }
}

/// Raw args that belong to some structure.
///
/// Implemented by every registry entry so collections can be filtered
/// generically.
pub trait TargetedArgs {
    /// Owning structure.
    fn target(&self) -> Target;
}

/// Raw args that belong to one member of a structure.
pub trait PropertyArgs: TargetedArgs {
    /// Member name.
    fn property_name(&self) -> &str;
}
