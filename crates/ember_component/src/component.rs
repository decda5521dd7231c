//! Component kinds and their runtime tokens.
//!
//! `has-component` / `add-component` calls need a value that names a
//! component *kind* and means the same thing on both sides of the
//! boundary. Instead of a reflection type object, Ember uses
//! [`ComponentTypeId`]: the FNV-1a 64-bit hash of the kind's string name.
//! Any side that hashes the same UTF-8 name gets the same token, so the
//! registry needs no negotiation at startup.

use serde::{Deserialize, Serialize};

/// Runtime token identifying a component kind.
///
/// Derived from the kind's string name with FNV-1a 64-bit:
///
/// ```text
/// hash = 0xcbf29ce484222325            (offset basis)
/// for each byte of the name:
///     hash ^= byte
///     hash *= 0x00000100000001b3       (prime, wrapping)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentTypeId(pub u64);

impl ComponentTypeId {
    const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0100_0000_01b3;

    /// Token for a kind name. `const` so tokens can be matched on and
    /// registered without any runtime setup.
    #[must_use]
    pub const fn from_name(name: &str) -> Self {
        let bytes = name.as_bytes();
        let mut hash = Self::FNV_OFFSET_BASIS;
        let mut i = 0;
        while i < bytes.len() {
            hash ^= bytes[i] as u64;
            hash = hash.wrapping_mul(Self::FNV_PRIME);
            i += 1;
        }
        Self(hash)
    }

    /// Token for a Rust component type `T`.
    #[must_use]
    pub fn of<T: Component>() -> Self {
        Self::from_name(T::type_name())
    }
}

/// A component kind addressable across the boundary.
///
/// Implementors are host-side state bundles; the script side only ever
/// names them by token. `Send + Sync + 'static` so hosts can keep them in
/// shared storage.
///
/// # Examples
///
/// ```rust
/// use ember_component::{Component, ComponentTypeId};
///
/// #[derive(Debug, Default, Clone)]
/// struct Health {
///     current: f32,
///     max: f32,
/// }
///
/// impl Component for Health {
///     fn type_name() -> &'static str { "Health" }
/// }
///
/// assert_eq!(Health::component_type_id(), ComponentTypeId::from_name("Health"));
/// ```
pub trait Component: Send + Sync + 'static {
    /// The kind's stable string name, e.g. `"Transform"`.
    fn type_name() -> &'static str;

    /// The kind token, hashed from [`Component::type_name()`].
    fn component_type_id() -> ComponentTypeId {
        ComponentTypeId::from_name(Self::type_name())
    }
}
