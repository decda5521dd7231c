//! # ember_script
//!
//! The script-side half of the Ember entity-component boundary.
//!
//! Scripts never touch component storage. They hold typed façades — an
//! [`EntityHandle`] and its [`Transform`] — whose every accessor forwards a
//! synchronous call through the [`ScriptHost`] trait into the engine host,
//! carrying the owning entity's id. Getters re-query the host on every
//! read; nothing is cached on this side, so a script always observes
//! current engine state.
//!
//! ## Call surface
//!
//! [`ScriptHost`] enumerates the full set of entry points, one method per
//! host call, named `<category>_<operation>`. The host owns all semantics;
//! this crate only defines the contract:
//!
//! - identity queries return [`Entity::INVALID`](ember_component::Entity::INVALID)
//!   (id 0) when nothing is found,
//! - component accessors return `Result`, with
//!   [`ScriptError::InvalidEntity`] for stale ids — a destroyed entity
//!   never makes an accessor panic.

pub mod entity;
pub mod error;
pub mod host;
pub mod transform;

#[cfg(test)]
pub(crate) mod mock;

pub use entity::EntityHandle;
pub use error::ScriptError;
pub use host::{ScriptHost, ScriptInstanceId};
pub use transform::Transform;
