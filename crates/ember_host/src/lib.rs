//! # ember_host
//!
//! The in-process reference host for the Ember scripting boundary.
//!
//! Where `ember_script` declares the call surface, this crate fulfils it:
//!
//! - [`Scene`] — entity records with type-erased component storage.
//! - [`ComponentRegistry`] — the kind-token registry mapping each
//!   [`ComponentTypeId`](ember_component::ComponentTypeId) to construct
//!   and clone functions, registered once at host construction.
//! - [`SceneHost`] — the [`ScriptHost`](ember_script::ScriptHost)
//!   implementation, with the conventions scripts rely on: id lookups
//!   miss with the `0` sentinel, stale ids surface as recoverable errors,
//!   and the quaternion is the one canonical rotation state.

pub mod host;
pub mod registry;
pub mod scene;

pub use host::SceneHost;
pub use registry::{ComponentRegistry, ComponentVTable};
pub use scene::Scene;
