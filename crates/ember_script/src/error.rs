//! Boundary-call error type.

use ember_component::{ComponentTypeId, Entity};

/// Failures a host call can report back to the script side.
///
/// Invalid references are errors, not faults: a script holding a stale
/// handle gets an `Err` it can recover from, never a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    /// The entity id does not name a live entity.
    #[error("no live entity {0}")]
    InvalidEntity(Entity),

    /// The entity is live but does not carry the requested component kind.
    #[error("{entity} has no component of kind {kind:?}")]
    MissingComponent {
        /// The entity the call addressed.
        entity: Entity,
        /// The component kind token the call named.
        kind: ComponentTypeId,
    },

    /// The component kind token is not in the host's registry.
    #[error("component kind {0:?} is not registered with the host")]
    UnknownComponentKind(ComponentTypeId),
}
