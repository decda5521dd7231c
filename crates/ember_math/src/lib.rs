//! # ember_math
//!
//! Math types for the Ember boundary. Re-exports [`glam`] for linear
//! algebra and defines [`Transform3D`], the spatial component whose fields
//! the scripting façade projects.

pub mod transform;

// Re-export glam types for convenience.
pub use glam::{EulerRot, Mat3, Mat4, Quat, Vec2, Vec3, Vec4};

pub use transform::{EULER_ORDER, Transform3D, WORLD_FORWARD, WORLD_RIGHT, WORLD_UP};
