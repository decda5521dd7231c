//! # ember_component
//!
//! Identity primitives shared by the script side and the host side of the
//! Ember boundary.
//!
//! This crate provides:
//!
//! - [`Entity`] — lightweight `u64` entity identifiers with a `0` sentinel.
//! - [`EntityAllocator`] — monotonically increasing ID allocator for hosts.
//! - [`Component`] trait — the contract a component kind must satisfy to be
//!   addressed across the boundary.
//! - [`ComponentTypeId`] — the runtime kind token both sides agree on.

pub mod component;
pub mod entity;

pub use component::{Component, ComponentTypeId};
pub use entity::{Entity, EntityAllocator};
