//! The domain module encapsulates the core simulation. It defines the `Cell`, `Mover` and `World`
//! entities, along with the rules governing their interactions.
//!
//! The module has no dependency on Bevy, so the simulation can be stepped and tested without a
//! window.

mod basis;
mod cell;
mod collision;
mod mover;
mod world;

pub use basis::{Angle, Position, Velocity};
pub use cell::{Cell, Team};
pub use collision::overlaps;
pub use mover::Mover;
pub use world::{ArenaConfig, BounceCause, World, WorldError};
