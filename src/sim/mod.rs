//! Game simulation module
//!
//! All gameplay logic lives here, free of rendering and platform code:
//! - Seeded RNG only, so a round replays from its seed
//! - Stable iteration order (by entity ID)
//! - Physics and storage are reached through traits

pub mod autopilot;
pub mod collision;
pub mod game;
pub mod physics;
pub mod placement;
pub mod state;
pub mod tick;
pub mod wander;


pub use autopilot::{Autopilot, steer};
pub use collision::{CollisionOutcome, Destroyed, boxes_overlap, player_collision};
pub use game::{Game, Scene};
pub use physics::{ArcadePhysics, Physics};
pub use placement::spawn_y;
pub use state::{Entity, EntityId, EntityKind, GamePhase};
pub use wander::WanderState;
