//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no internal timers
//! - Seeded RNG only
//! - Fixed step order within a tick
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod entities;
pub mod lanes;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use collision::{Aabb, intersects};
pub use entities::{Collectible, Obstacle, ObstacleKind, Player};
pub use lanes::{Direction, Lane, LaneLayout};
pub use snapshot::{CollectiblePose, ObstaclePose, PlayerPose, SessionMetrics, Snapshot};
pub use spawn::{CollectiblePattern, SpawnPlan, SpawnPolicy};
pub use state::{GameEvent, GamePhase, GameSession, RunSummary};
pub use tick::{TickInput, tick};
