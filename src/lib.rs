//! Lane Runner - A three-lane endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lanes, entities, spawning, collisions, session)
//! - `config`: Data-driven game tuning
//! - `input`: Keyboard state to per-tick intents
//! - `web`: wasm-bindgen driver (wasm32 only)

pub mod config;
pub mod input;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{ConfigError, GameConfig};
pub use input::{Key, KeyboardState};

/// Game configuration constants (defaults for [`GameConfig`])
pub mod consts {
    /// Play field dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 500.0;

    /// Number of lanes and spacing between lane centers
    pub const LANE_COUNT: usize = 3;
    pub const LANE_WIDTH: f32 = 200.0;

    /// Vertical physics (pixels/tick², pixels/tick)
    pub const GRAVITY: f32 = 1.2;
    pub const JUMP_POWER: f32 = 22.0;

    /// Scroll speed ramp (pixels/tick)
    pub const BASE_SPEED: f32 = 1.0;
    pub const SPEED_INCREASE: f32 = 0.001;
    pub const MAX_SPEED: f32 = 12.0;
    /// Distance accumulated per unit of speed each tick
    pub const DISTANCE_PER_SPEED: f32 = 0.1;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    pub const GROUND_Y: f32 = 320.0;
    /// Fraction of the remaining horizontal distance covered per tick
    pub const LANE_EASE: f32 = 0.2;
    pub const PLAYER_ANIM_SPEED: f32 = 0.2;
    /// Grounded bob amplitude (render-only)
    pub const PLAYER_BOB: f32 = 3.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 50.0;
    pub const OBSTACLE_HEIGHT: f32 = 60.0;
    pub const OBSTACLE_OFFSCREEN_Y: f32 = -100.0;
    /// How far behind the player an obstacle must be to count as passed
    pub const PASS_MARGIN: f32 = 100.0;

    /// Collectible defaults
    pub const COLLECTIBLE_RADIUS: f32 = 15.0;
    pub const COLLECTIBLE_OFFSCREEN_Y: f32 = -50.0;
    pub const COLLECTIBLE_SPIN: f32 = 0.1;
    pub const COLLECTIBLE_RUN_LENGTH: usize = 5;
    pub const COLLECTIBLE_RUN_SPACING: f32 = 40.0;

    /// Spawn countdown ranges (distance units, half-open)
    pub const OBSTACLE_GAP_MIN: f32 = 100.0;
    pub const OBSTACLE_GAP_MAX: f32 = 250.0;
    pub const COLLECTIBLE_GAP_MIN: f32 = 80.0;
    pub const COLLECTIBLE_GAP_MAX: f32 = 200.0;

    /// Score bonuses
    pub const PASS_BONUS: u64 = 10;
    pub const COLLECT_BONUS: u64 = 5;

    /// Background scroll offset wraps past this value (render-only)
    pub const SCROLL_WRAP: f32 = 100.0;
}
