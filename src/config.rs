//! Game tuning
//!
//! Every gameplay constant lives here so a run can be replayed or rebalanced
//! from a JSON file. Defaults come from [`crate::consts`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors produced while loading a [`GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Play field ===
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Horizontal spacing between lane centers
    pub lane_width: f32,

    // === Physics ===
    pub gravity: f32,
    pub jump_power: f32,

    // === Speed ramp ===
    pub base_speed: f32,
    /// Added to speed every running tick until `max_speed`
    pub speed_increase: f32,
    pub max_speed: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    pub ground_y: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub obstacle_height: f32,
    pub obstacle_offscreen_y: f32,
    pub pass_margin: f32,

    // === Collectibles ===
    pub collectible_radius: f32,
    pub collectible_offscreen_y: f32,
    pub collectible_run_length: usize,
    pub collectible_run_spacing: f32,

    // === Spawning (half-open ranges) ===
    pub obstacle_gap_min: f32,
    pub obstacle_gap_max: f32,
    pub collectible_gap_min: f32,
    pub collectible_gap_max: f32,

    // === Scoring ===
    pub pass_bonus: u64,
    pub collect_bonus: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            lane_width: LANE_WIDTH,

            gravity: GRAVITY,
            jump_power: JUMP_POWER,

            base_speed: BASE_SPEED,
            speed_increase: SPEED_INCREASE,
            max_speed: MAX_SPEED,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            ground_y: GROUND_Y,

            obstacle_width: OBSTACLE_WIDTH,
            obstacle_height: OBSTACLE_HEIGHT,
            obstacle_offscreen_y: OBSTACLE_OFFSCREEN_Y,
            pass_margin: PASS_MARGIN,

            collectible_radius: COLLECTIBLE_RADIUS,
            collectible_offscreen_y: COLLECTIBLE_OFFSCREEN_Y,
            collectible_run_length: COLLECTIBLE_RUN_LENGTH,
            collectible_run_spacing: COLLECTIBLE_RUN_SPACING,

            obstacle_gap_min: OBSTACLE_GAP_MIN,
            obstacle_gap_max: OBSTACLE_GAP_MAX,
            collectible_gap_min: COLLECTIBLE_GAP_MIN,
            collectible_gap_max: COLLECTIBLE_GAP_MAX,

            pass_bonus: PASS_BONUS,
            collect_bonus: COLLECT_BONUS,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON (missing fields fall back to defaults) and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        log::info!("Loaded game config");
        Ok(config)
    }

    /// Load and validate a JSON config file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("lane_width", self.lane_width),
            ("gravity", self.gravity),
            ("jump_power", self.jump_power),
            ("base_speed", self.base_speed),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_height", self.obstacle_height),
            ("collectible_radius", self.collectible_radius),
            ("obstacle_gap_min", self.obstacle_gap_min),
            ("collectible_gap_min", self.collectible_gap_min),
        ];
        for (field, value) in positive {
            // Also rejects NaN
            if !(value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be positive",
                });
            }
        }

        if !(self.speed_increase >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "speed_increase",
                reason: "must not be negative",
            });
        }
        if !(self.max_speed >= self.base_speed) {
            return Err(ConfigError::Invalid {
                field: "max_speed",
                reason: "must be at least base_speed",
            });
        }
        if !(self.obstacle_gap_max > self.obstacle_gap_min) {
            return Err(ConfigError::Invalid {
                field: "obstacle_gap_max",
                reason: "must be greater than obstacle_gap_min",
            });
        }
        if !(self.collectible_gap_max > self.collectible_gap_min) {
            return Err(ConfigError::Invalid {
                field: "collectible_gap_max",
                reason: "must be greater than collectible_gap_min",
            });
        }
        if self.collectible_run_length == 0 {
            return Err(ConfigError::Invalid {
                field: "collectible_run_length",
                reason: "must be at least 1",
            });
        }
        if !(self.ground_y > self.player_height && self.ground_y < self.canvas_height) {
            return Err(ConfigError::Invalid {
                field: "ground_y",
                reason: "player must fit between the top edge and the far edge",
            });
        }
        Ok(())
    }
}
