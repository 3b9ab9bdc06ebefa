//! Player, obstacle and collectible models
//!
//! Gameplay state and cosmetic state share these structs, but the cosmetic
//! fields (`anim_phase`, `rotation`) are never read by collision or spawning.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::lanes::{Direction, Lane, LaneLayout};
use crate::config::GameConfig;
use crate::consts::{COLLECTIBLE_SPIN, LANE_EASE, PLAYER_ANIM_SPEED, PLAYER_BOB};

/// The runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub lane: Lane,
    /// Current position; `pos.y` is the feet, `pos.x` eases toward `target_x`
    pub pos: Vec2,
    pub target_x: f32,
    pub velocity_y: f32,
    pub is_jumping: bool,
    pub ground_y: f32,
    pub width: f32,
    pub height: f32,
    /// Run cycle phase (render-only)
    pub anim_phase: f32,
}

impl Player {
    /// Grounded player in the center lane
    pub fn new(config: &GameConfig, lanes: &LaneLayout) -> Self {
        let lane = Lane::Center;
        let x = lanes.lane_x(lane);
        Self {
            lane,
            pos: Vec2::new(x, config.ground_y),
            target_x: x,
            velocity_y: 0.0,
            is_jumping: false,
            ground_y: config.ground_y,
            width: config.player_width,
            height: config.player_height,
            anim_phase: 0.0,
        }
    }

    /// Move one lane over; returns false at the edge lanes
    pub fn request_lane_change(&mut self, direction: Direction, lanes: &LaneLayout) -> bool {
        match self.lane.step(direction) {
            Some(lane) => {
                self.lane = lane;
                self.target_x = lanes.lane_x(lane);
                true
            }
            None => false,
        }
    }

    /// Start a jump; returns false while already airborne
    pub fn request_jump(&mut self, jump_power: f32) -> bool {
        if self.is_jumping {
            return false;
        }
        self.velocity_y = -jump_power;
        self.is_jumping = true;
        true
    }

    /// Ease toward the target lane, integrate gravity, land on the ground
    pub fn advance(&mut self, speed: f32, gravity: f32) {
        self.pos.x += (self.target_x - self.pos.x) * LANE_EASE;

        self.velocity_y += gravity;
        self.pos.y += self.velocity_y;

        if self.pos.y >= self.ground_y {
            self.pos.y = self.ground_y;
            self.velocity_y = 0.0;
            self.is_jumping = false;
        }

        self.anim_phase += PLAYER_ANIM_SPEED * speed;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::standing_on(self.pos, self.width, self.height)
    }

    /// Vertical bob while running on the ground (render-only)
    pub fn bob_offset(&self) -> f32 {
        if self.is_jumping {
            0.0
        } else {
            self.anim_phase.sin() * PLAYER_BOB
        }
    }
}

/// Obstacle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ObstacleKind {
    #[default]
    Box,
    Spike,
}

/// A scrolling obstacle; touching one ends the run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub lane: Lane,
    pub kind: ObstacleKind,
    /// Bottom-center anchor
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    passed: bool,
}

impl Obstacle {
    /// New obstacle at the far scroll edge of `lane`
    pub fn new(
        id: u32,
        lane: Lane,
        kind: ObstacleKind,
        config: &GameConfig,
        lanes: &LaneLayout,
    ) -> Self {
        Self {
            id,
            lane,
            kind,
            pos: Vec2::new(lanes.lane_x(lane), config.canvas_height),
            width: config.obstacle_width,
            height: config.obstacle_height,
            passed: false,
        }
    }

    pub fn advance(&mut self, speed: f32) {
        self.pos.y -= speed;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::standing_on(self.pos, self.width, self.height)
    }

    pub fn is_off_screen(&self, offscreen_y: f32) -> bool {
        self.pos.y < offscreen_y
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Flag as passed; returns true only the first time
    pub fn mark_passed(&mut self) -> bool {
        !std::mem::replace(&mut self.passed, true)
    }
}

/// A scrolling pickup worth points
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub id: u32,
    pub lane: Lane,
    /// Center
    pub pos: Vec2,
    pub radius: f32,
    pub collected: bool,
    /// Spin angle (render-only)
    pub rotation: f32,
}

impl Collectible {
    /// New collectible at the far scroll edge of `lane`, shifted by `y_offset`
    pub fn new(
        id: u32,
        lane: Lane,
        y_offset: f32,
        config: &GameConfig,
        lanes: &LaneLayout,
    ) -> Self {
        Self {
            id,
            lane,
            pos: Vec2::new(lanes.lane_x(lane), config.canvas_height + y_offset),
            radius: config.collectible_radius,
            collected: false,
            rotation: 0.0,
        }
    }

    pub fn advance(&mut self, speed: f32) {
        self.pos.y -= speed;
        self.rotation += COLLECTIBLE_SPIN;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::centered(self.pos, self.radius)
    }

    pub fn is_off_screen(&self, offscreen_y: f32) -> bool {
        self.pos.y < offscreen_y
    }
}
