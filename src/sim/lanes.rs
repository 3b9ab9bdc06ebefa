//! Lane geometry
//!
//! Three fixed tracks centered on the play field. Lanes are identified by
//! [`Lane`] so an out-of-range lane index cannot be represented.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::consts::LANE_COUNT;

/// One of the three lateral tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Lane {
    Left,
    #[default]
    Center,
    Right,
}

/// Lane change direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Lane {
    pub const ALL: [Lane; LANE_COUNT] = [Lane::Left, Lane::Center, Lane::Right];

    /// Lane index (0 = left, 2 = right)
    pub fn index(self) -> usize {
        match self {
            Lane::Left => 0,
            Lane::Center => 1,
            Lane::Right => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Neighbouring lane in `direction`, or None at the edge (no wraparound)
    pub fn step(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Left => self.index().checked_sub(1).and_then(Self::from_index),
            Direction::Right => Self::from_index(self.index() + 1),
        }
    }
}

/// Lane index → horizontal coordinate lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneLayout {
    xs: [f32; LANE_COUNT],
}

impl LaneLayout {
    /// Lanes centered on `canvas_width`, spaced by `lane_width`
    pub fn new(canvas_width: f32, lane_width: f32) -> Self {
        let center = canvas_width / 2.0;
        Self {
            xs: [center - lane_width, center, center + lane_width],
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.canvas_width, config.lane_width)
    }

    #[inline]
    pub fn lane_x(&self, lane: Lane) -> f32 {
        self.xs[lane.index()]
    }
}

impl Default for LaneLayout {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_positions() {
        let lanes = LaneLayout::default();
        assert_eq!(lanes.lane_x(Lane::Left), 200.0);
        assert_eq!(lanes.lane_x(Lane::Center), 400.0);
        assert_eq!(lanes.lane_x(Lane::Right), 600.0);
    }

    #[test]
    fn test_index_roundtrip() {
        for lane in Lane::ALL {
            assert_eq!(Lane::from_index(lane.index()), Some(lane));
        }
        assert_eq!(Lane::from_index(3), None);
    }

    #[test]
    fn test_step_stops_at_edges() {
        assert_eq!(Lane::Left.step(Direction::Left), None);
        assert_eq!(Lane::Right.step(Direction::Right), None);
        assert_eq!(Lane::Center.step(Direction::Left), Some(Lane::Left));
        assert_eq!(Lane::Center.step(Direction::Right), Some(Lane::Right));
        assert_eq!(Lane::Left.step(Direction::Right), Some(Lane::Center));
    }
}
