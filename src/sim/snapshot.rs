//! Read-only view of a session for the render layer

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::entities::ObstacleKind;
use super::lanes::Lane;
use super::state::{GamePhase, GameSession};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerPose {
    pub lane: Lane,
    pub pos: Vec2,
    pub is_jumping: bool,
    pub anim_phase: f32,
    /// Grounded bob to add to `pos.y` when drawing
    pub bob_offset: f32,
    pub bounds: Aabb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstaclePose {
    pub id: u32,
    pub lane: Lane,
    pub kind: ObstacleKind,
    pub pos: Vec2,
    pub passed: bool,
    pub bounds: Aabb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectiblePose {
    pub id: u32,
    pub lane: Lane,
    pub pos: Vec2,
    pub radius: f32,
    pub rotation: f32,
    pub collected: bool,
}

/// HUD figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionMetrics {
    pub phase: GamePhase,
    pub score: u64,
    pub distance: f32,
    /// Whole metres for display
    pub distance_m: u64,
    pub speed: f32,
    /// Speed bar fill, 0..=1
    pub speed_fraction: f32,
    pub ticks: u64,
    pub scroll_offset: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub player: PlayerPose,
    pub obstacles: Vec<ObstaclePose>,
    pub collectibles: Vec<CollectiblePose>,
    pub metrics: SessionMetrics,
}

impl GameSession {
    pub fn snapshot(&self) -> Snapshot {
        let player = &self.player;
        Snapshot {
            player: PlayerPose {
                lane: player.lane,
                pos: player.pos,
                is_jumping: player.is_jumping,
                anim_phase: player.anim_phase,
                bob_offset: player.bob_offset(),
                bounds: player.bounds(),
            },
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstaclePose {
                    id: o.id,
                    lane: o.lane,
                    kind: o.kind,
                    pos: o.pos,
                    passed: o.passed(),
                    bounds: o.bounds(),
                })
                .collect(),
            collectibles: self
                .collectibles
                .iter()
                .map(|c| CollectiblePose {
                    id: c.id,
                    lane: c.lane,
                    pos: c.pos,
                    radius: c.radius,
                    rotation: c.rotation,
                    collected: c.collected,
                })
                .collect(),
            metrics: SessionMetrics {
                phase: self.phase,
                score: self.score,
                distance: self.distance,
                distance_m: self.distance.floor() as u64,
                speed: self.speed,
                speed_fraction: (self.speed / self.config.max_speed).clamp(0.0, 1.0),
                ticks: self.time_ticks,
                scroll_offset: self.scroll_offset,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::spawn::CollectiblePattern;
    use crate::sim::tick::TickInput;

    #[test]
    fn test_idle_snapshot() {
        let snap = GameSession::new(5).snapshot();
        assert_eq!(snap.metrics.phase, GamePhase::Idle);
        assert_eq!(snap.metrics.score, 0);
        assert_eq!(snap.metrics.distance_m, 0);
        assert!((snap.metrics.speed_fraction - BASE_SPEED / MAX_SPEED).abs() < 1e-6);
        assert_eq!(snap.player.lane, Lane::Center);
        assert_eq!(snap.player.pos, Vec2::new(400.0, GROUND_Y));
        assert!(snap.obstacles.is_empty());
        assert!(snap.collectibles.is_empty());
    }

    #[test]
    fn test_snapshot_mirrors_entities() {
        let mut session = GameSession::new(5);
        let id = session.spawn_obstacle(Lane::Right, ObstacleKind::Spike);
        session.spawn_collectibles(CollectiblePattern::Row);
        session.distance = 57.8;
        session.speed = MAX_SPEED;

        let snap = session.snapshot();
        assert_eq!(snap.obstacles.len(), 1);
        assert_eq!(snap.obstacles[0].id, id);
        assert_eq!(snap.obstacles[0].kind, ObstacleKind::Spike);
        assert_eq!(snap.obstacles[0].pos, Vec2::new(600.0, CANVAS_HEIGHT));
        assert!(!snap.obstacles[0].passed);
        assert_eq!(snap.collectibles.len(), 3);
        assert_eq!(snap.metrics.distance_m, 57);
        assert_eq!(snap.metrics.speed_fraction, 1.0);
    }

    #[test]
    fn test_snapshot_tracks_running_session() {
        let mut session = GameSession::new(5);
        session.start();
        for _ in 0..30 {
            session.tick(&TickInput::default());
        }
        let snap = session.snapshot();
        assert_eq!(snap.metrics.ticks, 30);
        assert_eq!(snap.metrics.phase, session.phase);
        assert_eq!(snap.obstacles.len(), session.obstacles.len());
        assert_eq!(snap.collectibles.len(), session.collectibles.len());
        assert_eq!(snap.player.bob_offset, session.player.bob_offset());
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let mut session = GameSession::new(5);
        session.start();
        session.tick(&TickInput::default());
        let json = serde_json::to_string(&session.snapshot()).unwrap();
        assert!(json.contains("\"phase\":\"Running\""));
        assert!(json.contains("\"obstacles\""));
    }
}
