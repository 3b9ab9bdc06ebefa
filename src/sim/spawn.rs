//! Spawn policy
//!
//! Spawning is driven by distance countdowns rather than tick counts, so
//! entity density on screen stays the same as the scroll speed ramps up.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entities::ObstacleKind;
use super::lanes::Lane;
use crate::config::GameConfig;
use crate::consts::LANE_COUNT;

/// Collectible formations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectiblePattern {
    /// One collectible
    Single(Lane),
    /// A vertical line of collectibles in one lane
    Run(Lane),
    /// One collectible in every lane
    Row,
}

impl CollectiblePattern {
    /// Lane and vertical offset of each collectible in the formation
    pub fn placements(&self, run_length: usize, run_spacing: f32) -> Vec<(Lane, f32)> {
        match *self {
            CollectiblePattern::Single(lane) => vec![(lane, 0.0)],
            CollectiblePattern::Run(lane) => (0..run_length)
                .map(|i| (lane, -(i as f32) * run_spacing))
                .collect(),
            CollectiblePattern::Row => Lane::ALL.iter().map(|&lane| (lane, 0.0)).collect(),
        }
    }
}

/// What the policy decided to spawn this tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpawnPlan {
    pub obstacle: Option<(Lane, ObstacleKind)>,
    pub collectibles: Option<CollectiblePattern>,
}

/// Distance countdowns until the next obstacle and collectible spawn
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpawnPolicy {
    pub distance_until_next_obstacle: f32,
    pub distance_until_next_collectible: f32,
}

fn random_lane<R: Rng>(rng: &mut R) -> Lane {
    Lane::ALL[rng.random_range(0..LANE_COUNT)]
}

impl SpawnPolicy {
    /// Both countdowns start expired, so the first running tick spawns
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume `speed` worth of distance and decide what to spawn
    pub fn step<R: Rng>(
        &mut self,
        speed: f32,
        config: &GameConfig,
        rng: &mut R,
    ) -> SpawnPlan {
        let mut plan = SpawnPlan::default();

        self.distance_until_next_obstacle -= speed;
        if self.distance_until_next_obstacle <= 0.0 {
            let lane = random_lane(rng);
            let kind = if rng.random_bool(0.5) {
                ObstacleKind::Box
            } else {
                ObstacleKind::Spike
            };
            plan.obstacle = Some((lane, kind));
            self.distance_until_next_obstacle =
                rng.random_range(config.obstacle_gap_min..config.obstacle_gap_max);
        }

        self.distance_until_next_collectible -= speed;
        if self.distance_until_next_collectible <= 0.0 {
            let roll: f32 = rng.random();
            let pattern = if roll < 0.3 {
                CollectiblePattern::Single(random_lane(rng))
            } else if roll < 0.7 {
                CollectiblePattern::Run(random_lane(rng))
            } else {
                CollectiblePattern::Row
            };
            plan.collectibles = Some(pattern);
            self.distance_until_next_collectible =
                rng.random_range(config.collectible_gap_min..config.collectible_gap_max);
        }

        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_first_step_spawns_both() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut policy = SpawnPolicy::new();

        let plan = policy.step(1.0, &config, &mut rng);
        assert!(plan.obstacle.is_some());
        assert!(plan.collectibles.is_some());
    }

    #[test]
    fn test_countdowns_reset_into_configured_ranges() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(2);

        for _ in 0..200 {
            let mut policy = SpawnPolicy::new();
            policy.step(1.0, &config, &mut rng);
            assert!(policy.distance_until_next_obstacle >= config.obstacle_gap_min);
            assert!(policy.distance_until_next_obstacle < config.obstacle_gap_max);
            assert!(policy.distance_until_next_collectible >= config.collectible_gap_min);
            assert!(policy.distance_until_next_collectible < config.collectible_gap_max);
        }
    }

    #[test]
    fn test_no_spawn_until_countdown_expires() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut policy = SpawnPolicy {
            distance_until_next_obstacle: 10.0,
            distance_until_next_collectible: 10.0,
        };

        for _ in 0..4 {
            assert_eq!(policy.step(2.0, &config, &mut rng), SpawnPlan::default());
        }
        // 10 - 5 * 2 = 0 triggers both
        let plan = policy.step(2.0, &config, &mut rng);
        assert!(plan.obstacle.is_some());
        assert!(plan.collectibles.is_some());
    }

    #[test]
    fn test_higher_speed_spawns_more_often_per_tick() {
        let config = GameConfig::default();
        let count = |speed: f32| {
            let mut rng = Pcg32::seed_from_u64(4);
            let mut policy = SpawnPolicy::new();
            (0..2000)
                .filter(|_| policy.step(speed, &config, &mut rng).obstacle.is_some())
                .count()
        };
        assert!(count(8.0) > count(1.0) * 4);
    }

    #[test]
    fn test_same_seed_same_plans() {
        let config = GameConfig::default();
        let run = || {
            let mut rng = Pcg32::seed_from_u64(99);
            let mut policy = SpawnPolicy::new();
            (0..500)
                .map(|_| policy.step(3.0, &config, &mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_all_patterns_and_kinds_appear() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(5);
        let mut policy = SpawnPolicy::new();
        let (mut singles, mut runs, mut rows) = (0, 0, 0);
        let (mut boxes, mut spikes) = (0, 0);
        let mut lanes_seen = [false; LANE_COUNT];

        for _ in 0..20_000 {
            let plan = policy.step(10.0, &config, &mut rng);
            if let Some((lane, kind)) = plan.obstacle {
                lanes_seen[lane.index()] = true;
                match kind {
                    ObstacleKind::Box => boxes += 1,
                    ObstacleKind::Spike => spikes += 1,
                }
            }
            match plan.collectibles {
                Some(CollectiblePattern::Single(_)) => singles += 1,
                Some(CollectiblePattern::Run(_)) => runs += 1,
                Some(CollectiblePattern::Row) => rows += 1,
                None => {}
            }
        }

        assert!(lanes_seen.iter().all(|&seen| seen));
        assert!(boxes > 0 && spikes > 0);
        assert!(singles > 0 && runs > 0 && rows > 0);
        // Runs are the most likely pattern (40%)
        assert!(runs > singles && runs > rows);
    }

    #[test]
    fn test_pattern_placements() {
        assert_eq!(
            CollectiblePattern::Single(Lane::Right).placements(5, 40.0),
            vec![(Lane::Right, 0.0)]
        );
        assert_eq!(
            CollectiblePattern::Run(Lane::Left).placements(5, 40.0),
            vec![
                (Lane::Left, 0.0),
                (Lane::Left, -40.0),
                (Lane::Left, -80.0),
                (Lane::Left, -120.0),
                (Lane::Left, -160.0),
            ]
        );
        assert_eq!(
            CollectiblePattern::Row.placements(5, 40.0),
            vec![(Lane::Left, 0.0), (Lane::Center, 0.0), (Lane::Right, 0.0)]
        );
    }
}
