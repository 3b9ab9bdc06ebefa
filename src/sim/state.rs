//! Session state and lifecycle
//!
//! A [`GameSession`] owns every entity of one run plus the counters
//! (score, distance, speed). It moves through Idle → Running → GameOver and
//! back to Idle on reset.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entities::{Collectible, Obstacle, ObstacleKind, Player};
use super::lanes::{Lane, LaneLayout};
use super::spawn::{CollectiblePattern, SpawnPolicy};
use crate::config::{ConfigError, GameConfig};

/// Coarse session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Reset, waiting for start
    #[default]
    Idle,
    /// Simulation advancing every tick
    Running,
    /// Player hit an obstacle; terminal until reset
    GameOver,
}

/// Things that happened during the most recent tick (for audio/render)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ObstacleSpawned {
        id: u32,
        lane: Lane,
        kind: ObstacleKind,
    },
    CollectiblesSpawned {
        pattern: CollectiblePattern,
        count: usize,
    },
    ObstaclePassed {
        id: u32,
    },
    CollectibleCollected {
        id: u32,
    },
    MaxSpeedReached,
    Crashed {
        obstacle_id: u32,
    },
}

/// End-of-run figures for the game-over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub score: u64,
    /// Whole metres travelled
    pub distance_m: u64,
    pub ticks: u64,
}

/// One run of the game
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Seed the RNG was created from
    pub seed: u64,
    pub config: GameConfig,
    pub lanes: LaneLayout,
    pub phase: GamePhase,
    pub score: u64,
    pub distance: f32,
    pub speed: f32,
    /// Ticks simulated since the last reset
    pub time_ticks: u64,
    /// Background scroll position (render-only)
    pub scroll_offset: f32,
    pub player: Player,
    /// Active obstacles (order irrelevant)
    pub obstacles: Vec<Obstacle>,
    /// Active collectibles (order irrelevant)
    pub collectibles: Vec<Collectible>,
    pub spawner: SpawnPolicy,
    /// Events from the most recent applied tick
    pub(crate) events: Vec<GameEvent>,
    /// Shared random source for spawning; survives reset
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameSession {
    /// New idle session with the default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(GameConfig::default(), seed)
    }

    /// New idle session with custom tuning
    pub fn with_config(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    fn build(config: GameConfig, seed: u64) -> Self {
        let lanes = LaneLayout::from_config(&config);
        let player = Player::new(&config, &lanes);
        Self {
            seed,
            speed: config.base_speed,
            lanes,
            player,
            config,
            phase: GamePhase::Idle,
            score: 0,
            distance: 0.0,
            time_ticks: 0,
            scroll_offset: 0.0,
            obstacles: Vec::new(),
            collectibles: Vec::new(),
            spawner: SpawnPolicy::new(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Idle → Running; returns false in any other phase
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Idle {
            return false;
        }
        self.phase = GamePhase::Running;
        log::info!("Run started (seed {})", self.seed);
        true
    }

    /// Back to Idle with a fresh player, no entities and zeroed counters
    pub fn reset(&mut self) {
        self.player = Player::new(&self.config, &self.lanes);
        self.obstacles.clear();
        self.collectibles.clear();
        self.spawner = SpawnPolicy::new();
        self.events.clear();
        self.phase = GamePhase::Idle;
        self.score = 0;
        self.distance = 0.0;
        self.speed = self.config.base_speed;
        self.time_ticks = 0;
        self.scroll_offset = 0.0;
        log::debug!("Session reset");
    }

    /// Reset and immediately start ("play again")
    pub fn restart(&mut self) -> bool {
        self.reset();
        self.start()
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Events recorded by the most recent applied tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            score: self.score,
            distance_m: self.distance.floor() as u64,
            ticks: self.time_ticks,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add an obstacle at the far edge of `lane`
    pub fn spawn_obstacle(&mut self, lane: Lane, kind: ObstacleKind) -> u32 {
        let id = self.next_entity_id();
        self.obstacles
            .push(Obstacle::new(id, lane, kind, &self.config, &self.lanes));
        self.events.push(GameEvent::ObstacleSpawned { id, lane, kind });
        log::debug!("Spawned {:?} obstacle {} in lane {}", kind, id, lane.index());
        id
    }

    /// Add a collectible formation at the far edge
    pub fn spawn_collectibles(&mut self, pattern: CollectiblePattern) -> usize {
        let placements = pattern.placements(
            self.config.collectible_run_length,
            self.config.collectible_run_spacing,
        );
        let count = placements.len();
        for (lane, y_offset) in placements {
            let id = self.next_entity_id();
            self.collectibles.push(Collectible::new(
                id,
                lane,
                y_offset,
                &self.config,
                &self.lanes,
            ));
        }
        self.events
            .push(GameEvent::CollectiblesSpawned { pattern, count });
        log::debug!("Spawned {:?} ({} collectibles)", pattern, count);
        count
    }
}
