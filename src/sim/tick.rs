//! Per-frame simulation tick
//!
//! Core game loop that advances a running session deterministically. The
//! order of the steps below is fixed: reordering them changes scoring for a
//! given seed.

use serde::{Deserialize, Serialize};

use super::collision::intersects;
use super::lanes::Direction;
use super::state::{GameEvent, GamePhase, GameSession};
use crate::consts::{DISTANCE_PER_SPEED, SCROLL_WRAP};

/// Input intents for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Lane change left (edge: true only on the tick the key went down)
    pub move_left: bool,
    /// Lane change right (edge)
    pub move_right: bool,
    /// Jump (level: true while held, ignored while airborne)
    pub jump: bool,
}

/// Advance a running session by one tick.
///
/// Returns false without touching the session unless it is Running.
pub fn tick(session: &mut GameSession, input: &TickInput) -> bool {
    if session.phase != GamePhase::Running {
        return false;
    }

    session.events.clear();
    session.time_ticks += 1;

    // 1. Player input and motion
    if input.move_left {
        session
            .player
            .request_lane_change(Direction::Left, &session.lanes);
    }
    if input.move_right {
        session
            .player
            .request_lane_change(Direction::Right, &session.lanes);
    }
    if input.jump {
        session.player.request_jump(session.config.jump_power);
    }
    session
        .player
        .advance(session.speed, session.config.gravity);

    // 2. Speed ramp
    let max_speed = session.config.max_speed;
    let was_capped = session.speed >= max_speed;
    session.speed = (session.speed + session.config.speed_increase).min(max_speed);
    if !was_capped && session.speed >= max_speed {
        session.events.push(GameEvent::MaxSpeedReached);
        log::info!("Max speed reached after {} ticks", session.time_ticks);
    }
    let speed = session.speed;

    // 3. Distance
    session.distance += speed * DISTANCE_PER_SPEED;
    session.scroll_offset += speed;
    if session.scroll_offset > SCROLL_WRAP {
        session.scroll_offset = 0.0;
    }

    // 4. Spawning
    let plan = session
        .spawner
        .step(speed, &session.config, &mut session.rng);
    if let Some((lane, kind)) = plan.obstacle {
        session.spawn_obstacle(lane, kind);
    }
    if let Some(pattern) = plan.collectibles {
        session.spawn_collectibles(pattern);
    }

    let player_box = session.player.bounds();

    // 5. Obstacles: the first hit ends the run and nothing else is processed
    let mut crashed_into = None;
    for obstacle in &mut session.obstacles {
        obstacle.advance(speed);
        if intersects(&player_box, &obstacle.bounds()) {
            crashed_into = Some(obstacle.id);
            break;
        }
    }
    if let Some(obstacle_id) = crashed_into {
        session.phase = GamePhase::GameOver;
        session.events.push(GameEvent::Crashed { obstacle_id });
        log::info!(
            "Game over: hit obstacle {} (score {}, distance {}m)",
            obstacle_id,
            session.score,
            session.distance.floor()
        );
        return true;
    }

    let pass_line = session.player.pos.y - session.config.pass_margin;
    for obstacle in &mut session.obstacles {
        if obstacle.pos.y < pass_line && obstacle.mark_passed() {
            session.score += session.config.pass_bonus;
            session
                .events
                .push(GameEvent::ObstaclePassed { id: obstacle.id });
        }
    }
    let obstacle_offscreen = session.config.obstacle_offscreen_y;
    session
        .obstacles
        .retain(|o| !o.is_off_screen(obstacle_offscreen));

    // 6. Collectibles
    for collectible in &mut session.collectibles {
        collectible.advance(speed);
        if !collectible.collected && intersects(&player_box, &collectible.bounds()) {
            collectible.collected = true;
            session.score += session.config.collect_bonus;
            session
                .events
                .push(GameEvent::CollectibleCollected { id: collectible.id });
        }
    }
    let collectible_offscreen = session.config.collectible_offscreen_y;
    session
        .collectibles
        .retain(|c| !c.collected && !c.is_off_screen(collectible_offscreen));

    log::trace!(
        "tick {}: speed {:.3}, {} obstacles, {} collectibles",
        session.time_ticks,
        speed,
        session.obstacles.len(),
        session.collectibles.len()
    );
    true
}

impl GameSession {
    /// Advance one frame; see [`tick`]
    pub fn tick(&mut self, input: &TickInput) -> bool {
        tick(self, input)
    }
}
