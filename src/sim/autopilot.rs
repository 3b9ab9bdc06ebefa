//! Demo controller
//!
//! Plays the game from the session state alone, so headless runs stay
//! deterministic for a given seed.

use super::lanes::{Direction, Lane};
use super::state::GameSession;
use super::tick::TickInput;

/// How many ticks ahead an obstacle counts as a threat
const LOOKAHEAD_TICKS: f32 = 30.0;

/// True if an obstacle in `lane` will reach the player soon and is not yet behind them
fn lane_threatened(session: &GameSession, lane: Lane) -> bool {
    let player = &session.player;
    let horizon = player.pos.y + player.height + session.speed * LOOKAHEAD_TICKS;
    session.obstacles.iter().any(|o| {
        o.lane == lane && o.pos.y - o.height < horizon && o.pos.y > player.pos.y - player.height
    })
}

/// True if an uncollected item in `lane` is still ahead of the player
fn lane_has_collectible(session: &GameSession, lane: Lane) -> bool {
    let player = &session.player;
    session
        .collectibles
        .iter()
        .any(|c| c.lane == lane && c.pos.y > player.pos.y - player.height)
}

/// Input the demo player would give this tick
pub fn autopilot(session: &GameSession) -> TickInput {
    let mut input = TickInput::default();
    if !session.is_running() {
        return input;
    }

    let current = session.player.lane;
    let neighbours = [Direction::Left, Direction::Right]
        .into_iter()
        .filter_map(|d| current.step(d).map(|lane| (d, lane)));

    let mut safe = Vec::with_capacity(2);
    for (direction, lane) in neighbours {
        if !lane_threatened(session, lane) {
            safe.push((direction, lane));
        }
    }

    let target = if lane_threatened(session, current) {
        // Dodge, preferring a lane with something to pick up
        safe.iter()
            .find(|(_, lane)| lane_has_collectible(session, *lane))
            .or_else(|| safe.first())
            .map(|(direction, _)| *direction)
    } else if !lane_has_collectible(session, current) {
        safe.iter()
            .find(|(_, lane)| lane_has_collectible(session, *lane))
            .map(|(direction, _)| *direction)
    } else {
        None
    };

    match target {
        Some(Direction::Left) => input.move_left = true,
        Some(Direction::Right) => input.move_right = true,
        None => {}
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entities::ObstacleKind;
    use crate::sim::spawn::CollectiblePattern;

    fn session() -> GameSession {
        let mut session = GameSession::new(8);
        session.spawner.distance_until_next_obstacle = f32::MAX;
        session.spawner.distance_until_next_collectible = f32::MAX;
        session.start();
        session
    }

    #[test]
    fn test_idle_session_gets_no_input() {
        let session = GameSession::new(8);
        assert_eq!(autopilot(&session), TickInput::default());
    }

    #[test]
    fn test_dodges_obstacle_in_current_lane() {
        let mut session = session();
        session.spawn_obstacle(Lane::Center, ObstacleKind::Box);
        session.obstacles[0].pos.y = 420.0;

        let input = autopilot(&session);
        assert!(input.move_left || input.move_right);
    }

    #[test]
    fn test_dodges_toward_collectible() {
        let mut session = session();
        session.spawn_obstacle(Lane::Center, ObstacleKind::Box);
        session.obstacles[0].pos.y = 420.0;
        session.spawn_collectibles(CollectiblePattern::Single(Lane::Right));

        let input = autopilot(&session);
        assert!(input.move_right);
        assert!(!input.move_left);
    }

    #[test]
    fn test_drifts_to_collectible_when_safe() {
        let mut session = session();
        session.spawn_collectibles(CollectiblePattern::Single(Lane::Left));
        let input = autopilot(&session);
        assert!(input.move_left);
    }

    #[test]
    fn test_ignores_obstacle_already_behind() {
        let mut session = session();
        session.spawn_obstacle(Lane::Center, ObstacleKind::Spike);
        session.obstacles[0].pos.y = 150.0;
        assert_eq!(autopilot(&session), TickInput::default());
    }

    #[test]
    fn test_autopilot_outlasts_standing_still() {
        let run = |driven: bool| {
            let mut session = GameSession::new(2024);
            session.start();
            while session.is_running() && session.time_ticks < 20_000 {
                let input = if driven {
                    autopilot(&session)
                } else {
                    TickInput::default()
                };
                session.tick(&input);
            }
            session.time_ticks
        };
        assert!(run(true) > run(false));
    }
}
