//! Lane Runner entry point
//!
//! Native builds run a headless autopilot demo; the browser build is driven
//! through `lane_runner::web`.

#[cfg(not(target_arch = "wasm32"))]
use std::process::ExitCode;

/// Stop the demo even if the autopilot never crashes
#[cfg(not(target_arch = "wasm32"))]
const MAX_DEMO_TICKS: u64 = 60 * 60 * 10;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    use lane_runner::GameConfig;
    use lane_runner::sim::{GameSession, autopilot};

    env_logger::init();
    log::info!("Lane Runner (native) starting...");

    // Usage: lane-runner [seed] [config.json]
    let mut args = std::env::args().skip(1);
    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::error!("Invalid seed: {}", e);
            return ExitCode::FAILURE;
        }
        None => 42,
    };
    let config = match args.next() {
        Some(path) => match GameConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{} ({})", e, path);
                return ExitCode::FAILURE;
            }
        },
        None => GameConfig::default(),
    };

    let mut session = match GameSession::with_config(config, seed) {
        Ok(session) => session,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    session.start();
    while session.is_running() && session.time_ticks < MAX_DEMO_TICKS {
        let input = autopilot(&session);
        session.tick(&input);
    }

    let summary = session.summary();
    log::info!(
        "Run finished after {} ticks: score {}, distance {}m ({:?})",
        summary.ticks,
        summary.score,
        summary.distance_m,
        session.phase
    );

    match serde_json::to_string_pretty(&serde_json::json!({
        "seed": seed,
        "summary": summary,
        "snapshot": session.snapshot(),
    })) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to serialize run: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is lane_runner::web, this is just to satisfy the compiler
}
