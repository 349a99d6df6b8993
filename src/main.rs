//! Void Runner native entry point
//!
//! There is no native window; this runs a headless demo session on a
//! simulated 60 Hz clock with the autopilot at the controls.
//!
//! Usage: `void-runner [config.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use void_runner::highscore::FileStore;
    use void_runner::platform::{FixedStepClock, init_logging};
    use void_runner::sim::autopilot_input;
    use void_runner::{GameConfig, Session};

    /// Ten minutes of play at 60 Hz
    const MAX_FRAMES: u64 = 60 * 60 * 10;

    init_logging();
    log::info!("Void Runner (native, headless) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|json| GameConfig::from_json(&json).map_err(|e| e.to_string()))
        {
            Ok(config) => {
                log::info!("Loaded config from {path}");
                config
            }
            Err(err) => {
                log::error!("Could not load config {path}: {err}");
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut store = FileStore::new("void-runner-highscore.json");
    let mut session = match Session::new(config, seed, &store, 0.0) {
        Ok(session) => session,
        Err(err) => {
            log::error!("Invalid config: {err}");
            std::process::exit(1);
        }
    };

    let mut clock = FixedStepClock::sixty_hz(0.0);
    session.run(&mut clock, MAX_FRAMES, autopilot_input);

    let board = session.state.scoreboard();
    println!("{}  {}  High: {}", board.lives_text(), board.score_text(), board.high_score);
    if board.game_over {
        println!("Game Over");
    }

    if let Err(err) = session.end(&mut store) {
        log::error!("Failed to save high score: {err}");
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser host drives `Session::frame` from requestAnimationFrame
    void_runner::platform::init_logging();
}
