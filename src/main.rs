//! Flappy Sim entry point
//!
//! The browser build is driven from JavaScript through `platform::web`.
//! Natively this runs a headless attract-mode session: the autopilot plays
//! against the real engine at a simulated 60 Hz refresh and the best score
//! is kept in the user's data directory.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flappy_sim::autopilot::Autopilot;
    use flappy_sim::consts::SIM_DT;
    use flappy_sim::persistence::FileStore;
    use flappy_sim::platform::FrameDriver;
    use flappy_sim::{Engine, Theme, Tuning};

    env_logger::init();
    log::info!("Flappy Sim (native) starting...");

    // Configuration, then engine, then the frame driver
    let tuning = Tuning::default();
    let theme = Theme::day();
    let store = FileStore::default_location();
    log::info!("Best score file: {}", store.path().display());

    let mut engine = match Engine::new(tuning, store) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("Invalid tuning: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("Theme '{}', seed {}", theme.name, engine.seed());

    let mut driver = FrameDriver::default();
    let pilot = Autopilot::default();

    // Ten simulated minutes at one tick per frame
    let frames = 60 * 60 * 10;
    for _ in 0..frames {
        pilot.drive(&mut engine);
        driver.advance(&mut engine, SIM_DT);
        if engine.is_game_over() {
            break;
        }
    }

    let snapshot = engine.snapshot();
    println!(
        "Demo finished: score {}, best {}, phase {:?}",
        snapshot.score, snapshot.best, snapshot.phase
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
