//! Spacewar headless host
//!
//! Runs a match between two random pilots on the fixed-step loop and prints
//! the final snapshot as JSON.
//!
//! Usage: `spacewar [TUNING.json] [--seconds N] [--seed N] [--no-vibration] [--cmd "gravity off"]...`

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use spacewar::consts::{MAX_SUBSTEPS, SHIP_COUNT, SIM_DT};
use spacewar::console::run_command;
use spacewar::sim::{GameEvent, GameState, ShipControls, TickInput, tick};
use spacewar::{Settings, Tuning};

/// Host frame time; deliberately not a multiple of the sim step
const FRAME_DT: f32 = 1.0 / 50.0;

struct Options {
    tuning_path: Option<String>,
    seconds: f32,
    seed: u64,
    vibration: bool,
    commands: Vec<String>,
}

impl Options {
    fn from_args() -> Self {
        let mut options = Options {
            tuning_path: None,
            seconds: 60.0,
            seed: 0x5eed,
            vibration: true,
            commands: Vec::new(),
        };
        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seconds" => match args.next().and_then(|s| s.parse().ok()) {
                    Some(seconds) => options.seconds = seconds,
                    None => log::warn!("--seconds expects a number"),
                },
                "--seed" => match args.next().and_then(|s| s.parse().ok()) {
                    Some(seed) => options.seed = seed,
                    None => log::warn!("--seed expects an integer"),
                },
                "--no-vibration" => options.vibration = false,
                "--cmd" => options.commands.extend(args.next()),
                _ => options.tuning_path = Some(arg),
            }
        }
        options
    }
}

/// Presses each button at random with a fixed per-tick probability, blind to the game
struct DemoPilot {
    rng: Pcg32,
}

impl DemoPilot {
    fn controls(&mut self) -> ShipControls {
        ShipControls {
            thrust: self.rng.random_bool(0.15),
            left: self.rng.random_bool(0.1),
            right: self.rng.random_bool(0.1),
            fire: self.rng.random_bool(0.05),
        }
    }
}

fn load_tuning(path: Option<&str>) -> Tuning {
    let Some(path) = path else {
        return Tuning::default();
    };
    match Tuning::load(path) {
        Ok(tuning) => tuning,
        Err(err) => {
            log::warn!("{}; using default tuning", err);
            Tuning::default()
        }
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::Cue(_) | GameEvent::Vibrate(_) => log::trace!("{:?}", event),
        _ => log::debug!("{:?}", event),
    }
}

fn main() {
    env_logger::init();
    log::info!("Spacewar (headless) starting...");

    let options = Options::from_args();
    let mut state = GameState::new(load_tuning(options.tuning_path.as_deref()));
    let mut settings = Settings {
        vibration: options.vibration,
        ..Settings::default()
    };

    for command in &options.commands {
        for line in run_command(command, &mut state, &mut settings) {
            println!("> {}", line);
        }
    }

    let mut pilots: Vec<DemoPilot> = (0..SHIP_COUNT as u64)
        .map(|i| DemoPilot {
            rng: Pcg32::seed_from_u64(options.seed.wrapping_add(i)),
        })
        .collect();

    // Leave the menu straight away
    let mut input = TickInput {
        any_key: true,
        ..TickInput::default()
    };

    let frames = (options.seconds / FRAME_DT).ceil() as u32;
    let mut accumulator = 0.0;
    for _ in 0..frames {
        accumulator += FRAME_DT;

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            for (controls, pilot) in input.ships.iter_mut().zip(pilots.iter_mut()) {
                *controls = pilot.controls();
            }
            for event in tick(&mut state, &input, SIM_DT) {
                if settings.wants(&event) {
                    log_event(&event);
                }
            }
            accumulator -= SIM_DT;
            substeps += 1;

            // One-shot input
            input.any_key = false;
        }
    }

    let snapshot = state.snapshot();
    log::info!(
        "Finished after {} ticks, {} rounds",
        state.time_ticks,
        snapshot.round
    );
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(err) => log::error!("Failed to serialize snapshot: {}", err),
    }
}
