//! Meteor Defense entry point
//!
//! Native builds run the simulation headless with a scripted pilot: useful for
//! balancing tuning files and checking determinism across machines.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use meteor_defense::audio::SilentCue;
use meteor_defense::platform::ScriptedInput;
use meteor_defense::renderer::{LogRenderer, Renderer};
use meteor_defense::{AssetBundle, Game, Tuning};

#[derive(Debug, Parser)]
#[command(name = "meteor-defense", about = "Headless meteor shooter simulation")]
struct Args {
    /// Spawn RNG seed
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Simulated seconds to run
    #[arg(long, default_value_t = 60)]
    seconds: u64,

    /// Tuning JSON (missing fields use defaults)
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Asset manifest JSON (defaults to the built-in sprite set)
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Print the final state as JSON
    #[arg(long)]
    dump_state: bool,
}

fn load_tuning(path: Option<&PathBuf>) -> Result<Tuning, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            let tuning = Tuning::from_json(&json)?;
            log::info!("Loaded tuning from {}", path.display());
            Ok(tuning)
        }
        None => Ok(Tuning::default()),
    }
}

fn load_assets(path: Option<&PathBuf>) -> Result<AssetBundle, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            Ok(AssetBundle::from_manifest_json(&json)?)
        }
        None => Ok(AssetBundle::builtin()),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    log::info!("Meteor Defense (native, headless) starting...");

    // Without assets or a sane tuning the run is meaningless: fail fast
    let tuning = match load_tuning(args.tuning.as_ref()) {
        Ok(tuning) => tuning,
        Err(e) => {
            log::error!("Invalid tuning: {e}");
            return ExitCode::FAILURE;
        }
    };
    let assets = match load_assets(args.assets.as_ref()) {
        Ok(assets) => assets,
        Err(e) => {
            log::error!("Failed to load assets: {e}");
            return ExitCode::FAILURE;
        }
    };

    let ticks_per_second = tuning.ticks_per_second;
    let total_ticks = args.seconds * ticks_per_second as u64;
    let frame_dt = 1.0 / ticks_per_second as f64;

    let mut game = match Game::new(args.seed, tuning, assets, SilentCue) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid tuning: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut pilot = ScriptedInput::sweeping(ticks_per_second as usize);
    let mut renderer = LogRenderer::default();

    let summary_interval = ticks_per_second as u64 * 10;

    while game.state().time_ticks < total_ticks {
        let before = game.state().time_ticks;
        if game.advance(frame_dt, &mut pilot) == 0 {
            continue;
        }
        renderer.draw(&game.frame());

        // Once per ten simulated seconds, even when a frame ran several ticks
        let state = game.state();
        if before / summary_interval != state.time_ticks / summary_interval {
            log::info!(
                "t={}s score {} meteors {} bullets {}",
                state.time_ticks / ticks_per_second as u64,
                state.score_text(),
                state.meteors.len(),
                state.bullets.len()
            );
        }
    }

    let state = game.state();
    let stats = &state.stats;
    log::info!(
        "Finished {} ticks: score {}, spawned {}, destroyed {}, hits taken {}, shots {}, pruned {}",
        state.time_ticks,
        state.score_text(),
        stats.meteors_spawned,
        stats.meteors_destroyed,
        stats.player_hits,
        stats.shots_fired,
        stats.pruned
    );
    println!("{}", state.score_text());

    if args.dump_state {
        match serde_json::to_string_pretty(state) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                log::error!("Failed to serialize state: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
