//! Orb Tilt headless runner
//!
//! Plays a session with a scripted tilt pattern and prints the final frame
//! as JSON. Useful for tuning configs without a device.

use std::path::PathBuf;

use clap::Parser;
use orb_tilt::consts::SIM_DT;
use orb_tilt::sensor::ScriptedSensor;
use orb_tilt::sim::{GameEvent, TiltSample};
use orb_tilt::{GameConfig, GameSession};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RNG seed for orb placement
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Seconds of play to simulate
    #[arg(long, default_value_t = 30.0)]
    seconds: f32,

    /// JSON config file (missing fields use defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Constant tilt as "x,y" instead of the default circling motion
    #[arg(long, value_parser = parse_tilt)]
    tilt: Option<TiltSample>,

    /// Press restart whenever the game ends
    #[arg(long)]
    auto_restart: bool,
}

fn parse_tilt(s: &str) -> Result<TiltSample, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"x,y\", got '{s}'"))?;
    let x = x.trim().parse::<f32>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<f32>().map_err(|e| e.to_string())?;
    Ok(TiltSample::new(x, y, 0.0))
}

/// Slow circle that sweeps the player around the screen
fn circling_tilt(t: f32) -> TiltSample {
    TiltSample::new((t * 1.3).sin() * 0.8, (t * 0.9).cos() * 0.8, 0.0)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    log::info!("Orb Tilt (headless) starting, seed {}", args.seed);

    let sensor = ScriptedSensor::new();
    let mut session = GameSession::start(sensor.clone(), config, args.seed);

    let frames = (args.seconds / SIM_DT).ceil() as u32;
    let mut games_finished = 0u32;
    for frame in 0..frames {
        let t = frame as f32 * SIM_DT;
        sensor.emit(args.tilt.unwrap_or_else(|| circling_tilt(t)));
        session.advance(SIM_DT);

        let events = session.state().events.clone();
        for event in events {
            match event {
                GameEvent::GameOver { score } => {
                    games_finished += 1;
                    log::info!("Game {games_finished} over at {t:.1}s with score {score}");
                    if args.auto_restart {
                        session.request_reset();
                    }
                }
                GameEvent::CollectibleRespawned { fallback: true } => {
                    log::warn!("Collectible placed without clearance at {t:.1}s");
                }
                _ => {}
            }
        }
    }

    let snapshot = session.snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    session.teardown();
    Ok(())
}
