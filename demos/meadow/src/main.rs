//! meadow — headless run of the pawtrail animation.
//!
//! Drives the three drivers on a manual clock for a couple of simulated
//! minutes, shrinks the viewport halfway through as a window resize would,
//! and prints the HUD every few seconds plus the newest prints at the end.
//!
//! `RUST_LOG=debug` shows spawns, culls and pruning passes; `RUST_LOG=trace`
//! shows every print.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pt_core::{Clock, ManualClock, Millis, SharedViewport, TrailConfig, ViewportSize};
use pt_output::FrameRecorder;
use pt_sim::SimBuilder;

// ── Constants ─────────────────────────────────────────────────────────────────

const RUN_SECS:        u64 = 120;
const HUD_EVERY_MS:    u64 = 10_000;
const RESIZE_AT_MS:    u64 = 60_000;
const SHOW_NEWEST:     usize = 5;

const WIDE:   ViewportSize = ViewportSize { width: 1280.0, height: 800.0 };
const NARROW: ViewportSize = ViewportSize { width: 800.0, height: 600.0 };

// Fields left out fall back to their defaults.
const CONFIG_JSON: &str = r#"{
    "seed": 7,
    "ledger_capacity": 100,
    "frame_interval_ms": 16
}"#;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config: TrailConfig =
        serde_json::from_str(CONFIG_JSON).context("parsing embedded trail config")?;

    println!("=== meadow — pawtrail ===");
    println!(
        "Seed: {}  |  Capacity: {}  |  Run: {RUN_SECS} s at {} ms/frame",
        config.seed, config.ledger_capacity, config.frame_interval_ms
    );
    println!();

    let clock = ManualClock::new(Millis::ZERO);
    let viewport = SharedViewport::new(WIDE);
    let mut recorder = FrameRecorder::new(&config);
    let mut sim = SimBuilder::new(config, clock.clone(), viewport.clone()).build()?;

    sim.start()?;

    let mut resized = false;
    let end = Millis(RUN_SECS * 1_000);
    while clock.now() < end {
        sim.run_for(HUD_EVERY_MS, &mut recorder);

        if !resized && clock.now() >= Millis(RESIZE_AT_MS) {
            viewport.resize(NARROW);
            resized = true;
            info!(width = NARROW.width, height = NARROW.height, "viewport resized");
        }

        if let Some(frame) = recorder.last_frame() {
            let [dogs, prints] = frame.hud_lines();
            println!(
                "{:>7}  {:<16} {:<26} ({} fading)",
                frame.now.to_string(),
                dogs,
                prints,
                frame.fading_count()
            );
        }
    }

    println!();
    println!(
        "Frames: {}  |  Dogs spawned: {}  |  Dogs left: {}  |  Prints pruned: {}",
        recorder.frames(),
        recorder.spawned(),
        recorder.evicted(),
        recorder.pruned()
    );

    if let Some(frame) = recorder.last_frame() {
        let skip = frame.prints.len().saturating_sub(SHOW_NEWEST);
        println!("Newest prints:");
        for view in &frame.prints[skip..] {
            println!("  {}", serde_json::to_string(view)?);
        }
    }

    let state = sim.shutdown();
    info!(tick = %state.tick, dogs = state.agent_count(), prints = state.print_count(), "meadow finished");
    Ok(())
}
