// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Demo session against the simulated rig.
//!
//! Builds a two-motor [`SimRig`], advances its motion model on a
//! background thread standing in for the physical mechanism, and drives a
//! scripted teleop session: raise, hold, lower. Telemetry goes to stdout
//! through [`TraceSink`].

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use slidectl::config::SlideConfig;
use slidectl::control::{SlidePair, SlideTeleop};
use slidectl::drivers::{SimMotor, SimRig};
use slidectl::hw::DpadState;
use slidectl::protocol::{CountedSession, TraceSink};

const CONFIG_PATH: &str = "slide.toml";

fn load_config() -> anyhow::Result<SlideConfig> {
    if !Path::new(CONFIG_PATH).exists() {
        return Ok(SlideConfig::default());
    }
    let raw = std::fs::read_to_string(CONFIG_PATH)
        .with_context(|| format!("reading {CONFIG_PATH}"))?;
    toml::from_str(&raw).with_context(|| format!("parsing {CONFIG_PATH}"))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config()?;
    config.validate()?;

    let left = SimMotor::new(&config.left_motor, 4);
    let right = SimMotor::new(&config.right_motor, 4);
    let mut rig = SimRig::new()
        .with_motor(&config.left_motor, left.clone())
        .with_motor(&config.right_motor, right.clone());

    // The "mechanism": sim physics advance independently of the control
    // loop, like a real slide tracking its run-to-position setpoint.
    let running = Arc::new(AtomicBool::new(true));
    let ticker = {
        let running = Arc::clone(&running);
        let (left, right) = (left.clone(), right.clone());
        thread::spawn(move || {
            while running.load(Ordering::Relaxed) {
                left.tick();
                right.tick();
                thread::sleep(Duration::from_millis(20));
            }
        })
    };

    // Scripted operator: raise 8 cycles, hold 4, lower 6.
    let mut cycle = 0u32;
    let gamepad = move || {
        cycle += 1;
        match cycle {
            1..=8 => DpadState { up: true, down: false },
            9..=12 => DpadState::NEUTRAL,
            _ => DpadState { up: false, down: true },
        }
    };

    let pair = SlidePair::from_provider(&mut rig, &config)?;
    let mut teleop = SlideTeleop::new(
        pair,
        gamepad,
        CountedSession::new(20),
        TraceSink::new(),
        config,
    )?;
    teleop.run()?;

    running.store(false, Ordering::Relaxed);
    let _ = ticker.join();

    info!(
        left = left.snapshot().position,
        right = right.snapshot().position,
        target = teleop.target(),
        "session complete"
    );
    Ok(())
}
