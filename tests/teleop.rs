// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! End-to-end session scenarios on the simulated rig.
//!
//! The gamepad closure doubles as the world clock here: it advances the
//! sim motion model once per cycle before returning the operator's input,
//! so the controller sees positions evolve the way a real slide would
//! track its setpoint.

use slidectl::config::SlideConfig;
use slidectl::control::{LoopPhase, SlidePair, SlideTeleop};
use slidectl::drivers::{SimMotor, SimRig};
use slidectl::hw::DpadState;
use slidectl::protocol::{CountedSession, TelemetrySink};

#[derive(Default)]
struct RecordingSink {
    samples: Vec<(String, i64)>,
    notes: Vec<(String, String)>,
}

impl TelemetrySink for &mut RecordingSink {
    fn record(&mut self, key: &str, value: i64) {
        self.samples.push((key.to_owned(), value));
    }

    fn note(&mut self, key: &str, message: &str) {
        self.notes.push((key.to_owned(), message.to_owned()));
    }

    fn commit(&mut self) {}
}

struct Rig {
    rig: SimRig,
    left: SimMotor,
    right: SimMotor,
}

fn rig(slew: i32) -> Rig {
    let left = SimMotor::new("leftSlideMotor", slew);
    let right = SimMotor::new("rightSlideMotor", slew);
    let rig = SimRig::new()
        .with_motor("leftSlideMotor", left.clone())
        .with_motor("rightSlideMotor", right.clone());
    Rig { rig, left, right }
}

fn config() -> SlideConfig {
    SlideConfig {
        cycle_period_ms: 0,
        ..SlideConfig::default()
    }
}

#[test]
fn raise_to_fifty_and_settle() {
    let mut rig = rig(10);
    let config = config();
    let pair = SlidePair::from_provider(&mut rig.rig, &config).unwrap();
    let mut sink = RecordingSink::default();

    let (left, right) = (rig.left.clone(), rig.right.clone());
    let mut cycle = 0u32;
    let gamepad = move || {
        left.tick();
        right.tick();
        cycle += 1;
        if cycle <= 5 {
            DpadState { up: true, down: false }
        } else {
            DpadState::NEUTRAL
        }
    };

    let mut teleop = SlideTeleop::new(
        pair,
        gamepad,
        CountedSession::new(30),
        &mut sink,
        config,
    )
    .unwrap();
    teleop.run().unwrap();

    assert_eq!(teleop.phase(), LoopPhase::Stopped);
    assert_eq!(teleop.target(), 50);
    assert_eq!(rig.left.snapshot().position, 50);
    assert_eq!(rig.right.snapshot().position, 50);
    drop(teleop);

    // Both sides tracked in lockstep the whole way.
    let lefts: Vec<i64> = sink
        .samples
        .iter()
        .filter(|(k, _)| k == "left")
        .map(|&(_, v)| v)
        .collect();
    let rights: Vec<i64> = sink
        .samples
        .iter()
        .filter(|(k, _)| k == "right")
        .map(|&(_, v)| v)
        .collect();
    assert_eq!(lefts, rights);
    assert!(sink.notes.iter().all(|(k, _)| k != "fault"));
}

#[test]
fn travel_clamps_at_both_limits() {
    let mut rig = rig(10);
    let config = SlideConfig {
        step_ticks: 50,
        ..config()
    };
    let pair = SlidePair::from_provider(&mut rig.rig, &config).unwrap();
    let mut sink = RecordingSink::default();

    let (left, right) = (rig.left.clone(), rig.right.clone());
    let mut cycle = 0u32;
    let gamepad = move || {
        left.tick();
        right.tick();
        cycle += 1;
        if cycle <= 10 {
            DpadState { up: true, down: false }
        } else {
            DpadState { up: false, down: true }
        }
    };

    let mut teleop = SlideTeleop::new(
        pair,
        gamepad,
        CountedSession::new(20),
        &mut sink,
        config,
    )
    .unwrap();
    teleop.run().unwrap();

    // Ten raises clamp at 300, ten lowers clamp back at 0.
    assert_eq!(teleop.target(), 0);
    drop(teleop);
    let targets: Vec<i64> = sink
        .samples
        .iter()
        .filter(|(k, _)| k == "target")
        .map(|&(_, v)| v)
        .collect();
    assert_eq!(targets.iter().max(), Some(&300));
    assert!(targets.iter().all(|t| (0..=300).contains(t)));
}

#[test]
fn each_cycle_reports_target_then_both_positions() {
    let mut rig = rig(10);
    let config = config();
    let pair = SlidePair::from_provider(&mut rig.rig, &config).unwrap();
    let mut sink = RecordingSink::default();

    let mut teleop = SlideTeleop::new(
        pair,
        || DpadState::NEUTRAL,
        CountedSession::new(3),
        &mut sink,
        config,
    )
    .unwrap();
    teleop.run().unwrap();
    drop(teleop);

    let keys: Vec<&str> = sink.samples.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        keys,
        [
            "target", "left", "right", //
            "target", "left", "right", //
            "target", "left", "right",
        ]
    );
}
