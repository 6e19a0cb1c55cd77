// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Operator control loop for the slide.
//!
//! One synchronous loop owns all control state. Each active cycle runs the
//! fixed sequence: read the input snapshot, step the target, command both
//! motors, read and report positions. The session's stop predicate is
//! checked only at cycle boundaries, so the pair never sees a half-issued
//! command.
//!
//! Typical usage pattern:
//!
//! ```no_run
//! # use slidectl::config::SlideConfig;
//! # use slidectl::control::{SlidePair, SlideTeleop};
//! # use slidectl::drivers::{SimMotor, SimRig};
//! # use slidectl::hw::DpadState;
//! # use slidectl::protocol::{CountedSession, TraceSink};
//! # let mut rig = SimRig::new()
//! #     .with_motor("leftSlideMotor", SimMotor::new("leftSlideMotor", 12))
//! #     .with_motor("rightSlideMotor", SimMotor::new("rightSlideMotor", 12));
//! # let config = SlideConfig::default();
//! # let pair = SlidePair::from_provider(&mut rig, &config)?;
//! # let gamepad = || DpadState::NEUTRAL;
//! let mut teleop = SlideTeleop::new(
//!     pair,
//!     gamepad,
//!     CountedSession::new(100),
//!     TraceSink::new(),
//!     config,
//! )?;
//! teleop.run()?;
//! # Ok::<(), slidectl::error::SlideError>(())
//! ```

use std::thread;

use tracing::{info, warn};

use crate::config::SlideConfig;
use crate::control::pair::SlidePair;
use crate::control::step::next_target;
use crate::error::SlideError;
use crate::hw::{DirectionalInput, DpadState};
use crate::protocol::{Session, TelemetrySink};

/// Phase of the control loop's session state machine.
///
/// `WaitingForStart` → `Active` → `Stopped`, each transition taken exactly
/// once per session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopPhase {
    /// Blocked on the operator's start signal; no motion commands issued.
    WaitingForStart,
    /// Cycling: input → target → command → report.
    Active,
    /// Terminal. Power has been zeroed on both motors.
    Stopped,
}

/// The control loop, generic over its operator-side collaborators.
pub struct SlideTeleop<G, S, T> {
    pair: SlidePair,
    gamepad: G,
    session: S,
    telemetry: T,
    config: SlideConfig,

    target: i32,
    phase: LoopPhase,
    fault_streak: u32,
}

impl<G, S, T> SlideTeleop<G, S, T>
where
    G: DirectionalInput,
    S: Session,
    T: TelemetrySink,
{
    /// Build a loop around an (uninitialized) pair. Validates the config.
    pub fn new(
        pair: SlidePair,
        gamepad: G,
        session: S,
        telemetry: T,
        config: SlideConfig,
    ) -> Result<Self, SlideError> {
        config.validate()?;
        let target = 0_i32.clamp(config.min_position, config.max_position);
        Ok(Self {
            pair,
            gamepad,
            session,
            telemetry,
            config,
            target,
            phase: LoopPhase::WaitingForStart,
            fault_streak: 0,
        })
    }

    /// Current logical target (ticks).
    #[inline]
    pub fn target(&self) -> i32 {
        self.target
    }

    /// Current loop phase.
    #[inline]
    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    /// Run one full session: initialize, wait for start, cycle until the
    /// session ends or faults persist, then stop.
    ///
    /// Initialization failures (`DeviceNotFound` at lookup time,
    /// `HardwareFault` during [`SlidePair::initialize`]) abort before the
    /// loop goes active and before any motion is possible.
    pub fn run(&mut self) -> Result<(), SlideError> {
        debug_assert_eq!(self.phase, LoopPhase::WaitingForStart);

        self.pair.initialize(self.config.target_tolerance)?;
        self.telemetry.note("status", "ready");
        self.telemetry.commit();

        self.session.wait_for_start();
        self.phase = LoopPhase::Active;
        info!(
            min = self.config.min_position,
            max = self.config.max_position,
            step = self.config.step_ticks,
            "slide session active"
        );

        while self.session.is_active() {
            self.cycle();

            if self.fault_streak >= self.config.max_fault_cycles {
                warn!(
                    streak = self.fault_streak,
                    "faults persist, stopping the session"
                );
                break;
            }

            let period = self.config.cycle_period();
            if !period.is_zero() {
                thread::sleep(period);
            }
        }

        self.phase = LoopPhase::Stopped;
        if let Err(err) = self.pair.stop() {
            // The brake still holds at zero power; nothing more to do here.
            warn!("stop command failed: {err}");
        }
        info!("slide session stopped");
        Ok(())
    }

    /// One active cycle. Never terminates the loop by itself; a faulted
    /// cycle skips its motion command and leaves the mechanism holding.
    fn cycle(&mut self) {
        let DpadState { up, down } = self.gamepad.read();
        self.target = next_target(
            self.target,
            up,
            down,
            self.config.step_ticks,
            self.config.min_position,
            self.config.max_position,
        );

        let commanded = self
            .pair
            .command_target(self.target, self.config.cruise_power)
            .and_then(|()| self.pair.positions());

        match commanded {
            Ok((left, right)) => {
                self.fault_streak = 0;
                self.telemetry.record("target", i64::from(self.target));
                self.telemetry.record("left", i64::from(left));
                self.telemetry.record("right", i64::from(right));
            }
            Err(err) => {
                self.fault_streak += 1;
                warn!(streak = self.fault_streak, "cycle fault: {err}");
                self.telemetry.note("fault", &err.to_string());
            }
        }
        self.telemetry.commit();
    }
}
