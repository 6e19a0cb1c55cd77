// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Synchronized control of the two slide actuators.
//!
//! Synchronization is structural: [`SlidePair::command_target`] is the only
//! code path that commands motion, and it always addresses both actuators
//! with the same target and the same power. There is no per-side entry
//! point to diverge through. Transient position differences between the
//! sides are left to the hardware's closed loop and are observable through
//! [`SlidePair::positions`].

use crate::config::SlideConfig;
use crate::error::SlideError;
use crate::hw::{Direction, MotorProvider, ZeroPowerBehavior};
use crate::motors::SlideActuator;

/// The left/right actuator pair behind one logical target.
pub struct SlidePair {
    left: SlideActuator,
    right: SlideActuator,
    initialized: bool,
}

impl SlidePair {
    /// Pair two already-wrapped actuators.
    pub fn new(left: SlideActuator, right: SlideActuator) -> Self {
        Self {
            left,
            right,
            initialized: false,
        }
    }

    /// Look up both motors by their configured names.
    ///
    /// Fails with [`SlideError::DeviceNotFound`] if either name is missing;
    /// nothing is partially constructed in that case.
    pub fn from_provider(
        provider: &mut dyn MotorProvider,
        config: &SlideConfig,
    ) -> Result<Self, SlideError> {
        let left = provider.motor(&config.left_motor)?;
        let right = provider.motor(&config.right_motor)?;
        Ok(Self::new(
            SlideActuator::new(&config.left_motor, left),
            SlideActuator::new(&config.right_motor, right),
        ))
    }

    /// Whether [`initialize`](Self::initialize) has completed successfully.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Bring both actuators into a ready state: encoders zeroed, directions
    /// mirrored, brake on zero power, run-to-position mode, tolerance set.
    ///
    /// Atomic from the caller's perspective: any failure leaves the pair
    /// uninitialized and motion commands refused.
    pub fn initialize(&mut self, tolerance: i32) -> Result<(), SlideError> {
        self.initialized = false;

        self.left.reset_encoder()?;
        self.right.reset_encoder()?;

        // The right motor is mounted opposite the left, so it runs
        // reversed; one positive target then drives both sides the same
        // physical direction.
        self.left
            .configure(Direction::Forward, ZeroPowerBehavior::Brake);
        self.right
            .configure(Direction::Reverse, ZeroPowerBehavior::Brake);

        self.left.enter_position_mode()?;
        self.right.enter_position_mode()?;

        self.left.set_tolerance(tolerance)?;
        self.right.set_tolerance(tolerance)?;

        self.initialized = true;
        Ok(())
    }

    /// Apply the same target and the same power to both actuators.
    ///
    /// Clamping `ticks` to the travel bounds is the caller's job. Targets
    /// stage on both sides before any power is applied, so a fault on
    /// either side means no motion command takes effect on either; power is
    /// zeroed best-effort on the partial path and the fault propagates.
    pub fn command_target(&mut self, ticks: i32, power: f32) -> Result<(), SlideError> {
        if !self.initialized {
            return Err(SlideError::Uninitialized);
        }

        if let Err(err) = self
            .left
            .set_target(ticks)
            .and_then(|()| self.right.set_target(ticks))
        {
            self.hold();
            return Err(err);
        }

        if let Err(err) = self
            .left
            .set_power(power)
            .and_then(|()| self.right.set_power(power))
        {
            self.hold();
            return Err(err);
        }

        Ok(())
    }

    /// Current encoder readings as `(left, right)`. Observability only.
    pub fn positions(&self) -> Result<(i32, i32), SlideError> {
        Ok((self.left.position()?, self.right.position()?))
    }

    /// Zero power on both actuators; the brake holds the mechanism.
    ///
    /// Idempotent. Both sides are attempted even if the first errors.
    pub fn stop(&mut self) -> Result<(), SlideError> {
        let left = self.left.set_power(0.0);
        let right = self.right.set_power(0.0);
        left.and(right)
    }

    /// Best-effort zero power on both sides; faults here are deliberately
    /// dropped, the caller is already propagating one.
    fn hold(&mut self) {
        let _ = self.left.set_power(0.0);
        let _ = self.right.set_power(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::{SimMotor, SimRig};
    use crate::hw::RunMode;

    fn rig() -> (SimRig, SimMotor, SimMotor) {
        let left = SimMotor::new("leftSlideMotor", 10);
        let right = SimMotor::new("rightSlideMotor", 10);
        let rig = SimRig::new()
            .with_motor("leftSlideMotor", left.clone())
            .with_motor("rightSlideMotor", right.clone());
        (rig, left, right)
    }

    fn initialized_pair() -> (SlidePair, SimMotor, SimMotor) {
        let (mut rig, left, right) = rig();
        let mut pair = SlidePair::from_provider(&mut rig, &SlideConfig::default()).unwrap();
        pair.initialize(1).unwrap();
        (pair, left, right)
    }

    #[test]
    fn missing_motor_aborts_lookup() {
        let (mut rig, _, _) = rig();
        let config = SlideConfig {
            right_motor: "missing".to_owned(),
            ..SlideConfig::default()
        };
        assert!(matches!(
            SlidePair::from_provider(&mut rig, &config),
            Err(SlideError::DeviceNotFound { .. })
        ));
    }

    #[test]
    fn initialize_mirrors_directions_and_arms_both() {
        let (pair, left, right) = initialized_pair();
        assert!(pair.is_initialized());

        let l = left.snapshot();
        let r = right.snapshot();
        assert_eq!(l.direction, Direction::Forward);
        assert_eq!(r.direction, Direction::Reverse);
        assert_eq!(l.zero_power, ZeroPowerBehavior::Brake);
        assert_eq!(r.zero_power, ZeroPowerBehavior::Brake);
        assert_eq!(l.mode, RunMode::RunToPosition);
        assert_eq!(r.mode, RunMode::RunToPosition);
        assert_eq!(l.tolerance, 1);
        assert_eq!(r.tolerance, 1);
    }

    #[test]
    fn failed_initialize_leaves_pair_unusable() {
        let (mut rig, _, right) = rig();
        let mut pair = SlidePair::from_provider(&mut rig, &SlideConfig::default()).unwrap();
        right.set_faulted(true);

        assert!(pair.initialize(1).is_err());
        assert!(!pair.is_initialized());
        assert_eq!(
            pair.command_target(10, 0.3),
            Err(SlideError::Uninitialized)
        );
    }

    #[test]
    fn command_target_is_identical_on_both_sides() {
        let (mut pair, left, right) = initialized_pair();
        pair.command_target(120, 0.3).unwrap();

        let l = left.snapshot();
        let r = right.snapshot();
        assert_eq!(l.target, 120);
        assert_eq!(r.target, 120);
        assert_eq!(l.power, 0.3);
        assert_eq!(r.power, 0.3);
    }

    #[test]
    fn fault_on_first_side_leaves_both_unpowered() {
        let (mut pair, left, right) = initialized_pair();
        let right_power_cmds = right.power_commands();
        left.set_faulted(true);

        assert!(pair.command_target(50, 0.3).is_err());

        // The right side never saw the target, and no new power command
        // raised either side.
        assert_eq!(right.snapshot().target, 0);
        assert_eq!(left.snapshot().power, 0.0);
        assert_eq!(right.power_commands(), right_power_cmds + 1); // the hold
        assert_eq!(right.snapshot().power, 0.0);
    }

    #[test]
    fn fault_on_second_side_holds_instead_of_moving() {
        let (mut pair, left, right) = initialized_pair();
        right.set_faulted(true);

        assert!(pair.command_target(50, 0.3).is_err());

        // Both targets may have staged, but no side is left powered.
        assert_eq!(left.snapshot().power, 0.0);
        for _ in 0..5 {
            left.tick();
            right.tick();
        }
        assert_eq!(left.snapshot().position, 0);
        assert_eq!(right.snapshot().position, 0);
    }

    #[test]
    fn stop_zeroes_power_and_is_idempotent() {
        let (mut pair, left, right) = initialized_pair();
        pair.command_target(100, 0.3).unwrap();

        pair.stop().unwrap();
        pair.stop().unwrap();
        assert_eq!(left.snapshot().power, 0.0);
        assert_eq!(right.snapshot().power, 0.0);
    }

    #[test]
    fn positions_reports_both_sides() {
        let (mut pair, left, right) = initialized_pair();
        pair.command_target(30, 1.0).unwrap();
        left.tick();
        right.tick();
        right.tick();
        assert_eq!(pair.positions().unwrap(), (10, 20));
    }
}
