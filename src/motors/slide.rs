//! Slide actuator built on one [`EncoderMotor`] handle.
//!
//! This wrapper owns a device handle and enforces the session discipline
//! the raw contract leaves to the caller: the one-directional mode
//! progression (idle → reset → run-to-position), power clamping, and a
//! non-negative tolerance.

use crate::error::SlideError;
use crate::hw::{Direction, EncoderMotor, RunMode, ZeroPowerBehavior};

/// One of the two physical actuators on the slide.
pub struct SlideActuator {
    name: String,
    motor: Box<dyn EncoderMotor>,
    mode: RunMode,
}

impl SlideActuator {
    /// Wrap a motor handle under its hardware-map name.
    pub fn new(name: &str, motor: Box<dyn EncoderMotor>) -> Self {
        Self {
            name: name.to_owned(),
            motor,
            mode: RunMode::Idle,
        }
    }

    /// Hardware-map name of the underlying device.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current session mode.
    #[inline]
    pub fn mode(&self) -> RunMode {
        self.mode
    }

    /// Zero the encoder reference. First step of every session.
    pub fn reset_encoder(&mut self) -> Result<(), SlideError> {
        self.motor.reset_encoder()?;
        self.mode = RunMode::ResetEncoder;
        Ok(())
    }

    /// Set polarity and idle-hold behavior. Cached on the device, applied
    /// to subsequent commands; called once after reset.
    pub fn configure(&mut self, direction: Direction, behavior: ZeroPowerBehavior) {
        self.motor.set_direction(direction);
        self.motor.set_zero_power_behavior(behavior);
    }

    /// Switch into closed-loop run-to-position mode.
    ///
    /// Only valid after [`reset_encoder`](Self::reset_encoder); the mode
    /// never reverts within a session.
    pub fn enter_position_mode(&mut self) -> Result<(), SlideError> {
        debug_assert_eq!(
            self.mode,
            RunMode::ResetEncoder,
            "position mode requires a prior encoder reset"
        );
        self.motor.enter_position_mode()?;
        self.mode = RunMode::RunToPosition;
        Ok(())
    }

    /// Request motion toward `ticks`. Takes effect once power is applied.
    pub fn set_target(&mut self, ticks: i32) -> Result<(), SlideError> {
        debug_assert_eq!(self.mode, RunMode::RunToPosition);
        self.motor.set_target_position(ticks)
    }

    /// Set the at-position dead-band. Negative requests are treated as 0.
    pub fn set_tolerance(&mut self, ticks: i32) -> Result<(), SlideError> {
        self.motor.set_target_tolerance(ticks.max(0))
    }

    /// Command drive magnitude, silently clamped to [0, 1]. Non-finite
    /// input is treated as zero power.
    pub fn set_power(&mut self, power: f32) -> Result<(), SlideError> {
        let power = if power.is_finite() {
            power.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.motor.set_power(power)
    }

    /// Latest known encoder reading (ticks).
    pub fn position(&self) -> Result<i32, SlideError> {
        self.motor.current_position()
    }
}
