// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Hardware contract for one motor/encoder pair.
//!
//! The physical bus is opaque: a device behind this trait may live on CAN,
//! SPI, or a vendor hub. Drivers implement [`EncoderMotor`]; everything
//! above it (actuators, the pair controller, the teleop loop) only talks to
//! the trait, so a simulated device can stand in for real hardware.

use crate::error::SlideError;

/// Rotation sense of a motor relative to its mount.
///
/// A motor mounted opposite its partner runs [`Reverse`](Direction::Reverse)
/// so one logical target drives both toward the same physical direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

/// What the motor does when commanded power is zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ZeroPowerBehavior {
    /// Actively resist motion, holding position passively.
    Brake,
    /// Spin freely.
    Coast,
}

/// Operating mode of a motor during a session.
///
/// Transitions are one-directional: `Idle` → `ResetEncoder` →
/// `RunToPosition`. A motor never silently reverts to an earlier mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunMode {
    /// Powered off, not yet part of a session.
    Idle,
    /// Encoder reference is being zeroed.
    ResetEncoder,
    /// Closed-loop drive toward the commanded target.
    RunToPosition,
}

/// One position-controlled motor with encoder feedback.
///
/// Fallible methods touch the bus and report [`SlideError::HardwareFault`]
/// on any communication failure. `set_direction` and
/// `set_zero_power_behavior` only update cached configuration and cannot
/// fail.
pub trait EncoderMotor: std::fmt::Debug {
    /// Zero the encoder reference. Must precede any motion command.
    fn reset_encoder(&mut self) -> Result<(), SlideError>;

    /// Set the rotation sense. Cached, applied to subsequent commands.
    fn set_direction(&mut self, direction: Direction);

    /// Set the idle-hold behavior. Cached, applied at zero power.
    fn set_zero_power_behavior(&mut self, behavior: ZeroPowerBehavior);

    /// Switch into closed-loop run-to-position mode.
    fn enter_position_mode(&mut self) -> Result<(), SlideError>;

    /// Request motion toward `ticks`. No motion occurs until nonzero power
    /// is supplied.
    fn set_target_position(&mut self, ticks: i32) -> Result<(), SlideError>;

    /// Set the at-position dead-band around the target (ticks).
    fn set_target_tolerance(&mut self, ticks: i32) -> Result<(), SlideError>;

    /// Command drive magnitude in [0, 1]. Zero with brake behavior holds.
    fn set_power(&mut self, power: f32) -> Result<(), SlideError>;

    /// Latest known encoder reading (ticks). Side-effect-free.
    fn current_position(&self) -> Result<i32, SlideError>;
}
