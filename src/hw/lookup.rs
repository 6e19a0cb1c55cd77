// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Named lookup of motor devices.

use crate::error::SlideError;
use crate::hw::EncoderMotor;

/// Hands out motor handles by their configured hardware-map name.
///
/// Lookup happens once at startup; a miss is
/// [`SlideError::DeviceNotFound`] and aborts the session before any motion
/// is possible.
pub trait MotorProvider {
    /// Look up the motor configured under `name`.
    fn motor(&mut self, name: &str) -> Result<Box<dyn EncoderMotor>, SlideError>;
}
