// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Slide rig configuration.
//!
//! All tunables for one slide session live in [`SlideConfig`]. Every field
//! has a default matching the reference rig, so an empty TOML table is a
//! usable config. Call [`SlideConfig::validate`] before handing the config
//! to the control loop.

use std::time::Duration;

use serde::Deserialize;

use crate::error::SlideError;

/// Tunables for a dual-motor slide session.
#[derive(Debug, Clone, Deserialize)]
pub struct SlideConfig {
    /// Hardware-map name of the left slide motor.
    #[serde(default = "default_left_motor")]
    pub left_motor: String,

    /// Hardware-map name of the right slide motor.
    #[serde(default = "default_right_motor")]
    pub right_motor: String,

    /// Lowest commandable target (ticks). Zero at the bottom hard stop.
    #[serde(default)]
    pub min_position: i32,

    /// Highest commandable target (ticks). Set from the slide's measured
    /// travel; overshooting this risks mechanical damage.
    #[serde(default = "default_max_position")]
    pub max_position: i32,

    /// Target adjustment per input cycle (ticks).
    #[serde(default = "default_step_ticks")]
    pub step_ticks: i32,

    /// Drive magnitude while tracking the target, in (0, 1].
    #[serde(default = "default_cruise_power")]
    pub cruise_power: f32,

    /// At-position dead-band applied to both motors at init (ticks).
    #[serde(default = "default_target_tolerance")]
    pub target_tolerance: i32,

    /// Minimum inter-cycle delay. Debounces the D-pad and bounds the
    /// command rate; not a hard real-time deadline.
    #[serde(default = "default_cycle_period_ms")]
    pub cycle_period_ms: u64,

    /// Consecutive faulted cycles tolerated before the loop gives up and
    /// stops the session.
    #[serde(default = "default_max_fault_cycles")]
    pub max_fault_cycles: u32,
}

fn default_left_motor() -> String {
    "leftSlideMotor".to_owned()
}

fn default_right_motor() -> String {
    "rightSlideMotor".to_owned()
}

fn default_max_position() -> i32 {
    300
}

fn default_step_ticks() -> i32 {
    10
}

fn default_cruise_power() -> f32 {
    0.3
}

fn default_target_tolerance() -> i32 {
    1
}

fn default_cycle_period_ms() -> u64 {
    100
}

fn default_max_fault_cycles() -> u32 {
    5
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self {
            left_motor: default_left_motor(),
            right_motor: default_right_motor(),
            min_position: 0,
            max_position: default_max_position(),
            step_ticks: default_step_ticks(),
            cruise_power: default_cruise_power(),
            target_tolerance: default_target_tolerance(),
            cycle_period_ms: default_cycle_period_ms(),
            max_fault_cycles: default_max_fault_cycles(),
        }
    }
}

impl SlideConfig {
    /// Check the config invariants.
    ///
    /// Bounds must be ordered, the step positive, the tolerance
    /// non-negative, the cruise power in (0, 1], and the two motor names
    /// distinct.
    pub fn validate(&self) -> Result<(), SlideError> {
        if self.min_position > self.max_position {
            return Err(SlideError::InvalidConfig(format!(
                "min_position ({}) exceeds max_position ({})",
                self.min_position, self.max_position
            )));
        }
        if self.step_ticks <= 0 {
            return Err(SlideError::InvalidConfig(format!(
                "step_ticks must be positive, got {}",
                self.step_ticks
            )));
        }
        if self.target_tolerance < 0 {
            return Err(SlideError::InvalidConfig(format!(
                "target_tolerance must be non-negative, got {}",
                self.target_tolerance
            )));
        }
        if !self.cruise_power.is_finite()
            || self.cruise_power <= 0.0
            || self.cruise_power > 1.0
        {
            return Err(SlideError::InvalidConfig(format!(
                "cruise_power must be in (0, 1], got {}",
                self.cruise_power
            )));
        }
        if self.left_motor == self.right_motor {
            return Err(SlideError::InvalidConfig(format!(
                "left and right motors share the name `{}`",
                self.left_motor
            )));
        }
        Ok(())
    }

    /// Inter-cycle delay as a [`Duration`].
    #[inline]
    pub fn cycle_period(&self) -> Duration {
        Duration::from_millis(self.cycle_period_ms)
    }
}
