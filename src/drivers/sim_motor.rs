// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Simulated slide motor with encoder feedback.
//!
//! [`SimMotor`] implements the [`EncoderMotor`] contract with a first-order
//! motion model: each call to [`tick`](SimMotor::tick) advances the
//! position toward the commanded target in proportion to the commanded
//! power, the way a run-to-position controller tracks its setpoint.
//!
//! A [`SimMotor`] is a cheap handle around shared state, so a test or demo
//! harness can keep one handle to inspect and advance the device while the
//! controller owns another through the trait. [`SimRig`] collects named
//! motors and plays the hardware map.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::SlideError;
use crate::hw::{
    Direction, EncoderMotor, MotorProvider, RunMode, ZeroPowerBehavior,
};

/// Observable state of one simulated motor, for assertions and display.
#[derive(Copy, Clone, Debug)]
pub struct MotorSnapshot {
    pub position: i32,
    pub target: i32,
    pub tolerance: i32,
    pub power: f32,
    pub direction: Direction,
    pub zero_power: ZeroPowerBehavior,
    pub mode: RunMode,
}

#[derive(Debug)]
struct MotorCell {
    name: String,
    position: i32,
    target: i32,
    tolerance: i32,
    power: f32,
    direction: Direction,
    zero_power: ZeroPowerBehavior,
    mode: RunMode,

    /// Travel per [`SimMotor::tick`] at full power (ticks).
    slew_rate: i32,

    /// While set, every bus operation fails with a hardware fault.
    faulted: bool,

    /// Bus power commands delivered so far.
    power_commands: u32,
}

/// Handle to one simulated motor. Clones share the same device state.
#[derive(Clone, Debug)]
pub struct SimMotor {
    cell: Arc<Mutex<MotorCell>>,
}

impl SimMotor {
    /// Create a motor that travels `slew_rate` ticks per tick at full power.
    pub fn new(name: &str, slew_rate: i32) -> Self {
        Self {
            cell: Arc::new(Mutex::new(MotorCell {
                name: name.to_owned(),
                position: 0,
                target: 0,
                tolerance: 0,
                power: 0.0,
                direction: Direction::Forward,
                zero_power: ZeroPowerBehavior::Coast,
                mode: RunMode::Idle,
                slew_rate,
                faulted: false,
                power_commands: 0,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MotorCell> {
        self.cell.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Force every subsequent bus operation to fail (or recover).
    pub fn set_faulted(&self, faulted: bool) {
        self.lock().faulted = faulted;
    }

    /// Snapshot the device state.
    pub fn snapshot(&self) -> MotorSnapshot {
        let cell = self.lock();
        MotorSnapshot {
            position: cell.position,
            target: cell.target,
            tolerance: cell.tolerance,
            power: cell.power,
            direction: cell.direction,
            zero_power: cell.zero_power,
            mode: cell.mode,
        }
    }

    /// Number of power commands the device has accepted.
    pub fn power_commands(&self) -> u32 {
        self.lock().power_commands
    }

    /// Advance the motion model by one simulation step.
    ///
    /// In run-to-position mode with nonzero power the position moves toward
    /// the target by `slew_rate * power` ticks, never overshooting. In any
    /// other mode, or at zero power, the position holds.
    pub fn tick(&self) {
        let mut cell = self.lock();
        if cell.mode != RunMode::RunToPosition || cell.power <= 0.0 {
            return;
        }
        let error = cell.target - cell.position;
        if error == 0 {
            return;
        }
        let travel = ((cell.slew_rate as f32) * cell.power).round() as i32;
        let travel = travel.max(1).min(error.abs());
        cell.position += travel * error.signum();
    }

    fn bus_op(&self, op: &'static str) -> Result<MutexGuard<'_, MotorCell>, SlideError> {
        let cell = self.lock();
        if cell.faulted {
            return Err(SlideError::fault(&cell.name, op));
        }
        Ok(cell)
    }
}

impl EncoderMotor for SimMotor {
    fn reset_encoder(&mut self) -> Result<(), SlideError> {
        let mut cell = self.bus_op("reset_encoder")?;
        cell.position = 0;
        cell.target = 0;
        cell.power = 0.0;
        cell.mode = RunMode::ResetEncoder;
        Ok(())
    }

    fn set_direction(&mut self, direction: Direction) {
        self.lock().direction = direction;
    }

    fn set_zero_power_behavior(&mut self, behavior: ZeroPowerBehavior) {
        self.lock().zero_power = behavior;
    }

    fn enter_position_mode(&mut self) -> Result<(), SlideError> {
        let mut cell = self.bus_op("enter_position_mode")?;
        cell.mode = RunMode::RunToPosition;
        Ok(())
    }

    fn set_target_position(&mut self, ticks: i32) -> Result<(), SlideError> {
        let mut cell = self.bus_op("set_target_position")?;
        cell.target = ticks;
        Ok(())
    }

    fn set_target_tolerance(&mut self, ticks: i32) -> Result<(), SlideError> {
        let mut cell = self.bus_op("set_target_tolerance")?;
        cell.tolerance = ticks;
        Ok(())
    }

    fn set_power(&mut self, power: f32) -> Result<(), SlideError> {
        let mut cell = self.bus_op("set_power")?;
        cell.power = power;
        cell.power_commands += 1;
        Ok(())
    }

    fn current_position(&self) -> Result<i32, SlideError> {
        let cell = self.bus_op("current_position")?;
        Ok(cell.position)
    }
}

/// Named collection of simulated motors, standing in for the hardware map.
#[derive(Default)]
pub struct SimRig {
    motors: HashMap<String, SimMotor>,
}

impl SimRig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a motor under its hardware-map name.
    pub fn with_motor(mut self, name: &str, motor: SimMotor) -> Self {
        self.motors.insert(name.to_owned(), motor);
        self
    }

    /// Handle to a registered motor, if any.
    pub fn handle(&self, name: &str) -> Option<SimMotor> {
        self.motors.get(name).cloned()
    }

    /// Advance every motor's motion model by one step.
    pub fn tick(&self) {
        for motor in self.motors.values() {
            motor.tick();
        }
    }
}

impl MotorProvider for SimRig {
    fn motor(&mut self, name: &str) -> Result<Box<dyn EncoderMotor>, SlideError> {
        match self.motors.get(name) {
            Some(motor) => Ok(Box::new(motor.clone())),
            None => Err(SlideError::DeviceNotFound {
                name: name.to_owned(),
            }),
        }
    }
}
