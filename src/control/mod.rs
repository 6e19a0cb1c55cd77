// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Slide Control
//!
//! This module provides the control stack for the dual-motor slide.
//!
//! ## Modules
//!
//! - [`step`] - Target clamp and step policy (pure).
//! - [`pair`] - Synchronized left/right pair controller.
//! - [`teleop`] - The operator control loop and its session state machine.

pub mod pair;
pub mod step;
pub mod teleop;

pub use pair::SlidePair;
pub use step::next_target;
pub use teleop::{LoopPhase, SlideTeleop};
