// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Error taxonomy for the slide controller.
//!
//! Two failure classes matter at runtime: a motor that cannot be found at
//! startup (fatal, the loop never goes active) and a bus read/write that
//! fails mid-session (the affected cycle skips its motion command and the
//! mechanism holds on the brake).

use thiserror::Error;

/// Errors surfaced by the slide controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlideError {
    /// Hardware lookup failed at startup. Fatal: no motion is possible.
    #[error("no motor named `{name}` in the hardware map")]
    DeviceNotFound { name: String },

    /// A read or write to a motor failed during a cycle.
    #[error("hardware fault on `{device}` during {op}")]
    HardwareFault {
        device: String,
        op: &'static str,
    },

    /// A motion command was issued before the pair finished initialization.
    #[error("slide pair is not initialized")]
    Uninitialized,

    /// Configuration violated an invariant (bounds order, step sign, ...).
    #[error("invalid slide config: {0}")]
    InvalidConfig(String),
}

impl SlideError {
    /// Shorthand for a [`SlideError::HardwareFault`] on a named device.
    pub fn fault(device: &str, op: &'static str) -> Self {
        Self::HardwareFault {
            device: device.to_owned(),
            op,
        }
    }
}
