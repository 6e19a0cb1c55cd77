// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Operator directional input.

/// Snapshot of the two directional signals for one cycle.
///
/// Both asserted at once is a defined no-op downstream, not an error.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DpadState {
    pub up: bool,
    pub down: bool,
}

impl DpadState {
    /// Neither direction asserted.
    pub const NEUTRAL: Self = Self {
        up: false,
        down: false,
    };
}

/// Source of one directional snapshot per control cycle.
///
/// Implementations may poll a gamepad, a pair of panel buttons, or a
/// scripted sequence in tests.
pub trait DirectionalInput {
    /// Read the current up/down state.
    fn read(&mut self) -> DpadState;
}

/// Any closure producing snapshots is a usable input source.
impl<F> DirectionalInput for F
where
    F: FnMut() -> DpadState,
{
    fn read(&mut self) -> DpadState {
        self()
    }
}
