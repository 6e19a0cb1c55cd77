// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Target clamp and step policy.
//!
//! Pure function from one input snapshot to the next target. The control
//! loop calls it exactly once per cycle.

/// Compute the next slide target from the current one and a directional
/// input snapshot.
///
/// Up alone adds `step`, down alone subtracts it, both or neither leaves
/// the target unchanged. The result is clamped to `[min, max]` inclusive.
/// Arithmetic saturates, so extreme inputs cannot wrap.
///
/// Requires `min <= max`.
pub fn next_target(current: i32, up: bool, down: bool, step: i32, min: i32, max: i32) -> i32 {
    debug_assert!(min <= max, "target bounds out of order");

    let proposed = match (up, down) {
        (true, false) => current.saturating_add(step),
        (false, true) => current.saturating_sub(step),
        // Conflicting or absent input: hold.
        _ => current,
    };
    proposed.clamp(min, max)
}
