// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Operator-station link: session lifecycle and telemetry reporting.

pub mod session;
pub mod telemetry;

pub use session::CountedSession;
pub use session::Session;
pub use telemetry::TelemetrySink;
pub use telemetry::TraceSink;
