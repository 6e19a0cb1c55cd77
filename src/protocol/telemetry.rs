// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Cycle telemetry reporting.
//!
//! One report per cycle: key/value samples plus free-form notes, closed by
//! [`commit`](TelemetrySink::commit). Delivery is fire-and-forget — a sink
//! that drops data must not disturb the control loop, so none of these
//! methods can fail.

/// Receives the per-cycle report (target, left position, right position,
/// fault notes) for external display.
pub trait TelemetrySink {
    /// Record one numeric sample under `key`.
    fn record(&mut self, key: &str, value: i64);

    /// Record one textual note under `key` (status lines, fault reports).
    fn note(&mut self, key: &str, message: &str);

    /// Close the current cycle's report.
    fn commit(&mut self);
}

/// Sink that forwards each committed report to `tracing`, for headless
/// runs.
#[derive(Debug, Default)]
pub struct TraceSink {
    samples: Vec<(String, i64)>,
    notes: Vec<(String, String)>,
}

impl TraceSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TelemetrySink for TraceSink {
    fn record(&mut self, key: &str, value: i64) {
        self.samples.push((key.to_owned(), value));
    }

    fn note(&mut self, key: &str, message: &str) {
        self.notes.push((key.to_owned(), message.to_owned()));
    }

    fn commit(&mut self) {
        for (key, message) in self.notes.drain(..) {
            tracing::info!(target: "slidectl::telemetry", "{key}: {message}");
        }
        if !self.samples.is_empty() {
            let line = self
                .samples
                .drain(..)
                .map(|(key, value)| format!("{key}={value}"))
                .collect::<Vec<_>>()
                .join(" ");
            tracing::info!(target: "slidectl::telemetry", "{line}");
        }
    }
}
