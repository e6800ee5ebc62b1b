use serde::Serialize;

/// The four risk and performance statistics derived from one trade row.
///
/// This struct is the output of the `MetricsEngine` and the input of the
/// classifier. It has no identity beyond the row it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricsReport {
    /// Largest drop from a running peak of cumulative profit. Never negative.
    pub max_drawdown: f64,
    /// Mean trade duration, `0.0` for an empty row.
    pub average_duration: f64,
    /// Longest single trade duration, `0.0` for an empty row.
    pub max_duration: f64,
    /// Final cumulative profit divided by `max_drawdown`.
    /// `f64::INFINITY` when no drawdown ever occurred, whatever the sign of the profit.
    /// Serializes as `null` in JSON when infinite.
    pub recovery_factor: f64,
}

impl MetricsReport {
    /// The report of an empty row: everything zero, recovery factor infinite.
    pub fn new() -> Self {
        Self {
            max_drawdown: 0.0,
            average_duration: 0.0,
            max_duration: 0.0,
            recovery_factor: f64::INFINITY,
        }
    }

    /// True when cumulative profit fell below a previous peak at least once.
    pub fn has_drawdown(&self) -> bool {
        self.max_drawdown > 0.0
    }
}

impl Default for MetricsReport {
    fn default() -> Self {
        Self::new()
    }
}
