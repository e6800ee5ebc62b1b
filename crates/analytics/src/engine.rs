use crate::report::MetricsReport;
use core_types::Trade;

/// A stateless calculator for deriving risk metrics from a strategy's trades.
#[derive(Debug, Default)]
pub struct MetricsEngine {}

impl MetricsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for calculating the metrics of one trade row.
    ///
    /// Makes a single forward pass over `trades`, keeping only running accumulators.
    /// The function is total: every input, including an empty slice, yields a report.
    ///
    /// # Arguments
    ///
    /// * `trades` - The trades of one strategy, in execution order.
    pub fn calculate(&self, trades: &[Trade]) -> MetricsReport {
        let mut cumulative_profit = 0.0_f64;
        // The peak is anchored at zero, not at the first cumulative value, so a row
        // that only ever loses measures its drawdown from break-even.
        let mut peak = 0.0_f64;
        let mut max_drawdown = 0.0_f64;
        let mut total_duration = 0.0_f64;
        let mut max_duration = 0.0_f64;

        for trade in trades {
            cumulative_profit += trade.profit;
            total_duration += trade.duration;
            if trade.duration > max_duration {
                max_duration = trade.duration;
            }
            if cumulative_profit > peak {
                peak = cumulative_profit;
            }
            let drawdown = peak - cumulative_profit;
            if drawdown > max_drawdown {
                max_drawdown = drawdown;
            }
        }

        let average_duration = if trades.is_empty() {
            0.0
        } else {
            total_duration / trades.len() as f64
        };

        let recovery_factor = if max_drawdown > 0.0 {
            cumulative_profit / max_drawdown
        } else {
            f64::INFINITY
        };

        tracing::trace!(
            trades = trades.len(),
            max_drawdown,
            recovery_factor,
            "Calculated row metrics."
        );

        MetricsReport {
            max_drawdown,
            average_duration,
            max_duration,
            recovery_factor,
        }
    }
}

/// Shorthand for `MetricsEngine::new().calculate(trades)`.
pub fn compute_metrics(trades: &[Trade]) -> MetricsReport {
    MetricsEngine::new().calculate(trades)
}
