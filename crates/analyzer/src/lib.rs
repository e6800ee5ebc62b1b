use analytics::{MetricsEngine, MetricsReport};
use core_types::{Classification, TradeRow};
use rayon::prelude::*;
use serde::Serialize;

pub mod classifier;
pub mod summary;

pub use classifier::classify;
pub use summary::ClassificationSummary;

/// Everything the pipeline derives from one row: its total profit, its metrics
/// and the label they produce.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RowVerdict {
    pub total_profit: f64,
    pub metrics: MetricsReport,
    pub classification: Classification,
}

/// The main analysis engine: runs the metrics engine and the classifier over rows.
pub struct Analyzer {
    engine: MetricsEngine,
    parallel: bool,
}

impl Analyzer {
    pub fn new(parallel: bool) -> Self {
        Self {
            engine: MetricsEngine::new(),
            parallel,
        }
    }

    /// Computes metrics and total profit for one row, then classifies it.
    pub fn evaluate(&self, row: &TradeRow) -> RowVerdict {
        let metrics = self.engine.calculate(row);
        let total_profit = row.total_profit();
        let classification = classify(
            total_profit,
            metrics.max_drawdown,
            metrics.average_duration,
            metrics.recovery_factor,
        );

        RowVerdict {
            total_profit,
            metrics,
            classification,
        }
    }

    /// Evaluates every row. The returned verdicts are in the same order as `rows`,
    /// whether or not the analyzer runs in parallel.
    pub fn evaluate_all(&self, rows: &[TradeRow]) -> Vec<RowVerdict> {
        self.evaluate_all_with(rows, || {})
    }

    /// Like `evaluate_all`, calling `on_row` once after each row is evaluated.
    /// In parallel mode `on_row` runs on the worker threads.
    pub fn evaluate_all_with<F>(&self, rows: &[TradeRow], on_row: F) -> Vec<RowVerdict>
    where
        F: Fn() + Sync,
    {
        tracing::debug!(rows = rows.len(), parallel = self.parallel, "Evaluating rows.");

        let evaluate = |row: &TradeRow| {
            let verdict = self.evaluate(row);
            on_row();
            verdict
        };

        if self.parallel {
            rows.par_iter().map(evaluate).collect()
        } else {
            rows.iter().map(evaluate).collect()
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(false)
    }
}
