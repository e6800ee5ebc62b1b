//! # Strategy Lab Analytics Engine
//!
//! This crate derives the risk and performance statistics of a single trading
//! strategy from its ordered trade history.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of files,
//!   random generation or the command line. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `MetricsEngine` is a stateless calculator. It takes
//!   a slice of trades as input and produces a `MetricsReport` as output, in one pass
//!   and without ever failing.
//!
//! ## Public API
//!
//! - `MetricsEngine`: The struct that contains the calculation logic.
//! - `compute_metrics`: A free-function shorthand for a one-off calculation.
//! - `MetricsReport`: Max drawdown, average and max duration, and recovery factor.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{compute_metrics, MetricsEngine};
pub use report::MetricsReport;
