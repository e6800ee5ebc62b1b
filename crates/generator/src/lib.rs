use configuration::GenerationParams;
use core_types::{Trade, TradeRow};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub mod error;

pub use error::GeneratorError;

/// Produces random trade rows within the configured bounds.
///
/// Rows are drawn one after another from a single RNG, so a seeded generator always
/// yields the same dataset.
pub struct TradeGenerator {
    params: GenerationParams,
    rng: StdRng,
}

impl TradeGenerator {
    /// Builds a generator, seeding it from `params.seed` when set and from OS
    /// entropy otherwise.
    pub fn new(params: &GenerationParams) -> Result<Self, GeneratorError> {
        Self::with_seed(params, params.seed)
    }

    /// Builds a generator with an explicit seed, ignoring `params.seed`.
    pub fn with_seed(params: &GenerationParams, seed: Option<u64>) -> Result<Self, GeneratorError> {
        params.validate()?;

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            params: params.clone(),
            rng,
        })
    }

    /// Draws one row: a length, then a `(profit, duration)` pair per trade.
    pub fn generate_row(&mut self) -> TradeRow {
        let length = self
            .rng
            .random_range(self.params.min_row_length..=self.params.max_row_length);

        let mut trades = Vec::with_capacity(length);
        for _ in 0..length {
            let profit = self
                .rng
                .random_range(self.params.min_profit..self.params.max_profit);
            let duration = self
                .rng
                .random_range(self.params.min_duration..self.params.max_duration);
            trades.push(Trade::new(profit, duration));
        }

        TradeRow::new(trades)
    }

    /// Generates the full dataset of `params.rows` rows.
    pub fn generate_rows(&mut self) -> Vec<TradeRow> {
        let rows: Vec<TradeRow> = (0..self.params.rows).map(|_| self.generate_row()).collect();

        tracing::info!(
            rows = rows.len(),
            trades = rows.iter().map(|r| r.len()).sum::<usize>(),
            "Generated synthetic dataset."
        );

        rows
    }
}
