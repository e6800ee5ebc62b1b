use std::ops::Deref;

/// A single closed trade: what it made (or lost) and how long it was held.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trade {
    pub profit: f64,
    /// Holding time. Never negative for generated data.
    pub duration: f64,
}

impl Trade {
    pub fn new(profit: f64, duration: f64) -> Self {
        Self { profit, duration }
    }
}

/// The ordered execution history of one strategy.
///
/// Order matters: cumulative profit, and therefore drawdown, is computed over the
/// trades in the sequence they appear here. A row may be empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TradeRow {
    trades: Vec<Trade>,
}

impl TradeRow {
    pub fn new(trades: Vec<Trade>) -> Self {
        Self { trades }
    }

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// Sum of every trade's profit, left to right. `0.0` for an empty row.
    pub fn total_profit(&self) -> f64 {
        self.trades.iter().fold(0.0, |sum, trade| sum + trade.profit)
    }
}

impl Deref for TradeRow {
    type Target = [Trade];

    fn deref(&self) -> &Self::Target {
        &self.trades
    }
}

impl From<Vec<Trade>> for TradeRow {
    fn from(trades: Vec<Trade>) -> Self {
        Self::new(trades)
    }
}

impl FromIterator<Trade> for TradeRow {
    fn from_iter<I: IntoIterator<Item = Trade>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TradeRow {
    type Item = &'a Trade;
    type IntoIter = std::slice::Iter<'a, Trade>;

    fn into_iter(self) -> Self::IntoIter {
        self.trades.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_profit() {
        let row: TradeRow = vec![Trade::new(-50.0, 20.0), Trade::new(10.0, 30.0)].into();
        assert_eq!(row.total_profit(), -40.0);
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn test_empty_row() {
        let row = TradeRow::default();
        assert!(row.is_empty());
        assert_eq!(row.total_profit(), 0.0);
    }
}
