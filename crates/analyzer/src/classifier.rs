use core_types::Classification;

/// Maps a strategy's total profit and metrics to a label.
///
/// Rules are evaluated in order and the first match wins:
/// 1. `total_profit > 0` and `recovery_factor > 1` is `Profitable`.
/// 2. `total_profit <= 0` and `max_drawdown > -total_profit` is `Risky`.
/// 3. Anything else is `Neutral`.
///
/// A profitable strategy with a recovery factor of at most one is `Neutral`, not `Risky`:
/// the second rule only applies to non-positive profit.
///
/// `average_duration` is part of the signature but does not affect the result.
pub fn classify(
    total_profit: f64,
    max_drawdown: f64,
    _average_duration: f64,
    recovery_factor: f64,
) -> Classification {
    if total_profit > 0.0 && recovery_factor > 1.0 {
        Classification::Profitable
    } else if total_profit <= 0.0 && max_drawdown > -total_profit {
        Classification::Risky
    } else {
        Classification::Neutral
    }
}
