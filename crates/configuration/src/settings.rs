use crate::error::ConfigError;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generation: GenerationParams,
    #[serde(default)]
    pub analysis: AnalysisParams,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generation.validate()
    }
}

/// Bounds for the synthetic trade rows.
///
/// Row lengths are drawn from the closed range `[min_row_length, max_row_length]`;
/// profits and durations from the half-open ranges `[min, max)`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// Number of rows (strategies) in the dataset.
    pub rows: usize,
    pub min_row_length: usize,
    pub max_row_length: usize,
    pub min_profit: f64,
    pub max_profit: f64,
    pub min_duration: f64,
    pub max_duration: f64,
    /// Fixes the random sequence. Without it every run draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            rows: 100,
            min_row_length: 1,
            max_row_length: 1000,
            min_profit: -1000.0,
            max_profit: 1000.0,
            min_duration: 1.0,
            max_duration: 1200.0,
            seed: None,
        }
    }
}

impl GenerationParams {
    /// Checks that every range can actually be sampled from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_row_length > self.max_row_length {
            return Err(ConfigError::ValidationError(format!(
                "min_row_length ({}) must not exceed max_row_length ({})",
                self.min_row_length, self.max_row_length
            )));
        }
        let bounds = [
            ("min_profit", self.min_profit),
            ("max_profit", self.max_profit),
            ("min_duration", self.min_duration),
            ("max_duration", self.max_duration),
        ];
        if let Some((name, value)) = bounds.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::ValidationError(format!(
                "{} must be finite, got {}",
                name, value
            )));
        }
        if self.min_profit >= self.max_profit {
            return Err(ConfigError::ValidationError(format!(
                "min_profit ({}) must be below max_profit ({})",
                self.min_profit, self.max_profit
            )));
        }
        if self.min_duration < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "min_duration ({}) must not be negative",
                self.min_duration
            )));
        }
        if self.min_duration >= self.max_duration {
            return Err(ConfigError::ValidationError(format!(
                "min_duration ({}) must be below max_duration ({})",
                self.min_duration, self.max_duration
            )));
        }
        // Both bounds may be finite while their difference overflows, which the
        // uniform sampler cannot handle.
        if !(self.max_profit - self.min_profit).is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "profit range [{}, {}) is too wide to sample from",
                self.min_profit, self.max_profit
            )));
        }
        if !(self.max_duration - self.min_duration).is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "duration range [{}, {}) is too wide to sample from",
                self.min_duration, self.max_duration
            )));
        }
        Ok(())
    }
}

/// Contains parameters for the evaluation and reporting stage.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalysisParams {
    /// Evaluate rows on the rayon thread pool. Output order is unaffected.
    pub parallel: bool,
    /// Print a table of label counts after the per-row lines.
    pub summary: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.generation.rows, 100);
        assert_eq!(config.generation.max_row_length, 1000);
        assert!(!config.analysis.parallel);
    }

    #[test]
    fn test_inverted_lengths_are_rejected() {
        let params = GenerationParams {
            min_row_length: 10,
            max_row_length: 5,
            ..GenerationParams::default()
        };
        assert!(matches!(params.validate(), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_empty_profit_range_is_rejected() {
        let params = GenerationParams {
            min_profit: 5.0,
            max_profit: 5.0,
            ..GenerationParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_negative_duration_is_rejected() {
        let params = GenerationParams {
            min_duration: -1.0,
            ..GenerationParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_non_finite_bound_is_rejected() {
        let params = GenerationParams {
            max_profit: f64::INFINITY,
            ..GenerationParams::default()
        };
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("max_profit must be finite"));
    }

    #[test]
    fn test_overflowing_range_width_is_rejected() {
        let params = GenerationParams {
            min_profit: -1e308,
            max_profit: 1e308,
            ..GenerationParams::default()
        };
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("profit range"));

        let params = GenerationParams {
            min_duration: 0.0,
            max_duration: f64::MAX,
            ..GenerationParams::default()
        };
        assert!(params.validate().is_ok());

        let params = GenerationParams {
            min_profit: -f64::MAX,
            max_profit: 0.0,
            ..GenerationParams::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_zero_rows_and_empty_rows_are_allowed() {
        let params = GenerationParams {
            rows: 0,
            min_row_length: 0,
            max_row_length: 0,
            ..GenerationParams::default()
        };
        assert!(params.validate().is_ok());
    }
}
