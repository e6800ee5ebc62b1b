use crate::RowVerdict;
use core_types::Classification;
use serde::Serialize;

/// How many rows ended up under each label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClassificationSummary {
    pub profitable: usize,
    pub risky: usize,
    pub neutral: usize,
}

impl ClassificationSummary {
    pub fn from_verdicts(verdicts: &[RowVerdict]) -> Self {
        let mut summary = Self::default();
        for verdict in verdicts {
            match verdict.classification {
                Classification::Profitable => summary.profitable += 1,
                Classification::Risky => summary.risky += 1,
                Classification::Neutral => summary.neutral += 1,
            }
        }
        summary
    }

    pub fn count(&self, label: Classification) -> usize {
        match label {
            Classification::Profitable => self.profitable,
            Classification::Risky => self.risky,
            Classification::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.profitable + self.risky + self.neutral
    }
}
