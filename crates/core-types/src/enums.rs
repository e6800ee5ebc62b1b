use serde::Serialize;
use std::fmt;

/// The label assigned to a strategy once its metrics have been evaluated.
///
/// Each variant carries a fixed integer code, which is what the reporter prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Classification {
    Profitable,
    Risky,
    Neutral,
}

/// Code and display name of every label, in summary-table order.
static LABELS: [(Classification, i8, &str); 3] = [
    (Classification::Profitable, 1, "Profitable"),
    (Classification::Risky, -1, "Risky"),
    (Classification::Neutral, 0, "Neutral"),
];

impl Classification {
    /// All labels, in the order the summary table lists them.
    pub const ALL: [Classification; 3] = [
        Classification::Profitable,
        Classification::Risky,
        Classification::Neutral,
    ];

    fn entry(&self) -> &'static (Classification, i8, &'static str) {
        &LABELS[*self as usize]
    }

    /// Returns the integer code of the label: `1`, `-1` or `0`.
    pub fn code(&self) -> i8 {
        self.entry().1
    }

    pub fn name(&self) -> &'static str {
        self.entry().2
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_table_matches_variants() {
        for label in Classification::ALL {
            assert_eq!(label.entry().0, label);
            assert_eq!(label.name(), format!("{:?}", label));
        }
    }

    #[test]
    fn test_display_prints_code() {
        assert_eq!(Classification::Profitable.to_string(), "1");
        assert_eq!(Classification::Risky.to_string(), "-1");
        assert_eq!(Classification::Neutral.to_string(), "0");
    }
}
