//! Seasonal period presets.

use decomposition_spi::DecompositionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Common reporting granularities and the lag each implies.
///
/// The engine accepts any positive period; these are shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonalPeriod {
    /// 7 day lag
    Weekly,
    /// 12 month lag
    Fiscal,
    /// 4 quarter lag
    Quarterly,
    /// 30 day lag
    Granular,
}

impl SeasonalPeriod {
    pub const ALL: [SeasonalPeriod; 4] = [
        SeasonalPeriod::Weekly,
        SeasonalPeriod::Fiscal,
        SeasonalPeriod::Quarterly,
        SeasonalPeriod::Granular,
    ];

    /// Number of observations per cycle.
    pub fn period(&self) -> usize {
        match self {
            SeasonalPeriod::Weekly => 7,
            SeasonalPeriod::Fiscal => 12,
            SeasonalPeriod::Quarterly => 4,
            SeasonalPeriod::Granular => 30,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeasonalPeriod::Weekly => "7 Day Lag (Weekly)",
            SeasonalPeriod::Fiscal => "12 Month Lag (Fiscal)",
            SeasonalPeriod::Quarterly => "4 Quarter Lag (Annual)",
            SeasonalPeriod::Granular => "30 Day Lag (Granular)",
        }
    }
}

impl fmt::Display for SeasonalPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SeasonalPeriod {
    type Err = DecompositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" | "week" => Ok(SeasonalPeriod::Weekly),
            "fiscal" | "monthly" | "month" => Ok(SeasonalPeriod::Fiscal),
            "quarterly" | "quarter" | "annual" => Ok(SeasonalPeriod::Quarterly),
            "granular" | "daily" => Ok(SeasonalPeriod::Granular),
            other => Err(DecompositionError::InvalidParameter {
                name: "preset".to_string(),
                reason: format!(
                    "unknown preset '{}', expected weekly, fiscal, quarterly or granular",
                    other
                ),
            }),
        }
    }
}
