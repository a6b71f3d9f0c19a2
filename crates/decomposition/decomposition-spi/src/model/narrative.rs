//! Narrative models
//!
//! Inputs and outputs of narrative providers, which turn a numeric
//! decomposition into prose for a report.

use crate::model::DecompositionResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Net direction of the fitted trend line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendDirection {
    /// Positive slope
    Bullish,
    /// Negative slope
    Bearish,
    /// Zero slope
    Neutral,
}

impl TrendDirection {
    pub fn from_slope(slope: f64) -> Self {
        if slope > 0.0 {
            TrendDirection::Bullish
        } else if slope < 0.0 {
            TrendDirection::Bearish
        } else {
            TrendDirection::Neutral
        }
    }

    /// Report label, e.g. "Bullish/Appreciating".
    pub fn label(&self) -> &'static str {
        match self {
            TrendDirection::Bullish => "Bullish/Appreciating",
            TrendDirection::Bearish => "Bearish/Depreciating",
            TrendDirection::Neutral => "Consolidating/Neutral",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Figures handed to a narrative provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeContext {
    pub data_points: usize,
    pub direction: TrendDirection,
    pub slope: f64,
    pub projected_delta: f64,
    pub r_squared: f64,
}

impl NarrativeContext {
    pub fn from_result(result: &DecompositionResult) -> Self {
        Self {
            data_points: result.len(),
            direction: result.trend_direction(),
            slope: result.slope,
            projected_delta: result.projected_delta(),
            r_squared: result.r_squared,
        }
    }

    /// Plain-text summary of the figures, one per line.
    pub fn prompt(&self) -> String {
        format!(
            "- Data Points: {}\n\
             - Long-term Trajectory: {}\n\
             - Growth/Decline Rate (Slope): {:.4}\n\
             - Estimated Total Value Delta: {:.2}\n\
             - Statistical Confidence (R-Squared): {:.4}",
            self.data_points, self.direction, self.slope, self.projected_delta, self.r_squared
        )
    }
}

/// Prose interpretation of an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub interpretation: String,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}
