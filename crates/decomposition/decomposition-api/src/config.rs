//! Analysis configuration types.

use crate::period::SeasonalPeriod;
use decomposition_core::{Analyzer, DEFAULT_MAX_LAG, DEFAULT_MIN_POINTS};
use decomposition_spi::{DecompositionError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Seasonality period in observations
    pub period: usize,
    /// Largest autocorrelation lag reported
    pub max_lag: usize,
    /// Fewest observations accepted
    pub min_points: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            period: SeasonalPeriod::Fiscal.period(),
            max_lag: DEFAULT_MAX_LAG,
            min_points: DEFAULT_MIN_POINTS,
        }
    }
}

impl AnalysisConfig {
    /// Create a configuration with the given period and default limits.
    pub fn new(period: usize) -> Self {
        Self {
            period,
            ..Self::default()
        }
    }

    /// Create a configuration from a preset period.
    pub fn preset(period: SeasonalPeriod) -> Self {
        Self::new(period.period())
    }

    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::new()
    }

    /// Check that every field is usable.
    pub fn validate(&self) -> Result<()> {
        if self.period == 0 {
            return Err(DecompositionError::InvalidPeriod(self.period));
        }
        if self.min_points == 0 {
            return Err(DecompositionError::InvalidParameter {
                name: "min_points".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Build an analyzer after validating.
    pub fn analyzer(&self) -> Result<Analyzer> {
        self.validate()?;
        Ok(Analyzer::new(self.period)
            .with_max_lag(self.max_lag)
            .with_min_points(self.min_points))
    }
}

/// Builder for AnalysisConfig.
#[derive(Debug, Default)]
pub struct AnalysisConfigBuilder {
    period: Option<usize>,
    max_lag: Option<usize>,
    min_points: Option<usize>,
}

impl AnalysisConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the period.
    pub fn period(mut self, period: usize) -> Self {
        self.period = Some(period);
        self
    }

    /// Set the period from a preset.
    pub fn seasonal_period(mut self, preset: SeasonalPeriod) -> Self {
        self.period = Some(preset.period());
        self
    }

    /// Set the largest autocorrelation lag.
    pub fn max_lag(mut self, max_lag: usize) -> Self {
        self.max_lag = Some(max_lag);
        self
    }

    /// Set the minimum series length.
    pub fn min_points(mut self, min_points: usize) -> Self {
        self.min_points = Some(min_points);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<AnalysisConfig> {
        let defaults = AnalysisConfig::default();
        let config = AnalysisConfig {
            period: self.period.unwrap_or(defaults.period),
            max_lag: self.max_lag.unwrap_or(defaults.max_lag),
            min_points: self.min_points.unwrap_or(defaults.min_points),
        };
        config.validate()?;
        Ok(config)
    }
}
