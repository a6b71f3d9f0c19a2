//! Analysis orchestration
//!
//! Runs the decomposition and the autocorrelation profile of one series side
//! by side and optionally attaches a narrative summary.

use crate::autocorrelation::{calculate_acf, DEFAULT_MAX_LAG};
use crate::decomposition::AdditiveDecomposer;
use crate::narrative::narrate_or_fallback;
use decomposition_spi::{
    Analysis, DecompositionError, Decomposer, NarrativeContext, Narrator, Observation, Result,
};
use tracing::{debug, warn};

/// Fewest observations accepted by default
pub const DEFAULT_MIN_POINTS: usize = 5;

/// Stateless analysis runner.
#[derive(Debug, Clone)]
pub struct Analyzer<D: Decomposer = AdditiveDecomposer> {
    decomposer: D,
    period: usize,
    max_lag: usize,
    min_points: usize,
}

impl Analyzer<AdditiveDecomposer> {
    /// Additive decomposition with the default lag range and minimum length.
    pub fn new(period: usize) -> Self {
        Self {
            decomposer: AdditiveDecomposer::new(),
            period,
            max_lag: DEFAULT_MAX_LAG,
            min_points: DEFAULT_MIN_POINTS,
        }
    }
}

impl<D: Decomposer> Analyzer<D> {
    pub fn with_max_lag(mut self, max_lag: usize) -> Self {
        self.max_lag = max_lag;
        self
    }

    pub fn with_min_points(mut self, min_points: usize) -> Self {
        self.min_points = min_points;
        self
    }

    /// Swap in another decomposition strategy.
    pub fn with_decomposer<E: Decomposer>(self, decomposer: E) -> Analyzer<E> {
        Analyzer {
            decomposer,
            period: self.period,
            max_lag: self.max_lag,
            min_points: self.min_points,
        }
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn max_lag(&self) -> usize {
        self.max_lag
    }

    pub fn min_points(&self) -> usize {
        self.min_points
    }

    /// Decompose `observations` and compute their autocorrelation profile.
    pub fn analyze(&self, observations: &[Observation]) -> Result<Analysis> {
        if observations.len() < self.min_points {
            warn!(
                required = self.min_points,
                actual = observations.len(),
                "series too short for decomposition"
            );
            return Err(DecompositionError::InsufficientData {
                required: self.min_points,
                actual: observations.len(),
            });
        }

        let values: Vec<f64> = observations.iter().map(|o| o.value).collect();
        let (decomposition, acf) = rayon::join(
            || self.decomposer.decompose(observations, self.period),
            || calculate_acf(&values, self.max_lag),
        );
        let decomposition = decomposition?;

        debug!(
            n = observations.len(),
            period = self.period,
            lags = acf.len(),
            "analysis complete"
        );

        Ok(Analysis {
            decomposition,
            acf,
            summary: None,
        })
    }

    /// [`Analyzer::analyze`] plus a summary from `narrator`.
    ///
    /// A failing narrator never fails the analysis; the templated summary is
    /// attached instead.
    pub fn analyze_with_narrative(
        &self,
        observations: &[Observation],
        narrator: &dyn Narrator,
    ) -> Result<Analysis> {
        let mut analysis = self.analyze(observations)?;
        let context = NarrativeContext::from_result(&analysis.decomposition);
        analysis.summary = Some(narrate_or_fallback(narrator, &context));
        Ok(analysis)
    }
}
