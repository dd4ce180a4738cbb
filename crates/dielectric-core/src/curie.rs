// ─────────────────────────────────────────────────────────────────────
// Dielectric Lab — Curie Estimator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Curie temperature estimate from the measured ε(T) curve.
//!
//! The estimate is the temperature of the largest ε among the readings.
//! This is a peak pick on the raw data, not a fit: its resolution is the
//! spacing of the readings around the peak. When several readings share
//! the maximum, the lowest temperature (first in sorted order) is reported.

use crate::calculator::dielectric_constant;
use dielectric_types::state::Sample;

pub use dielectric_types::constants::MIN_CURIE_POINTS;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurieEstimate {
    /// Temperature of the ε peak [°C].
    pub estimated_c: i32,
    /// Nominal Curie temperature of the material [°C].
    pub expected_c: f64,
    /// |estimated − expected| [°C].
    pub difference_c: f64,
    /// ε at the peak.
    pub peak_epsilon: f64,
}

/// Outcome of the Curie step of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurieAnalysis {
    /// Material has no Curie point; no estimate attempted.
    NotFerroelectric,
    /// Fewer readings than the configured minimum.
    InsufficientData,
    Estimated(CurieEstimate),
}

/// Peak-ε estimate with the default minimum of two readings.
pub fn estimate(sample: &Sample, c0_pf: f64) -> Option<CurieEstimate> {
    estimate_with_min(sample, c0_pf, MIN_CURIE_POINTS)
}

pub fn estimate_with_min(sample: &Sample, c0_pf: f64, min_points: usize) -> Option<CurieEstimate> {
    if sample.len() < min_points.max(1) {
        return None;
    }

    let (estimated_c, peak_epsilon) =
        sample
            .readings()
            .iter()
            .fold(None, |best: Option<(i32, f64)>, reading| {
                let eps = dielectric_constant(reading, c0_pf);
                match best {
                    Some((_, best_eps)) if eps <= best_eps => best,
                    _ => Some((reading.temperature_c, eps)),
                }
            })?;

    let expected_c = sample.spec().curie_temp_c;
    Some(CurieEstimate {
        estimated_c,
        expected_c,
        difference_c: (f64::from(estimated_c) - expected_c).abs(),
        peak_epsilon,
    })
}

/// Branch on the material's Curie sentinel, then estimate.
pub fn analyze(sample: &Sample, c0_pf: f64, min_points: usize) -> CurieAnalysis {
    if !sample.spec().is_ferroelectric() {
        return CurieAnalysis::NotFerroelectric;
    }
    match estimate_with_min(sample, c0_pf, min_points) {
        Some(est) => CurieAnalysis::Estimated(est),
        None => CurieAnalysis::InsufficientData,
    }
}
