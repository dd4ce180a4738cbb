// ─────────────────────────────────────────────────────────────────────
// Dielectric Lab — Dielectric Calculator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Parallel-plate vacuum capacitance and relative permittivity.
//!
//! `C0 = ε0 · A / t` with A in mm², t in mm and ε0 in pF/mm, so C0 is in pF.
//! `ε = C / C0` for every measured capacitance.

use dielectric_types::constants::EPSILON_0_PF_PER_MM;
use dielectric_types::error::{LabError, LabResult};
use dielectric_types::state::{MaterialSpec, Reading, Sample};

/// One row of the derived curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DielectricPoint {
    pub temperature_c: i32,
    pub capacitance_pf: f64,
    pub epsilon: f64,
}

/// Vacuum capacitance [pF] of the sample's electrode geometry.
pub fn vacuum_capacitance(spec: &MaterialSpec) -> LabResult<f64> {
    if !spec.thickness_mm.is_finite() || spec.thickness_mm <= 0.0 {
        return Err(LabError::Domain(format!(
            "{}: thickness must be finite and > 0, got {} mm",
            spec.name, spec.thickness_mm
        )));
    }
    if !spec.area_mm2.is_finite() || spec.area_mm2 <= 0.0 {
        return Err(LabError::Domain(format!(
            "{}: electrode area must be finite and > 0, got {} mm²",
            spec.name, spec.area_mm2
        )));
    }
    Ok(EPSILON_0_PF_PER_MM * spec.area_mm2 / spec.thickness_mm)
}

/// Relative permittivity of one reading.
pub fn dielectric_constant(reading: &Reading, c0_pf: f64) -> f64 {
    reading.capacitance_pf / c0_pf
}

/// ε for every reading, in sample order (ascending temperature).
pub fn compute_all(sample: &Sample) -> LabResult<Vec<DielectricPoint>> {
    let c0 = vacuum_capacitance(sample.spec())?;
    Ok(points_with_c0(sample, c0))
}

/// Same as [`compute_all`] for an already known C0.
pub fn points_with_c0(sample: &Sample, c0_pf: f64) -> Vec<DielectricPoint> {
    sample
        .readings()
        .iter()
        .map(|reading| DielectricPoint {
            temperature_c: reading.temperature_c,
            capacitance_pf: reading.capacitance_pf,
            epsilon: dielectric_constant(reading, c0_pf),
        })
        .collect()
}

/// Largest ε on the curve, 0.0 for an empty curve.
pub fn max_epsilon(points: &[DielectricPoint]) -> f64 {
    points.iter().fold(0.0, |acc, p| acc.max(p.epsilon))
}
