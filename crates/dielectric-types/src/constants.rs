// ─────────────────────────────────────────────────────────────────────
// Dielectric Lab — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Permittivity of free space (F/m), rounded as in the lab handout.
pub const EPSILON_0_SI: f64 = 8.85e-12;

/// Picofarads per farad.
pub const PF_PER_FARAD: f64 = 1e12;

/// Metres per millimetre.
pub const M_PER_MM: f64 = 1e-3;

/// ε0 expressed in pF/mm (8.85e-3), so that `ε0 · A[mm²] / t[mm]` is in pF.
pub const EPSILON_0_PF_PER_MM: f64 = EPSILON_0_SI * PF_PER_FARAD * M_PER_MM;

/// Lowest accepted temperature reading (°C).
pub const ABSOLUTE_ZERO_C: i32 = -273;

/// Largest accepted capacitance reading (pF), one farad. Keeps ε = C / C0
/// finite for any lab-scale electrode geometry.
pub const MAX_CAPACITANCE_PF: f64 = 1e12;

/// Temperature entry that ends reading collection.
pub const END_OF_READINGS: i32 = -1;

/// Nominal Curie temperature used for materials with no ferroelectric transition.
pub const NO_CURIE_POINT: f64 = -1.0;

/// Fewest readings for which a Curie peak is meaningful.
pub const MIN_CURIE_POINTS: usize = 2;

/// Full-scale width of the ASCII chart, in characters.
pub const CHART_WIDTH: usize = 50;

/// Suffix appended to the material file stem for exported reports.
pub const REPORT_SUFFIX: &str = "_results.txt";
