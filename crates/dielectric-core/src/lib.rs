// ─────────────────────────────────────────────────────────────────────
// Dielectric Lab — Dielectric Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Measurement-to-ε conversion, Curie estimate, console entry and reports.

pub mod calculator;
pub mod collector;
pub mod curie;
pub mod input;
pub mod report;
