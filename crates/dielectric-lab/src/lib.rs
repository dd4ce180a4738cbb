// ─────────────────────────────────────────────────────────────────────
// Dielectric Lab — Console Front End
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Menu, informational screens and the simulation run.

pub mod menu;
pub mod screens;
pub mod simulation;
