// ─────────────────────────────────────────────────────────────────────
// Dielectric Lab — Informational Screens
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Static lab-handout text shown from the main menu.

use std::io::Write;

use dielectric_types::error::LabResult;

/// Menu entries 1–4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Theory,
    Apparatus,
    Procedure,
    Precautions,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Theory => "THEORY",
            Screen::Apparatus => "APPARATUS USED",
            Screen::Procedure => "PROCEDURE",
            Screen::Precautions => "PRECAUTIONS",
        }
    }

    pub fn lines(self) -> &'static [&'static str] {
        match self {
            Screen::Theory => &[
                "Dielectric materials are insulating substances where electrostatic fields persist.",
                "The dielectric constant (ε) is the ratio of capacitance with and without the dielectric.",
                "For materials like BaTiO3, ε increases as temperature increases, peaking at Curie temperature.",
                "After Curie temperature, ferroelectricity is lost, and ε decreases.",
            ],
            Screen::Apparatus => &[
                "1. Barium Titanate (BaTiO3) Sample",
                "2. Oven with temperature controller",
                "3. Digital capacitance meter",
                "4. RTD sensor for temperature",
                "5. Probe arrangement with aluminum foil",
            ],
            Screen::Procedure => &[
                "1. Mount the sample with probes and aluminum foil",
                "2. Connect probes to the capacitance meter",
                "3. Heat the sample in oven",
                "4. Measure capacitance at different temperatures",
                "5. Calculate ε using ε = C / C0, where C0 = ε0*A/t",
            ],
            Screen::Precautions => &[
                "1. Probe should touch sample gently.",
                "2. Take small intervals near Curie temperature.",
                "3. Take reading only when oven is OFF.",
            ],
        }
    }

    pub fn write<W: Write>(self, out: &mut W) -> LabResult<()> {
        writeln!(out, "\n--- {} ---", self.title())?;
        for line in self.lines() {
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;
        Ok(())
    }
}
