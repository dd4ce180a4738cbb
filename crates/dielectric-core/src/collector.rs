// ─────────────────────────────────────────────────────────────────────
// Dielectric Lab — Reading Collector
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Interactive entry of (temperature, capacitance) readings.

use std::io::{BufRead, Write};

use crate::input::{prompt, Token, TokenReader};
use dielectric_types::constants::{END_OF_READINGS, MAX_CAPACITANCE_PF};
use dielectric_types::error::LabResult;
use dielectric_types::state::{sort_readings, Reading};

/// Prompt for readings until the temperature sentinel (−1) or end of input.
///
/// Rejected entries are reported and entry continues with a fresh temperature
/// prompt. The returned readings are sorted by temperature; an empty vector
/// means the user entered no data.
pub fn collect<R: BufRead, W: Write>(
    input: &mut TokenReader<R>,
    out: &mut W,
) -> LabResult<Vec<Reading>> {
    writeln!(
        out,
        "\nEnter temperature (°C) and capacitance (pF). Type {END_OF_READINGS} for temperature to stop."
    )?;

    let mut readings = Vec::new();
    loop {
        prompt(out, "Temperature (°C): ")?;
        let temperature = match input.read::<i32>()? {
            Token::Value(t) => t,
            Token::Invalid(_) => {
                writeln!(out, "Invalid input. Please enter a number.")?;
                continue;
            }
            Token::End => break,
        };
        if temperature == END_OF_READINGS {
            break;
        }

        prompt(out, "Capacitance (pF): ")?;
        let capacitance = match input.read::<f64>()? {
            Token::Value(c) => c,
            Token::Invalid(_) => {
                writeln!(out, "Invalid input. Please enter a number.")?;
                continue;
            }
            Token::End => break,
        };

        match Reading::new(temperature, capacitance) {
            Ok(reading) => readings.push(reading),
            Err(_) => writeln!(
                out,
                "Invalid values. Temperature must be above -273°C and capacitance must be positive (at most {MAX_CAPACITANCE_PF:e} pF)."
            )?,
        }
    }

    sort_readings(&mut readings);
    Ok(readings)
}
