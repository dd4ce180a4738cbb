// ─────────────────────────────────────────────────────────────────────
// Dielectric Lab — Console Entry Point
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Dielectric constant and Curie temperature lab simulator.
//!
//! Reads menu choices and readings from stdin, prints results to stdout
//! and writes `<Material_Name>_results.txt` to the working directory.

use std::io;
use std::process::ExitCode;

use dielectric_core::input::TokenReader;
use dielectric_lab::menu;
use dielectric_types::config::LabConfig;

fn main() -> ExitCode {
    let config = LabConfig::default();

    let stdin = io::stdin();
    let mut input = TokenReader::new(stdin.lock());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match menu::run(&config, &mut input, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
