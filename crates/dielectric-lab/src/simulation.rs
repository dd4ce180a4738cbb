// ─────────────────────────────────────────────────────────────────────
// Dielectric Lab — Simulation Run
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! One simulation run: material selection, reading entry, analysis, reports.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use dielectric_core::calculator::{points_with_c0, vacuum_capacitance};
use dielectric_core::collector::collect;
use dielectric_core::curie::{analyze, CurieAnalysis};
use dielectric_core::input::{prompt, Token, TokenReader};
use dielectric_core::report::{export_report, write_chart, write_curie, write_results};
use dielectric_types::config::LabConfig;
use dielectric_types::error::{LabError, LabResult};
use dielectric_types::state::{MaterialRegistry, MaterialSpec, Sample};

#[derive(Debug, Clone, PartialEq)]
pub enum SimulationOutcome {
    /// Input ended before a material was chosen.
    Aborted,
    /// The user entered no readings.
    NoData,
    Completed {
        material: String,
        readings: usize,
        curie: CurieAnalysis,
        /// `None` when the report file could not be written.
        saved_to: Option<PathBuf>,
    },
}

/// List the registry and read a 1-based choice until it is in range.
fn select_material<'r, R: BufRead, W: Write>(
    registry: &'r MaterialRegistry,
    input: &mut TokenReader<R>,
    out: &mut W,
) -> LabResult<Option<&'r MaterialSpec>> {
    writeln!(out, "\nAvailable materials:")?;
    for (i, name) in registry.names().enumerate() {
        writeln!(out, "{}. {name}", i + 1)?;
    }

    let n = registry.len();
    prompt(out, &format!("Select a material (1-{n}): "))?;
    loop {
        match input.read::<usize>()? {
            Token::End => return Ok(None),
            Token::Value(choice) => {
                if let Some(spec) = registry.select(choice) {
                    return Ok(Some(spec));
                }
                input.discard_line();
            }
            Token::Invalid(_) => {}
        }
        prompt(
            out,
            &format!("Invalid selection. Please enter a number between 1 and {n}: "),
        )?;
    }
}

pub fn run_simulation<R: BufRead, W: Write>(
    config: &LabConfig,
    registry: &MaterialRegistry,
    input: &mut TokenReader<R>,
    out: &mut W,
) -> LabResult<SimulationOutcome> {
    let Some(spec) = select_material(registry, input, out)? else {
        return Ok(SimulationOutcome::Aborted);
    };

    let readings = collect(input, out)?;
    if readings.is_empty() {
        writeln!(out, "\nNo data entered. Returning to main menu.")?;
        return Ok(SimulationOutcome::NoData);
    }
    let sample = Sample::with_readings(spec.clone(), readings);

    let c0 = vacuum_capacitance(sample.spec())?;
    let points = points_with_c0(&sample, c0);
    write_results(out, sample.spec(), c0, &points)?;

    let curie = analyze(&sample, c0, config.min_curie_points);
    write_curie(out, sample.spec(), &curie)?;

    write_chart(out, &points, config.chart_width)?;

    let saved_to = match export_report(
        &config.output_dir,
        &config.report_suffix,
        sample.spec(),
        c0,
        &points,
    ) {
        Ok(path) => {
            writeln!(out, "\nResults saved to '{}'.", path.display())?;
            Some(path)
        }
        Err(LabError::ReportWrite { path, .. }) => {
            writeln!(out, "\nError: Could not write results to '{path}'.")?;
            None
        }
        Err(_) => {
            writeln!(out, "\nError: Could not create file for saving results.")?;
            None
        }
    };

    Ok(SimulationOutcome::Completed {
        material: sample.spec().name.clone(),
        readings: sample.len(),
        curie,
        saved_to,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_config() -> LabConfig {
        let epoch_ns = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "dielectric_lab_sim_{}_{}",
            std::process::id(),
            epoch_ns
        ));
        std::fs::create_dir_all(&dir).unwrap();
        LabConfig {
            output_dir: dir,
            ..LabConfig::default()
        }
    }

    fn run(config: &LabConfig, script: &str) -> (SimulationOutcome, String) {
        let registry = config.registry().unwrap();
        let mut input = TokenReader::new(Cursor::new(script.to_string()));
        let mut out = Vec::new();
        let outcome = run_simulation(config, &registry, &mut input, &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_barium_titanate_run() {
        let config = scratch_config();
        let (outcome, text) = run(
            &config,
            "1\n25\n100\n100\n300\n150\n200\n-1\n",
        );

        let (material, readings, curie, saved_to) = match outcome {
            SimulationOutcome::Completed {
                material,
                readings,
                curie,
                saved_to,
            } => (material, readings, curie, saved_to),
            other => panic!("expected a completed run, got {other:?}"),
        };
        assert_eq!(material, "Barium Titanate");
        assert_eq!(readings, 3);
        match curie {
            CurieAnalysis::Estimated(est) => assert_eq!(est.estimated_c, 100),
            other => panic!("expected estimate, got {other:?}"),
        }

        let path = saved_to.expect("report written");
        assert!(path.ends_with("Barium_Titanate_results.txt"));
        assert!(path.exists());

        assert!(text.contains("1. Barium Titanate\n2. Quartz\n3. Titanium Dioxide\n"));
        assert!(text.contains("------ RESULTS ------"));
        assert!(text.contains("Vacuum capacitance (C0): 0.2992 pF"));
        assert!(text.contains("Estimated Curie Temperature: 100°C"));
        assert!(text.contains("ASCII Graph: Dielectric Constant vs Temperature"));
        assert!(text.contains("Results saved to"));
        std::fs::remove_dir_all(&config.output_dir).unwrap();
    }

    #[test]
    fn test_quartz_skips_curie() {
        let config = scratch_config();
        let (outcome, text) = run(&config, "2\n25\n10\n80\n12\n-1\n");
        assert!(matches!(
            outcome,
            SimulationOutcome::Completed {
                curie: CurieAnalysis::NotFerroelectric,
                ..
            }
        ));
        assert!(text.contains("non-ferroelectric"));
        assert!(!text.contains("Estimated Curie Temperature"));
        std::fs::remove_dir_all(&config.output_dir).unwrap();
    }

    #[test]
    fn test_invalid_selection_reprompts() {
        let config = scratch_config();
        let (outcome, text) = run(&config, "0\nfoo\n9\n3\n-1\n");
        assert_eq!(outcome, SimulationOutcome::NoData);
        assert_eq!(
            text.matches("Invalid selection. Please enter a number between 1 and 3: ")
                .count(),
            3
        );
        assert!(text.contains("No data entered. Returning to main menu."));
        std::fs::remove_dir_all(&config.output_dir).unwrap();
    }

    #[test]
    fn test_end_of_input_aborts() {
        let config = scratch_config();
        let (outcome, _) = run(&config, "");
        assert_eq!(outcome, SimulationOutcome::Aborted);
        std::fs::remove_dir_all(&config.output_dir).unwrap();
    }

    #[test]
    fn test_export_failure_is_not_fatal() {
        let mut config = scratch_config();
        let base = config.output_dir.clone();
        config.output_dir = base.join("missing").join("dir");
        let (outcome, text) = run(&config, "3\n40\n5\n-1\n");
        assert!(matches!(
            outcome,
            SimulationOutcome::Completed {
                curie: CurieAnalysis::InsufficientData,
                saved_to: None,
                ..
            }
        ));
        assert!(text.contains("Error: Could not create file for saving results."));
        assert!(text.contains("ASCII Graph"));
        std::fs::remove_dir_all(&base).unwrap();
    }
}
