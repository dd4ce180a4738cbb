// ─────────────────────────────────────────────────────────────────────
// Dielectric Lab — Report Renderer
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Console table, ASCII chart, Curie summary and text-file export.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::calculator::{max_epsilon, DielectricPoint};
use crate::curie::CurieAnalysis;
use dielectric_types::error::{LabError, LabResult};
use dielectric_types::state::MaterialSpec;

const RULE: &str = "--------------------------------------------------------";

/// `<name with spaces replaced by underscores><suffix>`.
pub fn report_file_name(material_name: &str, suffix: &str) -> String {
    format!("{}{}", material_name.replace(' ', "_"), suffix)
}

/// Material, electrode geometry and C0 lines.
pub fn write_header<W: Write>(out: &mut W, spec: &MaterialSpec, c0_pf: f64) -> LabResult<()> {
    let side = spec.side_mm();
    writeln!(out, "Material: {}", spec.name)?;
    writeln!(
        out,
        "Sample dimensions: {side:.2} mm × {side:.2} mm × {:.2} mm",
        spec.thickness_mm
    )?;
    writeln!(out, "Vacuum capacitance (C0): {c0_pf:.4} pF")?;
    Ok(())
}

/// Tab-separated temperature / capacitance / ε table.
pub fn write_table<W: Write>(out: &mut W, points: &[DielectricPoint]) -> LabResult<()> {
    writeln!(out, "Temp (°C)\tCapacitance (pF)\tDielectric Constant (ε)")?;
    writeln!(out, "{RULE}")?;
    for p in points {
        writeln!(
            out,
            "{}\t\t{:.2}\t\t{:.2}",
            p.temperature_c, p.capacitance_pf, p.epsilon
        )?;
    }
    Ok(())
}

/// Results block shown on the console after entry.
pub fn write_results<W: Write>(
    out: &mut W,
    spec: &MaterialSpec,
    c0_pf: f64,
    points: &[DielectricPoint],
) -> LabResult<()> {
    writeln!(out, "\n------ RESULTS ------")?;
    write_header(out, spec, c0_pf)?;
    writeln!(out)?;
    write_table(out, points)
}

pub fn write_curie<W: Write>(
    out: &mut W,
    spec: &MaterialSpec,
    analysis: &CurieAnalysis,
) -> LabResult<()> {
    match analysis {
        CurieAnalysis::NotFerroelectric => writeln!(
            out,
            "\nNote: This material doesn't have a Curie temperature (non-ferroelectric)."
        )?,
        CurieAnalysis::InsufficientData => writeln!(
            out,
            "\nNot enough data points to estimate Curie temperature."
        )?,
        CurieAnalysis::Estimated(est) => {
            writeln!(out, "\nEstimated Curie Temperature: {}°C", est.estimated_c)?;
            writeln!(
                out,
                "Expected Curie Temperature for {}: {:.2}°C",
                spec.name, est.expected_c
            )?;
            writeln!(out, "Difference: {:.2}°C", est.difference_c)?;
        }
    }
    Ok(())
}

/// Bar length for `epsilon` on a chart whose largest value spans `width` characters.
pub fn bar_length(epsilon: f64, max_epsilon: f64, width: usize) -> usize {
    if !max_epsilon.is_finite() || max_epsilon <= 0.0 || !epsilon.is_finite() {
        return 0;
    }
    (epsilon * width as f64 / max_epsilon).round().max(0.0) as usize
}

/// ASCII bar chart of ε against temperature.
pub fn write_chart<W: Write>(
    out: &mut W,
    points: &[DielectricPoint],
    width: usize,
) -> LabResult<()> {
    if points.is_empty() {
        writeln!(out, "\nNo data to display graph.")?;
        return Ok(());
    }

    writeln!(out, "\nASCII Graph: Dielectric Constant vs Temperature")?;
    writeln!(out, "-----------------------------------------------")?;

    let max_eps = max_epsilon(points);
    for p in points {
        let bars = "#".repeat(bar_length(p.epsilon, max_eps, width));
        writeln!(out, "{:>4}°C | {bars} ({:.2})", p.temperature_c, p.epsilon)?;
    }
    Ok(())
}

/// Body of the exported results file.
pub fn write_report<W: Write>(
    out: &mut W,
    spec: &MaterialSpec,
    c0_pf: f64,
    points: &[DielectricPoint],
) -> LabResult<()> {
    writeln!(out, "Dielectric Constant Measurement Results")?;
    write_header(out, spec, c0_pf)?;
    writeln!(out)?;
    write_table(out, points)
}

/// Write the results file into `dir`, overwriting any previous one.
///
/// A failure to create the file is `LabError::Io`. A failure after creation
/// is `LabError::ReportWrite` and leaves no partial file behind.
pub fn export_report(
    dir: &Path,
    suffix: &str,
    spec: &MaterialSpec,
    c0_pf: f64,
    points: &[DielectricPoint],
) -> LabResult<PathBuf> {
    let path = dir.join(report_file_name(&spec.name, suffix));
    let file = File::create(&path)?;
    fill_report(&path, BufWriter::new(file), spec, c0_pf, points)?;
    Ok(path)
}

fn fill_report<W: Write>(
    path: &Path,
    mut out: W,
    spec: &MaterialSpec,
    c0_pf: f64,
    points: &[DielectricPoint],
) -> LabResult<()> {
    let written = write_report(&mut out, spec, c0_pf, points)
        .and_then(|()| out.flush().map_err(LabError::from));
    drop(out);
    written.map_err(|err| {
        let _ = fs::remove_file(path);
        LabError::ReportWrite {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curie::CurieEstimate;
    use dielectric_types::constants::{CHART_WIDTH, REPORT_SUFFIX};
    use dielectric_types::state::MaterialRegistry;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn barium_titanate() -> MaterialSpec {
        MaterialRegistry::builtin()
            .get("Barium Titanate")
            .cloned()
            .unwrap()
    }

    fn points() -> Vec<DielectricPoint> {
        [(25, 1.0, 1000.0), (100, 3.0, 3000.0), (150, 2.0, 2000.0)]
            .iter()
            .map(|&(t, c, e)| DielectricPoint {
                temperature_c: t,
                capacitance_pf: c,
                epsilon: e,
            })
            .collect()
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> LabResult<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn scratch_dir() -> PathBuf {
        let epoch_ns = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "dielectric_lab_report_{}_{}",
            std::process::id(),
            epoch_ns
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_report_file_name() {
        assert_eq!(
            report_file_name("Barium Titanate", REPORT_SUFFIX),
            "Barium_Titanate_results.txt"
        );
        assert_eq!(report_file_name("Quartz", REPORT_SUFFIX), "Quartz_results.txt");
    }

    #[test]
    fn test_table_two_decimals() {
        let text = render(|out| write_table(out, &points()));
        assert!(text.starts_with("Temp (°C)\tCapacitance (pF)\tDielectric Constant (ε)\n"));
        assert!(text.contains("25\t\t1.00\t\t1000.00\n"));
        assert!(text.contains("100\t\t3.00\t\t3000.00\n"));
    }

    #[test]
    fn test_header_dimensions() {
        let spec = MaterialSpec::linear("Quartz", 49.0, 1.42);
        let text = render(|out| write_header(out, &spec, 0.3059));
        assert!(text.contains("Sample dimensions: 7.00 mm × 7.00 mm × 1.42 mm"));
        assert!(text.contains("Vacuum capacitance (C0): 0.3059 pF"));
    }

    #[test]
    fn test_bar_length_scaling() {
        assert_eq!(bar_length(3.0, 3.0, CHART_WIDTH), 50);
        assert_eq!(bar_length(1.0, 3.0, CHART_WIDTH), 17);
        assert_eq!(bar_length(2.0, 3.0, CHART_WIDTH), 33);
        assert_eq!(bar_length(1.0, 0.0, CHART_WIDTH), 0);
        assert_eq!(bar_length(0.0, 0.0, CHART_WIDTH), 0);
    }

    #[test]
    fn test_chart_rows() {
        let text = render(|out| write_chart(out, &points(), CHART_WIDTH));
        let full = format!(" 100°C | {} (3000.00)", "#".repeat(50));
        assert!(text.contains(&full), "chart was:\n{text}");
        assert!(text.contains(&format!("  25°C | {} (1000.00)", "#".repeat(17))));
    }

    #[test]
    fn test_chart_empty_and_zero_max() {
        let text = render(|out| write_chart(out, &[], CHART_WIDTH));
        assert!(text.contains("No data to display graph."));

        let flat = [DielectricPoint {
            temperature_c: 20,
            capacitance_pf: 0.0,
            epsilon: 0.0,
        }];
        let text = render(|out| write_chart(out, &flat, CHART_WIDTH));
        assert!(text.contains("  20°C |  (0.00)"));
    }

    #[test]
    fn test_curie_messages() {
        let spec = barium_titanate();
        let est = CurieAnalysis::Estimated(CurieEstimate {
            estimated_c: 100,
            expected_c: 120.0,
            difference_c: 20.0,
            peak_epsilon: 3.0,
        });
        let text = render(|out| write_curie(out, &spec, &est));
        assert!(text.contains("Estimated Curie Temperature: 100°C"));
        assert!(text.contains("Expected Curie Temperature for Barium Titanate: 120.00°C"));
        assert!(text.contains("Difference: 20.00°C"));

        let text = render(|out| write_curie(out, &spec, &CurieAnalysis::NotFerroelectric));
        assert!(text.contains("non-ferroelectric"));
        let text = render(|out| write_curie(out, &spec, &CurieAnalysis::InsufficientData));
        assert!(text.contains("Not enough data points"));
    }

    #[test]
    fn test_export_report_writes_table() {
        let dir = scratch_dir();
        let spec = barium_titanate();
        let path = export_report(&dir, REPORT_SUFFIX, &spec, 0.2992, &points()).unwrap();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("Barium_Titanate_results.txt")
        );

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Dielectric Constant Measurement Results\n"));
        assert!(text.contains("Material: Barium Titanate"));
        assert!(text.contains("150\t\t2.00\t\t2000.00"));

        // Second export overwrites.
        export_report(&dir, REPORT_SUFFIX, &spec, 0.2992, &points()[..1]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(!text.contains("150\t\t"));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_export_report_missing_dir_fails() {
        let dir = scratch_dir().join("does_not_exist");
        let result = export_report(&dir, REPORT_SUFFIX, &barium_titanate(), 0.2992, &points());
        assert!(matches!(result, Err(LabError::Io(_))));
    }

    /// Accepts `budget` bytes, then fails every write.
    struct ShortDevice {
        budget: usize,
    }

    impl Write for ShortDevice {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.budget == 0 {
                return Err(std::io::Error::new(std::io::ErrorKind::Other, "no space left"));
            }
            let n = buf.len().min(self.budget);
            self.budget -= n;
            Ok(n)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_write_removes_partial_report() {
        let dir = scratch_dir();
        let path = dir.join(report_file_name("Quartz", REPORT_SUFFIX));
        std::fs::write(&path, "Dielectric Constant").unwrap();

        let spec = MaterialSpec::linear("Quartz", 48.0, 1.42);
        let result = fill_report(&path, ShortDevice { budget: 20 }, &spec, 0.2992, &points());
        match result {
            Err(LabError::ReportWrite { path: reported, message }) => {
                assert_eq!(reported, path.display().to_string());
                assert!(message.contains("no space left"), "message was {message}");
            }
            other => panic!("expected ReportWrite, got {other:?}"),
        }
        assert!(!path.exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
