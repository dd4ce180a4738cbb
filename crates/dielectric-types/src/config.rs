// ─────────────────────────────────────────────────────────────────────
// Dielectric Lab — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{CHART_WIDTH, MIN_CURIE_POINTS, REPORT_SUFFIX};
use crate::error::{LabError, LabResult};
use crate::state::{MaterialRegistry, MaterialSpec};

/// Simulator settings. The console binary always runs with `LabConfig::default()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabConfig {
    /// Full-scale bar length of the ASCII chart (default: 50)
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
    /// Directory that receives exported reports (default: ".")
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Suffix appended to the material file stem (default: "_results.txt")
    #[serde(default = "default_report_suffix")]
    pub report_suffix: String,
    /// Minimum number of readings before a Curie estimate is attempted (default: 2)
    #[serde(default = "default_min_curie_points")]
    pub min_curie_points: usize,
    /// Selectable materials in display order (default: built-in lab kit)
    #[serde(default = "default_materials")]
    pub materials: Vec<MaterialSpec>,
}

fn default_chart_width() -> usize {
    CHART_WIDTH
}
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_report_suffix() -> String {
    REPORT_SUFFIX.to_string()
}
fn default_min_curie_points() -> usize {
    MIN_CURIE_POINTS
}
fn default_materials() -> Vec<MaterialSpec> {
    MaterialRegistry::builtin().specs().to_vec()
}

impl Default for LabConfig {
    fn default() -> Self {
        LabConfig {
            chart_width: default_chart_width(),
            output_dir: default_output_dir(),
            report_suffix: default_report_suffix(),
            min_curie_points: default_min_curie_points(),
            materials: default_materials(),
        }
    }
}

impl LabConfig {
    pub fn from_json_str(json: &str) -> LabResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &str) -> LabResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> LabResult<()> {
        if self.chart_width == 0 {
            return Err(LabError::Config("chart_width must be >= 1".to_string()));
        }
        if self.min_curie_points == 0 {
            return Err(LabError::Config("min_curie_points must be >= 1".to_string()));
        }
        if self.report_suffix.contains(['/', '\\']) {
            return Err(LabError::Config(format!(
                "report_suffix must not contain path separators, got '{}'",
                self.report_suffix
            )));
        }
        MaterialRegistry::from_specs(self.materials.clone()).map(|_| ())
    }

    /// Immutable registry built from the configured materials.
    pub fn registry(&self) -> LabResult<MaterialRegistry> {
        MaterialRegistry::from_specs(self.materials.clone())
    }
}
