// ─────────────────────────────────────────────────────────────────────
// Dielectric Lab — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::{ABSOLUTE_ZERO_C, MAX_CAPACITANCE_PF, NO_CURIE_POINT};
use crate::error::{LabError, LabResult};

/// Fixed physical parameters of a dielectric sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    pub name: String,
    /// Electrode area [mm²].
    pub area_mm2: f64,
    /// Plate separation [mm].
    pub thickness_mm: f64,
    /// Nominal Curie temperature [°C]; `NO_CURIE_POINT` for non-ferroelectrics.
    #[serde(rename = "curie_temp_C")]
    pub curie_temp_c: f64,
}

impl MaterialSpec {
    pub fn new(name: &str, area_mm2: f64, thickness_mm: f64, curie_temp_c: f64) -> Self {
        MaterialSpec {
            name: name.to_string(),
            area_mm2,
            thickness_mm,
            curie_temp_c,
        }
    }

    /// Non-ferroelectric material with no Curie point.
    pub fn linear(name: &str, area_mm2: f64, thickness_mm: f64) -> Self {
        Self::new(name, area_mm2, thickness_mm, NO_CURIE_POINT)
    }

    /// Only materials with a positive nominal Curie temperature get a Curie estimate.
    pub fn is_ferroelectric(&self) -> bool {
        self.curie_temp_c > 0.0
    }

    /// Edge length [mm] of the square electrode with this area.
    pub fn side_mm(&self) -> f64 {
        self.area_mm2.max(0.0).sqrt()
    }

    /// Reject geometries that cannot form a capacitor.
    pub fn validate(&self) -> LabResult<()> {
        if self.name.trim().is_empty() {
            return Err(LabError::Domain("material name must not be empty".to_string()));
        }
        if !self.area_mm2.is_finite() || self.area_mm2 <= 0.0 {
            return Err(LabError::Domain(format!(
                "{}: electrode area must be finite and > 0, got {} mm²",
                self.name, self.area_mm2
            )));
        }
        if !self.thickness_mm.is_finite() || self.thickness_mm <= 0.0 {
            return Err(LabError::Domain(format!(
                "{}: thickness must be finite and > 0, got {} mm",
                self.name, self.thickness_mm
            )));
        }
        Ok(())
    }
}

/// One (temperature, capacitance) measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub temperature_c: i32,
    pub capacitance_pf: f64,
}

impl Reading {
    /// Validated constructor: temperature ≥ −273 °C and 0 < capacitance ≤ 1e12 pF.
    pub fn new(temperature_c: i32, capacitance_pf: f64) -> LabResult<Self> {
        if temperature_c < ABSOLUTE_ZERO_C {
            return Err(LabError::InvalidInput(format!(
                "temperature {temperature_c}°C is below absolute zero"
            )));
        }
        if !capacitance_pf.is_finite() || capacitance_pf <= 0.0 {
            return Err(LabError::InvalidInput(format!(
                "capacitance must be positive, got {capacitance_pf} pF"
            )));
        }
        if capacitance_pf > MAX_CAPACITANCE_PF {
            return Err(LabError::InvalidInput(format!(
                "capacitance {capacitance_pf} pF exceeds {MAX_CAPACITANCE_PF:e} pF"
            )));
        }
        Ok(Reading {
            temperature_c,
            capacitance_pf,
        })
    }
}

/// Readings for one material during one simulation run.
/// Readings are kept sorted by temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    spec: MaterialSpec,
    readings: Vec<Reading>,
}

impl Sample {
    pub fn new(spec: MaterialSpec) -> Self {
        Sample {
            spec,
            readings: Vec::new(),
        }
    }

    pub fn with_readings(spec: MaterialSpec, readings: Vec<Reading>) -> Self {
        let mut sample = Sample { spec, readings };
        sort_readings(&mut sample.readings);
        sample
    }

    pub fn spec(&self) -> &MaterialSpec {
        &self.spec
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

/// Ascending by temperature, then by capacitance for equal temperatures.
pub fn sort_readings(readings: &mut [Reading]) {
    readings.sort_by(|a, b| {
        a.temperature_c
            .cmp(&b.temperature_c)
            .then(a.capacitance_pf.total_cmp(&b.capacitance_pf))
    });
}

/// Immutable table of selectable materials, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialRegistry {
    materials: Vec<MaterialSpec>,
}

impl MaterialRegistry {
    /// The three samples available in the lab kit, listed by name.
    pub fn builtin() -> Self {
        let area = 8.0 * 6.0;
        let thickness = 1.42;
        MaterialRegistry {
            materials: vec![
                MaterialSpec::new("Barium Titanate", area, thickness, 120.0),
                MaterialSpec::linear("Quartz", area, thickness),
                MaterialSpec::new("Titanium Dioxide", area, thickness, 50.0),
            ],
        }
    }

    /// Build from arbitrary specs, keeping their order.
    pub fn from_specs(materials: Vec<MaterialSpec>) -> LabResult<Self> {
        if materials.is_empty() {
            return Err(LabError::Config(
                "material registry must contain at least one material".to_string(),
            ));
        }
        for (i, spec) in materials.iter().enumerate() {
            spec.validate()?;
            if materials[..i].iter().any(|other| other.name == spec.name) {
                return Err(LabError::Config(format!(
                    "duplicate material name '{}'",
                    spec.name
                )));
            }
        }
        Ok(MaterialRegistry { materials })
    }

    pub fn get(&self, name: &str) -> Option<&MaterialSpec> {
        self.materials.iter().find(|spec| spec.name == name)
    }

    /// 1-based lookup matching the numbers shown in the selection menu.
    pub fn select(&self, choice: usize) -> Option<&MaterialSpec> {
        choice.checked_sub(1).and_then(|i| self.materials.get(i))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.materials.iter().map(|spec| spec.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialSpec> {
        self.materials.iter()
    }

    pub fn specs(&self) -> &[MaterialSpec] {
        &self.materials
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl Default for MaterialRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
