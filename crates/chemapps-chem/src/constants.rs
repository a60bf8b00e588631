//! Fundamental physical constants.
//!
//! Loaded from a tab-separated CODATA listing: one constant per line as
//! `label<TAB>value<TAB>uncertainty<TAB>unit`, `#` comment lines. Values may
//! carry digit-group spaces (`6.022 140 857 e23`) and `...` after the
//! mantissa of exact decimals that were cut short.

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use crate::error::{ChemError, Result};
use crate::quantity::Quantity;

/// Width of the label column in [`ConstantsTable::write_list`].
const LABEL_WIDTH: usize = 55;

/// Physical constants keyed by their CODATA label.
#[derive(Debug, Clone, Default)]
pub struct ConstantsTable {
    constants: HashMap<String, Quantity>,
}

impl ConstantsTable {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ChemError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::parse(&text)?;
        tracing::debug!(path = %path.display(), constants = table.len(), "loaded physical constants");
        Ok(table)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut constants = HashMap::new();
        for (idx, line) in text.lines().enumerate() {
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }
            let line_no = idx + 1;
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < 4 {
                return Err(ChemError::Parse {
                    line: line_no,
                    detail: format!("expected 4 tab-separated fields, got {}", fields.len()),
                });
            }
            let label = fields[0].trim();
            let value = parse_value(fields[1]).ok_or_else(|| ChemError::Parse {
                line: line_no,
                detail: format!("value '{}' of '{label}' is not a number", fields[1].trim()),
            })?;
            let unit = fields[3].trim();
            if constants
                .insert(label.to_string(), Quantity::new(value, unit))
                .is_some()
            {
                tracing::warn!(label, line = line_no, "duplicate constant, keeping the later value");
            }
        }
        Ok(Self { constants })
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    /// Numeric value of the constant labelled `label`.
    pub fn get(&self, label: &str) -> Result<f64> {
        self.get_with_unit(label).map(|q| q.value)
    }

    /// Value and unit of the constant labelled `label`.
    pub fn get_with_unit(&self, label: &str) -> Result<&Quantity> {
        self.constants
            .get(label)
            .ok_or_else(|| ChemError::UnknownConstant(label.to_string()))
    }

    /// Write every constant, sorted by label, as `label = value unit`.
    pub fn write_list<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let mut labels: Vec<&String> = self.constants.keys().collect();
        labels.sort();
        for label in labels {
            writeln!(out, "{label:<width$} = {}", self.constants[label], width = LABEL_WIDTH)?;
        }
        Ok(())
    }
}

fn parse_value(text: &str) -> Option<f64> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    compact.replace("...", "").parse().ok()
}

/// The constants most chemistry code needs, resolved once from a table.
///
/// Values are in SI units except `bohr_radius`, which is in ångström.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonConstants {
    pub atomic_mass: f64,
    pub avogadro: f64,
    pub bohr_radius: f64,
    pub boltzmann: f64,
    pub conductance_quantum: f64,
    pub electric_constant: f64,
    pub electron_mass: f64,
    pub electron_volt: f64,
    pub elementary_charge: f64,
    pub faraday: f64,
    pub fine_structure: f64,
    pub molar_gas: f64,
    pub hartree: f64,
    pub speed_of_light: f64,
    pub magnetic_constant: f64,
    pub magnetic_flux_quantum: f64,
    pub proton_electron_mass_ratio: f64,
    pub newtonian_gravitation: f64,
    pub planck: f64,
    pub planck_bar: f64,
    pub proton_mass: f64,
    pub rydberg: f64,
    pub standard_atmosphere: f64,
    pub stefan_boltzmann: f64,
}

impl CommonConstants {
    pub fn from_table(table: &ConstantsTable) -> Result<Self> {
        Ok(Self {
            atomic_mass: table.get("atomic mass constant")?,
            avogadro: table.get("Avogadro constant")?,
            bohr_radius: table.get("Bohr radius")? * 1.0e10,
            boltzmann: table.get("Boltzmann constant")?,
            conductance_quantum: table.get("conductance quantum")?,
            electric_constant: table.get("electric constant")?,
            electron_mass: table.get("electron mass")?,
            electron_volt: table.get("electron volt")?,
            elementary_charge: table.get("elementary charge")?,
            faraday: table.get("Faraday constant")?,
            fine_structure: table.get("fine-structure constant")?,
            molar_gas: table.get("molar gas constant")?,
            hartree: table.get("Hartree energy")?,
            speed_of_light: table.get("speed of light in vacuum")?,
            magnetic_constant: table.get("mag. constant")?,
            magnetic_flux_quantum: table.get("mag. flux quantum")?,
            proton_electron_mass_ratio: table.get("proton-electron mass ratio")?,
            newtonian_gravitation: table.get("Newtonian constant of gravitation")?,
            planck: table.get("Planck constant")?,
            planck_bar: table.get("Planck constant over 2 pi")?,
            proton_mass: table.get("proton mass")?,
            rydberg: table.get("Rydberg constant")?,
            standard_atmosphere: table.get("standard atmosphere")?,
            stefan_boltzmann: table.get("Stefan-Boltzmann constant")?,
        })
    }
}
