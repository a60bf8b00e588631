//! The periodic table of elements.
//!
//! Loaded from an isotope data file in the NIST "Atomic Weights and Isotopic
//! Compositions" text layout: `Key = Value` lines, one blank-line separated
//! record per isotope, `#` comment lines.
//!
//! ```text
//! Atomic Number = 6
//! Atomic Symbol = C
//! Mass Number = 13
//! Relative Atomic Mass = 13.00335483507(23)
//! Isotopic Composition = 0.0107(8)
//! Standard Atomic Weight = [12.0096,12.0116]
//! ```
//!
//! Lookups are linear; the table is a few hundred entries.

use std::collections::HashMap;
use std::path::Path;

use crate::element::Element;
use crate::error::{ChemError, Result};

const ATOMIC_NUMBER: &str = "Atomic Number";
const ATOMIC_SYMBOL: &str = "Atomic Symbol";
const MASS_NUMBER: &str = "Mass Number";
const ATOMIC_MASS: &str = "Relative Atomic Mass";
const ISOTOPE_COMP: &str = "Isotopic Composition";
const ATOMIC_WEIGHT: &str = "Standard Atomic Weight";

/// Immutable isotope table.
#[derive(Debug, Clone, Default)]
pub struct PeriodicTable {
    isotopes: Vec<Element>,
}

impl PeriodicTable {
    /// Read and parse an isotope data file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ChemError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::parse(&text)?;
        tracing::debug!(path = %path.display(), isotopes = table.len(), "loaded periodic table");
        Ok(table)
    }

    /// Parse isotope data from text.
    pub fn parse(text: &str) -> Result<Self> {
        let mut isotopes = Vec::new();
        let mut record: HashMap<&str, &str> = HashMap::new();
        let mut last_line = 0;

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            if line.starts_with('#') {
                continue;
            }
            if line.trim().is_empty() {
                if !record.is_empty() {
                    isotopes.push(build_element(&record, line_no)?);
                    record.clear();
                }
                continue;
            }
            let (key, value) = line.split_once('=').ok_or_else(|| ChemError::Parse {
                line: line_no,
                detail: format!("expected 'key = value', got '{line}'"),
            })?;
            record.insert(key.trim(), value.trim());
            last_line = line_no;
        }
        if !record.is_empty() {
            isotopes.push(build_element(&record, last_line)?);
        }

        Ok(Self { isotopes })
    }

    /// Number of isotopes.
    pub fn len(&self) -> usize {
        self.isotopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.isotopes.is_empty()
    }

    /// All isotopes in file order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.isotopes.iter()
    }

    /// Look up by element or isotope symbol. An element symbol yields its
    /// most abundant isotope.
    pub fn get(&self, symbol: &str) -> Result<&Element> {
        most_abundant(self.isotopes.iter().filter(|e| e.matches_symbol(symbol)))
            .ok_or_else(|| ChemError::UnknownElement(symbol.to_string()))
    }

    /// Most abundant isotope of the element with atomic number `number`.
    pub fn get_by_number(&self, number: u32) -> Result<&Element> {
        most_abundant(self.isotopes.iter().filter(|e| e.atomic_number == number))
            .ok_or(ChemError::UnknownAtomicNumber(number))
    }

    pub fn is_valid_symbol(&self, symbol: &str) -> bool {
        self.isotopes.iter().any(|e| e.matches_symbol(symbol))
    }

    pub fn atomic_symbol(&self, symbol: &str) -> Result<&str> {
        self.get(symbol).map(|e| e.atomic_symbol.as_str())
    }

    pub fn atomic_number(&self, symbol: &str) -> Result<u32> {
        self.get(symbol).map(|e| e.atomic_number)
    }

    pub fn mass_number(&self, symbol: &str) -> Result<u32> {
        self.get(symbol).map(|e| e.mass_number)
    }

    pub fn atomic_mass(&self, symbol: &str) -> Result<f64> {
        self.get(symbol).map(|e| e.atomic_mass)
    }

    pub fn atomic_weight(&self, symbol: &str) -> Result<f64> {
        self.get(symbol).map(|e| e.atomic_weight)
    }

    pub fn isotope_composition(&self, symbol: &str) -> Result<f64> {
        self.get(symbol).map(|e| e.isotope_comp)
    }

    /// Isotope symbols in file order.
    pub fn list_isotopes(&self) -> Vec<&str> {
        self.isotopes.iter().map(|e| e.isotope_symbol.as_str()).collect()
    }

    /// Distinct element symbols in order of first appearance.
    pub fn list_elements(&self) -> Vec<&str> {
        let mut elements: Vec<&str> = Vec::new();
        for e in &self.isotopes {
            if !elements.contains(&e.atomic_symbol.as_str()) {
                elements.push(&e.atomic_symbol);
            }
        }
        elements
    }
}

/// First entry with the strictly highest abundance.
fn most_abundant<'a>(candidates: impl Iterator<Item = &'a Element>) -> Option<&'a Element> {
    candidates.fold(None::<&'a Element>, |best, e| match best {
        Some(b) if e.isotope_comp <= b.isotope_comp => Some(b),
        _ => Some(e),
    })
}

fn build_element(record: &HashMap<&str, &str>, line: usize) -> Result<Element> {
    let field = |name: &'static str| {
        record
            .get(name)
            .copied()
            .ok_or(ChemError::MissingField { line, field: name })
    };
    let integer = |name: &'static str| -> Result<u32> {
        let value = field(name)?;
        value.parse().map_err(|_| ChemError::Parse {
            line,
            detail: format!("{name} '{value}' is not an integer"),
        })
    };

    let atomic_number = integer(ATOMIC_NUMBER)?;
    let mass_number = integer(MASS_NUMBER)?;
    let atomic_symbol = field(ATOMIC_SYMBOL)?.to_string();
    let isotope_symbol = match atomic_symbol.as_str() {
        "D" | "T" => atomic_symbol.clone(),
        _ => format!("{mass_number}{atomic_symbol}"),
    };

    let mass_text = field(ATOMIC_MASS)?;
    let atomic_mass = leading_number(mass_text).ok_or_else(|| ChemError::Parse {
        line,
        detail: format!("{ATOMIC_MASS} '{mass_text}' is not a number"),
    })?;
    let atomic_weight = standard_weight(field(ATOMIC_WEIGHT)?);
    let isotope_comp = leading_number(field(ISOTOPE_COMP)?).unwrap_or(0.0);

    Ok(Element {
        atomic_number,
        atomic_symbol,
        isotope_symbol,
        mass_number,
        atomic_mass,
        atomic_weight,
        isotope_comp,
    })
}

/// Number in front of an uncertainty in parentheses: `12.0000(0)` → 12.
/// A trailing `#` marks an estimated value and is ignored.
fn leading_number(text: &str) -> Option<f64> {
    let number = text.split('(').next().unwrap_or("").trim().trim_end_matches('#');
    number.parse().ok()
}

/// `x(u)` → x, `[a,b]` → midpoint, `[n]` → n, anything else → 0.
fn standard_weight(text: &str) -> f64 {
    let text = text.trim();
    if let Some(inner) = text.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
        return match inner.split_once(',') {
            Some((a, b)) => match (leading_number(a), leading_number(b)) {
                (Some(a), Some(b)) => (a + b) / 2.0,
                _ => 0.0,
            },
            None => leading_number(inner).unwrap_or(0.0),
        };
    }
    leading_number(text).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# Atomic Weights and Isotopic Compositions
Atomic Number = 1
Atomic Symbol = H
Mass Number = 1
Relative Atomic Mass = 1.00782503223(9)
Isotopic Composition = 0.999885(70)
Standard Atomic Weight = [1.00784,1.00811]
Notes = m

Atomic Number = 1
Atomic Symbol = D
Mass Number = 2
Relative Atomic Mass = 2.01410177812(12)
Isotopic Composition = 0.000115(70)
Standard Atomic Weight = [1.00784,1.00811]
Notes = m

Atomic Number = 6
Atomic Symbol = C
Mass Number = 12
Relative Atomic Mass = 12.0000000(00)
Isotopic Composition = 0.9893(8)
Standard Atomic Weight = [12.0096,12.0116]
Notes =

Atomic Number = 6
Atomic Symbol = C
Mass Number = 13
Relative Atomic Mass = 13.00335483507(23)
Isotopic Composition = 0.0107(8)
Standard Atomic Weight = [12.0096,12.0116]
Notes =

Atomic Number = 9
Atomic Symbol = F
Mass Number = 19
Relative Atomic Mass = 18.99840316273(92)
Isotopic Composition = 1
Standard Atomic Weight = 18.998403163(6)
Notes =

Atomic Number = 43
Atomic Symbol = Tc
Mass Number = 98
Relative Atomic Mass = 97.9072124(36)
Isotopic Composition =
Standard Atomic Weight = [98]
Notes = ";

    fn table() -> PeriodicTable {
        PeriodicTable::parse(SAMPLE).unwrap()
    }

    #[test]
    fn parses_every_record_including_last() {
        let t = table();
        assert_eq!(t.len(), 6);
        assert_eq!(t.list_isotopes(), vec!["1H", "D", "12C", "13C", "19F", "98Tc"]);
        assert_eq!(t.list_elements(), vec!["H", "D", "C", "F", "Tc"]);
    }

    #[test]
    fn value_forms() {
        let t = table();
        let h = t.get("1H").unwrap();
        assert_eq!(h.atomic_mass, 1.00782503223);
        assert!((h.atomic_weight - (1.00784 + 1.00811) / 2.0).abs() < 1e-12);
        assert_eq!(h.isotope_comp, 0.999885);

        assert_eq!(t.atomic_weight("F").unwrap(), 18.998403163);
        assert_eq!(t.isotope_composition("F").unwrap(), 1.0);

        let tc = t.get("Tc").unwrap();
        assert_eq!(tc.atomic_weight, 98.0);
        assert_eq!(tc.isotope_comp, 0.0);
    }

    #[test]
    fn element_symbol_gives_most_abundant_isotope() {
        let t = table();
        assert_eq!(t.get("C").unwrap().isotope_symbol, "12C");
        assert_eq!(t.mass_number("C").unwrap(), 12);
        assert_eq!(t.get("13C").unwrap().mass_number, 13);
        assert_eq!(t.get_by_number(6).unwrap().isotope_symbol, "12C");
        assert_eq!(t.get_by_number(1).unwrap().isotope_symbol, "1H");
    }

    #[test]
    fn deuterium_keeps_its_symbol() {
        let t = table();
        let d = t.get("D").unwrap();
        assert_eq!(d.atomic_number, 1);
        assert_eq!(d.isotope_symbol, "D");
        assert_eq!(d.to_string(), "D");
    }

    #[test]
    fn unknown_lookups() {
        let t = table();
        assert!(!t.is_valid_symbol("Xx"));
        assert!(t.is_valid_symbol("13C"));
        assert!(matches!(t.get("Xx"), Err(ChemError::UnknownElement(s)) if s == "Xx"));
        assert!(matches!(t.get_by_number(200), Err(ChemError::UnknownAtomicNumber(200))));
    }

    #[test]
    fn missing_field_is_reported() {
        let err = PeriodicTable::parse("Atomic Number = 1\nAtomic Symbol = H\n").unwrap_err();
        assert!(matches!(err, ChemError::MissingField { field: MASS_NUMBER, .. }));
    }

    #[test]
    fn malformed_line_is_reported() {
        let err = PeriodicTable::parse("# header\nAtomic Number 1\n").unwrap_err();
        assert!(matches!(err, ChemError::Parse { line: 2, .. }));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("elements.txt");
        std::fs::write(&path, SAMPLE).unwrap();
        let t = PeriodicTable::load(&path).unwrap();
        assert_eq!(t.atomic_number("Tc").unwrap(), 43);

        let missing = PeriodicTable::load(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(missing, ChemError::Io { .. }));
    }
}
