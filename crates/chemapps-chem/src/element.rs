//! A single isotope entry of the periodic table.

use std::fmt;

/// One isotope as read from the isotope data file.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub atomic_number: u32,
    /// Element symbol, e.g. `C`. Deuterium and tritium keep `D` and `T`.
    pub atomic_symbol: String,
    /// Isotope symbol, e.g. `13C`; `D` and `T` for the hydrogen isotopes.
    pub isotope_symbol: String,
    pub mass_number: u32,
    /// Relative atomic mass of the isotope.
    pub atomic_mass: f64,
    /// Standard atomic weight of the element. Interval values are replaced
    /// by their midpoint; 0 when the file gives none.
    pub atomic_weight: f64,
    /// Natural abundance as a mole fraction; 0 when not given.
    pub isotope_comp: f64,
}

impl Element {
    /// Whether `symbol` names this entry, either as element or as isotope.
    pub fn matches_symbol(&self, symbol: &str) -> bool {
        self.atomic_symbol == symbol || self.isotope_symbol == symbol
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.isotope_symbol)
    }
}
