//! Numeric value with a unit.

use std::fmt;

/// A physical quantity, e.g. a constant with its SI unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub value: f64,
    /// Unit text as given in the data file; empty for dimensionless values.
    pub unit: String,
}

impl Quantity {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

/// Printed as `%.9e unit`, with a signed exponent of at least two digits.
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", scientific(self.value), self.unit)
    }
}

/// `{:.9e}` with the C exponent form: `6.022140857e23` becomes
/// `6.022140857e+23`, `7.748091731e-5` becomes `7.748091731e-05`.
pub(crate) fn scientific(value: f64) -> String {
    let text = format!("{value:.9e}");
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}
