//! Chemistry reference data: the periodic table of isotopes and the CODATA
//! physical constants, both loaded from plain-text data files.

pub mod constants;
pub mod element;
pub mod error;
pub mod prefixes;
pub mod ptable;
pub mod quantity;

pub use constants::{CommonConstants, ConstantsTable};
pub use element::Element;
pub use error::{ChemError, Result};
pub use ptable::PeriodicTable;
pub use quantity::Quantity;
