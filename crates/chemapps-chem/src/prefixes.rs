//! SI metric prefixes.

pub const YOTTA: f64 = 1.0e24;
pub const ZETTA: f64 = 1.0e21;
pub const EXA: f64 = 1.0e18;
pub const PETA: f64 = 1.0e15;
pub const TERA: f64 = 1.0e12;
pub const GIGA: f64 = 1.0e9;
pub const MEGA: f64 = 1.0e6;
pub const KILO: f64 = 1.0e3;
pub const HECTO: f64 = 1.0e2;
pub const DECA: f64 = 1.0e1;
pub const ONE: f64 = 1.0;
pub const DECI: f64 = 1.0e-1;
pub const CENTI: f64 = 1.0e-2;
pub const MILLI: f64 = 1.0e-3;
pub const MICRO: f64 = 1.0e-6;
pub const NANO: f64 = 1.0e-9;
pub const PICO: f64 = 1.0e-12;
pub const FEMTO: f64 = 1.0e-15;
pub const ATTO: f64 = 1.0e-18;
pub const ZEPTO: f64 = 1.0e-21;
pub const YOCTO: f64 = 1.0e-24;
