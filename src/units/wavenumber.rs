use std::f64::consts::PI;

use crate::constants::{ANGSTROM_M, METER_IN_ANGSTROM};

/// 파수 [1/Å] → 파장 [m] (λ = 2π/k).
pub fn to_wavelength_m(wavenumber_per_angstrom: f64) -> f64 {
    (2.0 * PI / wavenumber_per_angstrom) * ANGSTROM_M
}

/// 파장 [m] → 파수 [1/Å].
pub fn from_wavelength_m(wavelength_m: f64) -> f64 {
    2.0 * PI / (wavelength_m * METER_IN_ANGSTROM)
}
