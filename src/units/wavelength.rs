use crate::constants::{ANGSTROM_M, METER_IN_ANGSTROM};

/// 파장 [Å] → 허브(파장 [m]).
pub fn to_wavelength_m(value_angstrom: f64) -> f64 {
    value_angstrom * ANGSTROM_M
}

/// 허브(파장 [m]) → 파장 [Å].
pub fn from_wavelength_m(wavelength_m: f64) -> f64 {
    wavelength_m * METER_IN_ANGSTROM
}
