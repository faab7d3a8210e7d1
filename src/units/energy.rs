use crate::constants::{EV_TO_J, NEUTRON_MASS_KG};

use super::velocity;

/// 운동 에너지 [J] → 파장 [m]. 음수 에너지는 sqrt에서 NaN이 된다.
pub(crate) fn wavelength_m_from_joule(energy_j: f64) -> f64 {
    let v = (2.0 * energy_j / NEUTRON_MASS_KG).sqrt();
    velocity::to_wavelength_m(v)
}

/// 파장 [m] → 운동 에너지 [J] (E = ½·m_n·v²).
pub(crate) fn joule_from_wavelength_m(wavelength_m: f64) -> f64 {
    let v = velocity::from_wavelength_m(wavelength_m);
    0.5 * NEUTRON_MASS_KG * v * v
}

/// 에너지 [eV] → 파장 [m].
pub fn to_wavelength_m(energy_ev: f64) -> f64 {
    wavelength_m_from_joule(energy_ev * EV_TO_J)
}

/// 파장 [m] → 에너지 [eV].
pub fn from_wavelength_m(wavelength_m: f64) -> f64 {
    joule_from_wavelength_m(wavelength_m) / EV_TO_J
}
