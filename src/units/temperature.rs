use crate::constants::BOLTZMANN_J_PER_K;

use super::energy;

/// 온도 [K] → 파장 [m]. E = k_B·T 로 환산한 뒤 에너지 경로를 따른다.
pub fn to_wavelength_m(temperature_k: f64) -> f64 {
    energy::wavelength_m_from_joule(BOLTZMANN_J_PER_K * temperature_k)
}

/// 파장 [m] → 온도 [K] (T = E / k_B).
pub fn from_wavelength_m(wavelength_m: f64) -> f64 {
    energy::joule_from_wavelength_m(wavelength_m) / BOLTZMANN_J_PER_K
}
