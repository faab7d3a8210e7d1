use crate::constants::{NEUTRON_MASS_KG, PLANCK_J_S};

/// 드브로이 관계 λ = h / (m_n·v). 속도 [m/s] → 파장 [m].
pub fn to_wavelength_m(velocity_m_per_s: f64) -> f64 {
    PLANCK_J_S / (NEUTRON_MASS_KG * velocity_m_per_s)
}

/// 파장 [m] → 속도 [m/s]. 같은 관계식을 역으로 사용한다.
pub fn from_wavelength_m(wavelength_m: f64) -> f64 {
    PLANCK_J_S / (NEUTRON_MASS_KG * wavelength_m)
}
