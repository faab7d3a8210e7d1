//! 물리량별 허브 변환 모듈 모음.
//!
//! 모든 물리량은 파장 [m]을 공통 기준(허브)으로 삼는다. 각 모듈은
//! `to_wavelength_m`/`from_wavelength_m` 한 쌍만 제공하고, 두 물리량 사이의
//! 변환은 항상 허브를 거친다.

pub mod energy;
pub mod temperature;
pub mod velocity;
pub mod wavelength;
pub mod wavenumber;

use crate::quantity::QuantityKind;

/// 입력값을 허브(파장 [m])로 환산한다.
///
/// 0이나 음수처럼 물리적으로 의미 없는 입력은 오류 없이 NaN/±Infinity를 반환한다.
pub fn to_wavelength_m(value: f64, kind: QuantityKind) -> f64 {
    match kind {
        QuantityKind::Wavelength => wavelength::to_wavelength_m(value),
        QuantityKind::Energy => energy::to_wavelength_m(value),
        QuantityKind::Temperature => temperature::to_wavelength_m(value),
        QuantityKind::Velocity => velocity::to_wavelength_m(value),
        QuantityKind::Wavenumber => wavenumber::to_wavelength_m(value),
    }
}

/// 허브(파장 [m])에서 요청한 물리량을 공개 단위로 계산한다.
pub fn from_wavelength_m(wavelength_m: f64, kind: QuantityKind) -> f64 {
    match kind {
        QuantityKind::Wavelength => wavelength::from_wavelength_m(wavelength_m),
        QuantityKind::Energy => energy::from_wavelength_m(wavelength_m),
        QuantityKind::Temperature => temperature::from_wavelength_m(wavelength_m),
        QuantityKind::Velocity => velocity::from_wavelength_m(wavelength_m),
        QuantityKind::Wavenumber => wavenumber::from_wavelength_m(wavelength_m),
    }
}
