use crate::quantity::{NeutronState, QuantityKind};
use crate::units;

/// 사용자 입력(문자열 토큰)을 해석할 때 발생 가능한 오류.
///
/// 변환 계산 자체는 오류를 내지 않는다. 정의되지 않는 결과는 NaN으로 표현한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// 알 수 없는 물리량 문자열
    UnknownQuantity(String),
    /// 알 수 없는 축 스케일 문자열
    UnknownScale(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownQuantity(q) => write!(
                f,
                "알 수 없는 물리량: {q} (wavelength/energy/temperature/velocity/wavenumber)"
            ),
            ConversionError::UnknownScale(s) => {
                write!(f, "알 수 없는 스케일: {s} (log/linear)")
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// 하나의 물리량으로부터 다섯 물리량을 모두 계산한다.
///
/// 입력을 허브(파장 [m])로 한 번 환산한 뒤 나머지를 모두 허브에서 유도한다.
/// 입력과 같은 종류의 필드는 입력값을 그대로 둔다.
///
/// 0, 음수 에너지/온도 등 물리적으로 정의되지 않는 입력이면 오류 대신
/// NaN 또는 ±Infinity가 해당 필드에 들어간다.
pub fn convert_all(value: f64, kind: QuantityKind) -> NeutronState {
    let wavelength_m = units::to_wavelength_m(value, kind);
    let field = |target: QuantityKind| {
        if target == kind {
            value
        } else {
            units::from_wavelength_m(wavelength_m, target)
        }
    };
    NeutronState {
        wavelength_angstrom: field(QuantityKind::Wavelength),
        energy_ev: field(QuantityKind::Energy),
        temperature_k: field(QuantityKind::Temperature),
        velocity_m_per_s: field(QuantityKind::Velocity),
        wavenumber_per_angstrom: field(QuantityKind::Wavenumber),
    }
}

/// 한 물리량의 값을 다른 한 물리량으로 변환한다.
///
/// `from == to`이면 값을 그대로 반환한다(NaN 포함). 그 외에는 허브를 거치며,
/// 허브 값이 NaN이면 바로 NaN을 반환한다. 물리적으로 정의되지 않는 입력은
/// NaN 또는 ±Infinity가 될 수 있다.
pub fn convert(value: f64, from: QuantityKind, to: QuantityKind) -> f64 {
    if from == to {
        return value;
    }
    let wavelength_m = units::to_wavelength_m(value, from);
    if wavelength_m.is_nan() {
        return f64::NAN;
    }
    units::from_wavelength_m(wavelength_m, to)
}
