use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::conversion::ConversionError;

/// 다루는 중성자 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityKind {
    Wavelength,
    Energy,
    Temperature,
    Velocity,
    Wavenumber,
}

impl QuantityKind {
    /// 화면/CLI 선택지 순서.
    pub const ALL: [QuantityKind; 5] = [
        QuantityKind::Wavelength,
        QuantityKind::Energy,
        QuantityKind::Temperature,
        QuantityKind::Velocity,
        QuantityKind::Wavenumber,
    ];

    /// 설정 파일과 CLI 인자에 쓰는 고정 토큰.
    pub fn token(self) -> &'static str {
        match self {
            QuantityKind::Wavelength => "wavelength",
            QuantityKind::Energy => "energy",
            QuantityKind::Temperature => "temperature",
            QuantityKind::Velocity => "velocity",
            QuantityKind::Wavenumber => "wavenumber",
        }
    }

    /// 단위를 포함한 표시 라벨. 번역하지 않는다.
    pub fn label(self) -> &'static str {
        match self {
            QuantityKind::Wavelength => "Wavelength (Å)",
            QuantityKind::Energy => "Energy (eV)",
            QuantityKind::Temperature => "Temperature (K)",
            QuantityKind::Velocity => "Velocity (m/s)",
            QuantityKind::Wavenumber => "Wavenumber (1/Å)",
        }
    }

    pub fn unit_symbol(self) -> &'static str {
        match self {
            QuantityKind::Wavelength => "Å",
            QuantityKind::Energy => "eV",
            QuantityKind::Temperature => "K",
            QuantityKind::Velocity => "m/s",
            QuantityKind::Wavenumber => "1/Å",
        }
    }
}

impl std::fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for QuantityKind {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wavelength" | "lambda" => Ok(QuantityKind::Wavelength),
            "energy" | "e" => Ok(QuantityKind::Energy),
            "temperature" | "t" => Ok(QuantityKind::Temperature),
            "velocity" | "v" => Ok(QuantityKind::Velocity),
            "wavenumber" | "k" => Ok(QuantityKind::Wavenumber),
            _ => Err(ConversionError::UnknownQuantity(s.to_string())),
        }
    }
}

/// 하나의 입력으로부터 계산한 다섯 물리량.
///
/// 모든 값은 공개 단위(Å, eV, K, m/s, 1/Å)로 저장된다. 물리적으로 정의되지
/// 않는 입력(0, 음수 에너지 등)이면 필드가 NaN 또는 ±Infinity일 수 있다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeutronState {
    pub wavelength_angstrom: f64,
    pub energy_ev: f64,
    pub temperature_k: f64,
    pub velocity_m_per_s: f64,
    pub wavenumber_per_angstrom: f64,
}

impl NeutronState {
    pub fn get(&self, kind: QuantityKind) -> f64 {
        match kind {
            QuantityKind::Wavelength => self.wavelength_angstrom,
            QuantityKind::Energy => self.energy_ev,
            QuantityKind::Temperature => self.temperature_k,
            QuantityKind::Velocity => self.velocity_m_per_s,
            QuantityKind::Wavenumber => self.wavenumber_per_angstrom,
        }
    }
}
