//! 계산에 사용하는 물리 상수 (CODATA 2018 정확값/권장값).

/// 플랑크 상수 [J·s]
pub const PLANCK_J_S: f64 = 6.62607015e-34;

/// 중성자 질량 [kg]
pub const NEUTRON_MASS_KG: f64 = 1.67492749804e-27;

/// 볼츠만 상수 [J/K]
pub const BOLTZMANN_J_PER_K: f64 = 1.380649e-23;

/// 1 eV에 해당하는 에너지 [J]
pub const EV_TO_J: f64 = 1.602176634e-19;

/// 1 Å [m]
pub const ANGSTROM_M: f64 = 1e-10;

/// 1 m [Å]
pub const METER_IN_ANGSTROM: f64 = 1e10;
