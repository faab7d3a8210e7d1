use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::quantity::QuantityKind;
use crate::sampling::{AxisScale, AxisSpec};

/// 기본 설정 파일 경로(작업 디렉터리 기준).
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/ko/en ...)
    pub language: String,
    /// 사용자 언어팩 디렉터리
    pub language_pack_dir: Option<String>,
    /// 결과 표시 소수 자릿수
    pub decimals: usize,
    /// 단일 계산기의 기본 입력 물리량
    pub input_kind: QuantityKind,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            decimals: 4,
            input_kind: QuantityKind::Wavelength,
            x_axis: AxisSpec::new(QuantityKind::Wavelength, 0.1, 20.0, AxisScale::Log),
            y_axis: AxisSpec::new(QuantityKind::Energy, 1e-4, 10.0, AxisScale::Log),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml이 있으면 로드하고, 없으면 기본 설정을 반환한다(파일은 만들지 않는다).
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_from(DEFAULT_CONFIG_PATH)
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본 설정.
pub fn load_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        debug!("설정 로드: {}", path.display());
        Ok(cfg)
    } else {
        debug!("설정 파일 없음, 기본값 사용: {}", path.display());
        Ok(Config::default())
    }
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(DEFAULT_CONFIG_PATH)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: Config = toml::from_str("language = \"ko\"\ndecimals = 6\n").unwrap();
        assert_eq!(cfg.language, "ko");
        assert_eq!(cfg.decimals, 6);
        assert_eq!(cfg.x_axis, Config::default().x_axis);
        assert_eq!(cfg.input_kind, QuantityKind::Wavelength);
    }

    #[test]
    fn axis_tables_use_lowercase_tokens() {
        let src = r#"
            input_kind = "velocity"

            [x_axis]
            kind = "temperature"
            min = 1.0
            max = 300.0
            scale = "linear"
        "#;
        let cfg: Config = toml::from_str(src).unwrap();
        assert_eq!(cfg.input_kind, QuantityKind::Velocity);
        assert_eq!(
            cfg.x_axis,
            AxisSpec::new(QuantityKind::Temperature, 1.0, 300.0, AxisScale::Linear)
        );
    }

    #[test]
    fn save_and_load_roundtrip() {
        let path = std::env::temp_dir().join(format!(
            "neutron_property_calculator_cfg_{}.toml",
            std::process::id()
        ));
        let mut cfg = Config::default();
        cfg.language = "en".into();
        cfg.y_axis.scale = AxisScale::Linear;
        cfg.save_to(&path).unwrap();
        let loaded = load_from(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let cfg = load_from("definitely/not/here/config.toml").unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn unknown_kind_is_parse_error() {
        let err = toml::from_str::<Config>("input_kind = \"momentum\"\n").unwrap_err();
        assert!(matches!(ConfigError::from(err), ConfigError::Serde(_)));
    }
}
