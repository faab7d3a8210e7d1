use std::path::Path;

use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(ConfigError),
    /// 물리량/스케일 해석 오류
    Conversion(ConversionError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "변환 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<ConversionError> for AppError {
    fn from(value: ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

/// 대화형 CLI의 메인 루프를 실행한다. 설정이 바뀌면 `config_path`에 저장한다.
pub fn run(
    config: &mut Config,
    tr: &mut Translator,
    config_path: &Path,
) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::AllProperties => ui_cli::handle_all_properties(tr, config)?,
            MenuChoice::Convert => ui_cli::handle_convert(tr, config)?,
            MenuChoice::Curve => ui_cli::handle_curve(tr, config)?,
            MenuChoice::Settings => {
                if ui_cli::handle_settings(tr, config)? {
                    config.save_to(config_path)?;
                    let lang = i18n::resolve_language(&config.language, None);
                    *tr = Translator::new_with_pack(&lang, config.language_pack_dir.as_deref());
                    println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
                }
            }
            MenuChoice::Exit => {
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
