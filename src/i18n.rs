use log::warn;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const NOTE_UNDEFINED: &str = "general.note_undefined";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_ALL: &str = "main_menu.all";
    pub const MAIN_MENU_CONVERT: &str = "main_menu.convert";
    pub const MAIN_MENU_CURVE: &str = "main_menu.curve";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const KIND_OPTIONS: &str = "kind.options";
    pub const PROMPT_KIND: &str = "prompt.kind";
    pub const PROMPT_FROM_KIND: &str = "prompt.from_kind";
    pub const PROMPT_TO_KIND: &str = "prompt.to_kind";
    pub const PROMPT_VALUE: &str = "prompt.value";

    pub const ALL_HEADING: &str = "all.heading";
    pub const ALL_RESULT: &str = "all.result";
    pub const CONVERT_HEADING: &str = "convert.heading";
    pub const CONVERT_RESULT: &str = "convert.result";

    pub const CURVE_HEADING: &str = "curve.heading";
    pub const CURVE_X_AXIS: &str = "curve.x_axis";
    pub const CURVE_Y_AXIS: &str = "curve.y_axis";
    pub const PROMPT_MIN: &str = "prompt.min";
    pub const PROMPT_MAX: &str = "prompt.max";
    pub const PROMPT_SCALE: &str = "prompt.scale";
    pub const CURVE_EMPTY: &str = "curve.empty";
    pub const CURVE_RANGE: &str = "curve.range";
    pub const CURVE_RANGE_AUTO: &str = "curve.range_auto";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_PROMPT_LANG: &str = "settings.prompt_lang";
    pub const SETTINGS_PROMPT_DECIMALS: &str = "settings.prompt_decimals";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 지정 디렉터리 → locales/ → 내장 언어팩 순으로 찾는다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 순이며, 없으면 키를 그대로 돌려준다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        let built_in = match self.lang {
            Language::En => en(key),
            Language::Ko => ko(key).or_else(|| en(key)),
        };
        built_in.unwrap_or(key).to_string()
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LC_ALL", "LANG"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. `ko-kr`이 없으면 `ko.toml`도 시도한다.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(&path).ok()?;
        let map = parse_toml_to_map(&content);
        if map.is_none() {
            warn!("언어팩을 해석할 수 없음: {}", path.display());
        }
        map
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

/// 중첩 테이블은 `a.b.c` 형태의 평면 키로 펼친다.
fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match Language::from_code(lang) {
        Language::En => parse_toml_to_map(include_str!("../locales/en.toml")),
        Language::Ko => parse_toml_to_map(include_str!("../locales/ko.toml")),
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        NOTE_UNDEFINED => "참고: NaN/Infinity는 해당 입력에서 물리적으로 정의되지 않는 값입니다.",
        MAIN_MENU_TITLE => "\n=== Neutron Property Calculator ===",
        MAIN_MENU_ALL => "1) 물리량 일괄 계산",
        MAIN_MENU_CONVERT => "2) 단일 물리량 변환",
        MAIN_MENU_CURVE => "3) 곡선 데이터 (차트용 표)",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        KIND_OPTIONS => "1) 파장(Å)  2) 에너지(eV)  3) 온도(K)  4) 속도(m/s)  5) 파수(1/Å)",
        PROMPT_KIND => "입력 물리량 번호: ",
        PROMPT_FROM_KIND => "변환 전 물리량 번호: ",
        PROMPT_TO_KIND => "변환 후 물리량 번호: ",
        PROMPT_VALUE => "값 입력: ",
        ALL_HEADING => "\n-- 물리량 일괄 계산 --",
        ALL_RESULT => "계산 결과:",
        CONVERT_HEADING => "\n-- 단일 물리량 변환 --",
        CONVERT_RESULT => "변환 결과:",
        CURVE_HEADING => "\n-- 곡선 데이터 --",
        CURVE_X_AXIS => "[X축]",
        CURVE_Y_AXIS => "[Y축]",
        PROMPT_MIN => "최소값: ",
        PROMPT_MAX => "최대값: ",
        PROMPT_SCALE => "스케일 (1=log, 2=linear): ",
        CURVE_EMPTY => "X축 범위가 유효하지 않아 점이 없습니다. (log: 0 < min < max, linear: min < max)",
        CURVE_RANGE => "표시 범위:",
        CURVE_RANGE_AUTO => "자동",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 설정:",
        SETTINGS_PROMPT_LANG => "언어 (auto/ko/en, 엔터=유지): ",
        SETTINGS_PROMPT_DECIMALS => "소수 자릿수 (엔터=유지): ",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        NOTE_UNDEFINED => "Note: NaN/Infinity means the value is physically undefined for this input.",
        MAIN_MENU_TITLE => "\n=== Neutron Property Calculator ===",
        MAIN_MENU_ALL => "1) All properties",
        MAIN_MENU_CONVERT => "2) Convert one property",
        MAIN_MENU_CURVE => "3) Curve data (chart table)",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a valid number.",
        KIND_OPTIONS => {
            "1) Wavelength (Å)  2) Energy (eV)  3) Temperature (K)  4) Velocity (m/s)  5) Wavenumber (1/Å)"
        }
        PROMPT_KIND => "Input type number: ",
        PROMPT_FROM_KIND => "From property number: ",
        PROMPT_TO_KIND => "To property number: ",
        PROMPT_VALUE => "Value: ",
        ALL_HEADING => "\n-- All Properties --",
        ALL_RESULT => "Calculation Result:",
        CONVERT_HEADING => "\n-- Convert One Property --",
        CONVERT_RESULT => "Result:",
        CURVE_HEADING => "\n-- Curve Data --",
        CURVE_X_AXIS => "[X Axis]",
        CURVE_Y_AXIS => "[Y Axis]",
        PROMPT_MIN => "Min: ",
        PROMPT_MAX => "Max: ",
        PROMPT_SCALE => "Scale (1=log, 2=linear): ",
        CURVE_EMPTY => "X range is invalid, no points. (log: 0 < min < max, linear: min < max)",
        CURVE_RANGE => "Display range:",
        CURVE_RANGE_AUTO => "auto",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current settings:",
        SETTINGS_PROMPT_LANG => "Language (auto/ko/en, enter=keep): ",
        SETTINGS_PROMPT_DECIMALS => "Decimals (enter=keep): ",
        SETTINGS_SAVED => "Settings saved.",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language("ko-KR", Some("en")), "ko");
        assert_eq!(resolve_language("auto", Some("en-us")), "en");
    }

    #[test]
    fn locale_strings_are_normalized() {
        assert_eq!(normalize_locale_string("ko_KR.UTF-8").as_deref(), Some("ko"));
        assert_eq!(normalize_locale_string("en-GB").as_deref(), Some("en"));
        assert_eq!(normalize_locale_string("fr_FR"), None);
    }

    #[test]
    fn nested_pack_tables_are_flattened() {
        let map = parse_toml_to_map("[gui.calc]\nrun = \"Go\"\n[general]\nerror_prefix = \"E\"\n")
            .unwrap();
        assert_eq!(map.get("gui.calc.run").map(String::as_str), Some("Go"));
        assert_eq!(map.get(keys::ERROR_PREFIX).map(String::as_str), Some("E"));
    }

    #[test]
    fn korean_falls_back_to_english_then_key() {
        let tr = Translator::new("ko");
        assert_eq!(tr.t(keys::ERROR_PREFIX), "오류");
        let en = Translator::new("en");
        assert_eq!(en.t(keys::ERROR_INVALID_NUMBER), "Please enter a valid number.");
        assert_eq!(en.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn built_in_packs_cover_gui_keys() {
        let ko = Translator::new_with_pack("ko", Some("definitely/not/a/dir"));
        assert!(ko.lookup("gui.calc.heading").is_some());
        let en = Translator::new_with_pack("en", Some("definitely/not/a/dir"));
        assert!(en.lookup("gui.calc.heading").is_some());
    }
}
