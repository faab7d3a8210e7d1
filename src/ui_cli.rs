use std::io::{self, Write};

use crate::app::AppError;
use crate::chart::{chart_title, format_value};
use crate::config::Config;
use crate::conversion;
use crate::i18n::{keys, Translator};
use crate::quantity::{NeutronState, QuantityKind};
use crate::sampling::{self, AxisScale, AxisSpec, Curve};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AllProperties,
    Convert,
    Curve,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_ALL,
        keys::MAIN_MENU_CONVERT,
        keys::MAIN_MENU_CURVE,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::AllProperties),
            "2" => return Ok(MenuChoice::Convert),
            "3" => return Ok(MenuChoice::Curve),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 하나의 입력에서 다섯 물리량을 계산해 출력한다.
pub fn handle_all_properties(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ALL_HEADING));
    println!("{}", tr.t(keys::KIND_OPTIONS));
    let kind = read_kind(tr, keys::PROMPT_KIND)?;
    let value = read_f64(tr, &tr.t(keys::PROMPT_VALUE))?;
    let state = conversion::convert_all(value, kind);
    print_state(tr, &state, cfg.decimals);
    Ok(())
}

/// 한 물리량을 다른 한 물리량으로 변환한다.
pub fn handle_convert(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CONVERT_HEADING));
    println!("{}", tr.t(keys::KIND_OPTIONS));
    let from = read_kind(tr, keys::PROMPT_FROM_KIND)?;
    let value = read_f64(tr, &tr.t(keys::PROMPT_VALUE))?;
    let to = read_kind(tr, keys::PROMPT_TO_KIND)?;
    let result = conversion::convert(value, from, to);
    println!(
        "{} {} {}",
        tr.t(keys::CONVERT_RESULT),
        format_value(result, cfg.decimals),
        to.unit_symbol()
    );
    if !result.is_finite() {
        println!("{}", tr.t(keys::NOTE_UNDEFINED));
    }
    Ok(())
}

/// 축 설정을 입력받아 곡선 데이터를 표로 출력한다.
pub fn handle_curve(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CURVE_HEADING));
    println!("{}", tr.t(keys::KIND_OPTIONS));
    println!("{}", tr.t(keys::CURVE_X_AXIS));
    let x_axis = read_axis(tr)?;
    println!("{}", tr.t(keys::CURVE_Y_AXIS));
    let y_axis = read_axis(tr)?;
    let curve = sampling::sample(&x_axis, &y_axis);
    print_curve(tr, &curve, &x_axis, &y_axis, cfg.decimals);
    Ok(())
}

/// 설정 메뉴를 처리한다. 변경이 있으면 true.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} language={}, decimals={}",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.language,
        cfg.decimals
    );
    let mut changed = false;
    let lang = read_line(&tr.t(keys::SETTINGS_PROMPT_LANG))?;
    let lang = lang.trim();
    if !lang.is_empty() && lang != cfg.language {
        cfg.language = lang.to_string();
        changed = true;
    }
    loop {
        let s = read_line(&tr.t(keys::SETTINGS_PROMPT_DECIMALS))?;
        let s = s.trim();
        if s.is_empty() {
            break;
        }
        match s.parse::<usize>() {
            Ok(d) if d <= 12 => {
                changed |= d != cfg.decimals;
                cfg.decimals = d;
                break;
            }
            _ => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
    Ok(changed)
}

/// 다섯 물리량을 표시 단위와 함께 출력한다.
pub fn print_state(tr: &Translator, state: &NeutronState, decimals: usize) {
    println!("{}", tr.t(keys::ALL_RESULT));
    let mut undefined = false;
    for kind in QuantityKind::ALL {
        let v = state.get(kind);
        undefined |= !v.is_finite();
        println!("  {:<18} {}", kind.label(), format_value(v, decimals));
    }
    if undefined {
        println!("{}", tr.t(keys::NOTE_UNDEFINED));
    }
}

/// 곡선 제목, 표시 범위, 점 목록을 출력한다.
pub fn print_curve(tr: &Translator, curve: &Curve, x: &AxisSpec, y: &AxisSpec, decimals: usize) {
    println!("# {}", chart_title(x, y));
    let range_text = |r: Option<(f64, f64)>, scale: AxisScale| match r {
        Some((lo, hi)) => format!(
            "[{}, {}] ({scale})",
            format_value(lo, decimals),
            format_value(hi, decimals)
        ),
        None => format!("{} ({scale})", tr.t(keys::CURVE_RANGE_AUTO)),
    };
    println!(
        "# {} x={} y={}",
        tr.t(keys::CURVE_RANGE),
        range_text(curve.x_display_range, x.scale),
        range_text(curve.y_display_range, y.scale)
    );
    if curve.is_empty() {
        println!("{}", tr.t(keys::CURVE_EMPTY));
        return;
    }
    println!("# {}\t{}", x.kind.label(), y.kind.label());
    for (px, py) in &curve.points {
        println!("{}\t{}", format_sample(*px), format_sample(*py));
    }
}

/// 곡선 표의 값은 범위가 넓으므로 유효숫자 기준 지수 표기로 출력한다.
fn format_sample(v: f64) -> String {
    if v.is_finite() {
        format!("{v:.6e}")
    } else {
        format_value(v, 0)
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    let n = io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    if n == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed",
        )));
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match parse_number(&s) {
            Some(v) => return Ok(v),
            None => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 숫자 입력을 해석한다. 빈 문자열, NaN 등 숫자가 아닌 입력은 거부한다.
pub fn parse_number(s: &str) -> Option<f64> {
    match s.trim().parse::<f64>() {
        Ok(v) if !v.is_nan() => Some(v),
        _ => None,
    }
}

fn read_kind(tr: &Translator, prompt_key: &str) -> Result<QuantityKind, AppError> {
    loop {
        let sel = read_line(&tr.t(prompt_key))?;
        if let Some(kind) = map_quantity(sel.trim()) {
            return Ok(kind);
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

/// 메뉴 번호(1~5) 또는 토큰(wavelength 등)을 물리량으로 변환한다.
pub fn map_quantity(sel: &str) -> Option<QuantityKind> {
    if let Ok(n) = sel.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| QuantityKind::ALL.get(i).copied());
    }
    sel.parse().ok()
}

fn read_axis(tr: &Translator) -> Result<AxisSpec, AppError> {
    let kind = read_kind(tr, keys::PROMPT_KIND)?;
    let min = read_f64(tr, &tr.t(keys::PROMPT_MIN))?;
    let max = read_f64(tr, &tr.t(keys::PROMPT_MAX))?;
    let scale = loop {
        let sel = read_line(&tr.t(keys::PROMPT_SCALE))?;
        match sel.trim() {
            "1" | "" => break AxisScale::Log,
            "2" => break AxisScale::Linear,
            other => match other.parse::<AxisScale>() {
                Ok(s) => break s,
                Err(_) => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
            },
        }
    };
    Ok(AxisSpec::new(kind, min, max, scale))
}
