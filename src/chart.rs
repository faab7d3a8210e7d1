//! 샘플링한 곡선을 차트에 그릴 수 있는 형태로 바꾼다.
//!
//! 렌더러(egui_plot)는 로그 축을 지원하지 않으므로 log 축 값은 log10으로
//! 옮겨 그리고, 눈금 라벨에서 다시 원래 값으로 표시한다.

use crate::sampling::{AxisScale, AxisSpec, Curve};

/// 화면 좌표계로 옮긴 곡선.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub title: String,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub x_scale: AxisScale,
    pub y_scale: AxisScale,
    /// 끊김 없이 이어지는 구간들. 정의되지 않는 점에서 선이 끊긴다.
    pub segments: Vec<Vec<[f64; 2]>>,
    pub x_bounds: Option<(f64, f64)>,
    pub y_bounds: Option<(f64, f64)>,
}

impl ChartSeries {
    pub fn from_curve(curve: &Curve, x_axis: &AxisSpec, y_axis: &AxisSpec) -> Self {
        let mut segments = Vec::new();
        let mut current: Vec<[f64; 2]> = Vec::new();
        for &(x, y) in &curve.points {
            let px = to_plot(x, x_axis.scale);
            let py = to_plot(y, y_axis.scale);
            if px.is_finite() && py.is_finite() {
                current.push([px, py]);
            } else if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        Self {
            title: chart_title(x_axis, y_axis),
            x_title: x_axis.kind.label(),
            y_title: y_axis.kind.label(),
            x_scale: x_axis.scale,
            y_scale: y_axis.scale,
            segments,
            x_bounds: curve.x_display_range,
            y_bounds: curve.y_display_range,
        }
    }

    /// 그릴 점의 총 개수.
    pub fn point_count(&self) -> usize {
        self.segments.iter().map(Vec::len).sum()
    }
}

/// "Energy (eV) vs Wavelength (Å)" 형식의 제목.
pub fn chart_title(x_axis: &AxisSpec, y_axis: &AxisSpec) -> String {
    format!("{} vs {}", y_axis.kind.label(), x_axis.kind.label())
}

/// 값을 차트 좌표로 옮긴다. log 축에서 0 이하 값은 NaN이 된다.
pub fn to_plot(value: f64, scale: AxisScale) -> f64 {
    match scale {
        AxisScale::Log if value > 0.0 => value.log10(),
        AxisScale::Log => f64::NAN,
        AxisScale::Linear => value,
    }
}

/// 차트 좌표의 눈금 값을 원래 물리량 값으로 표시한다.
pub fn axis_tick_label(plot_value: f64, scale: AxisScale) -> String {
    match scale {
        AxisScale::Log => format_compact(10f64.powf(plot_value)),
        AxisScale::Linear => format_compact(plot_value),
    }
}

/// 결과값을 고정 소수 자릿수로 표시한다. NaN/Infinity는 그대로 문자열로 표시한다.
pub fn format_value(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        format!("{value:.decimals$}")
    }
}

fn format_compact(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let abs = value.abs();
    if (1e-3..1e4).contains(&abs) {
        trim_zeros(format!("{value:.3}"))
    } else {
        let s = format!("{value:.2e}");
        match s.split_once('e') {
            Some((mantissa, exp)) => format!("{}e{exp}", trim_zeros(mantissa.to_string())),
            None => s,
        }
    }
}

fn trim_zeros(s: String) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
