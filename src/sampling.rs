//! 차트용 곡선 샘플링.

use log::debug;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::conversion::{self, ConversionError};
use crate::quantity::QuantityKind;

/// 곡선 하나에 생성하는 기본 점 개수.
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// 축 스케일.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    Log,
    Linear,
}

impl AxisScale {
    pub fn token(self) -> &'static str {
        match self {
            AxisScale::Log => "log",
            AxisScale::Linear => "linear",
        }
    }
}

impl std::fmt::Display for AxisScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for AxisScale {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "log" | "logarithmic" => Ok(AxisScale::Log),
            "linear" | "lin" => Ok(AxisScale::Linear),
            _ => Err(ConversionError::UnknownScale(s.to_string())),
        }
    }
}

/// 차트 축 하나의 설정(물리량, 범위, 스케일).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub kind: QuantityKind,
    pub min: f64,
    pub max: f64,
    pub scale: AxisScale,
}

impl AxisSpec {
    pub fn new(kind: QuantityKind, min: f64, max: f64, scale: AxisScale) -> Self {
        Self {
            kind,
            min,
            max,
            scale,
        }
    }

    /// 스케일별 범위 조건을 만족하는지 확인한다.
    /// log: 0 < min < max, linear: min < max. NaN 경계는 항상 false.
    pub fn is_valid(&self) -> bool {
        match self.scale {
            AxisScale::Log => self.min > 0.0 && self.max > 0.0 && self.min < self.max,
            AxisScale::Linear => self.min < self.max,
        }
    }

    /// 차트에 넘길 축 범위. log 축은 log10 값으로 표현한다.
    /// 범위가 유효하지 않으면 None(렌더러 자동 스케일).
    pub fn display_range(&self) -> Option<(f64, f64)> {
        if !self.is_valid() {
            return None;
        }
        match self.scale {
            AxisScale::Log => Some((self.min.log10(), self.max.log10())),
            AxisScale::Linear => Some((self.min, self.max)),
        }
    }

    /// 양 끝점을 포함하는 `count`개의 샘플 값. 범위가 유효하지 않으면 빈 벡터.
    ///
    /// log 축은 등비수열, linear 축은 등차수열이다. `count == 1`이면 `min` 하나만 낸다.
    pub fn sample_values(&self, count: usize) -> Vec<f64> {
        if !self.is_valid() {
            debug!(
                "퇴화된 축 범위: {} [{}, {}] ({})",
                self.kind, self.min, self.max, self.scale
            );
            return Vec::new();
        }
        if count <= 1 {
            return vec![self.min; count];
        }
        let last = (count - 1) as f64;
        match self.scale {
            AxisScale::Log => {
                let ratio = self.max / self.min;
                (0..count)
                    .map(|i| self.min * ratio.powf(i as f64 / last))
                    .collect()
            }
            AxisScale::Linear => {
                let span = self.max - self.min;
                (0..count)
                    .map(|i| self.min + span * (i as f64 / last))
                    .collect()
            }
        }
    }
}

/// 샘플링 결과. 점은 x 순서대로 정렬되어 있고 y는 NaN일 수 있다.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub points: Vec<(f64, f64)>,
    pub x_display_range: Option<(f64, f64)>,
    pub y_display_range: Option<(f64, f64)>,
}

impl Curve {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// 기본 점 개수(100)로 곡선을 샘플링한다.
pub fn sample(x_axis: &AxisSpec, y_axis: &AxisSpec) -> Curve {
    sample_with_count(x_axis, y_axis, DEFAULT_SAMPLE_COUNT)
}

/// x축 범위에서 `count`개의 점을 만들고 각 점을 y축 물리량으로 변환한다.
///
/// x축 범위가 퇴화되었으면 점이 없는 곡선을 반환한다. 변환이 정의되지 않는
/// 점의 y는 NaN 그대로 둔다.
pub fn sample_with_count(x_axis: &AxisSpec, y_axis: &AxisSpec, count: usize) -> Curve {
    let points = x_axis
        .sample_values(count)
        .into_iter()
        .map(|x| (x, conversion::convert(x, x_axis.kind, y_axis.kind)))
        .collect();
    Curve {
        points,
        x_display_range: x_axis.display_range(),
        y_display_range: y_axis.display_range(),
    }
}
