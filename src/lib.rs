//! 중성자 물리량(파장·에너지·온도·속도·파수) 변환 엔진.
//!
//! 핵심 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 엔진을 쓴다.

pub mod app;
pub mod chart;
pub mod config;
pub mod constants;
pub mod conversion;
pub mod i18n;
pub mod quantity;
pub mod sampling;
pub mod ui_cli;
pub mod units;

pub use conversion::{convert, convert_all};
pub use quantity::{NeutronState, QuantityKind};
pub use sampling::{sample, AxisScale, AxisSpec, Curve};
