//! 곡선 샘플링/표시 범위 테스트.
use neutron_property_calculator::conversion::convert;
use neutron_property_calculator::quantity::QuantityKind;
use neutron_property_calculator::sampling::{
    sample, sample_with_count, AxisScale, AxisSpec, DEFAULT_SAMPLE_COUNT,
};

fn axis(kind: QuantityKind, min: f64, max: f64, scale: AxisScale) -> AxisSpec {
    AxisSpec::new(kind, min, max, scale)
}

#[test]
fn log_range_with_zero_min_is_degenerate() {
    let x = axis(QuantityKind::Wavelength, 0.0, 10.0, AxisScale::Log);
    let y = axis(QuantityKind::Energy, 1e-3, 1.0, AxisScale::Log);
    let curve = sample(&x, &y);
    assert!(curve.is_empty());
    assert_eq!(curve.x_display_range, None);
    assert!(curve.y_display_range.is_some());
}

#[test]
fn linear_range_includes_endpoints() {
    let x = axis(QuantityKind::Wavelength, 1.0, 5.0, AxisScale::Linear);
    let y = axis(QuantityKind::Energy, 0.0, 0.0, AxisScale::Linear);
    let curve = sample(&x, &y);
    assert_eq!(curve.len(), DEFAULT_SAMPLE_COUNT);
    assert_eq!(curve.points[0].0, 1.0);
    assert_eq!(curve.points[99].0, 5.0);
    assert!(curve.points.windows(2).all(|w| w[0].0 < w[1].0));
    assert_eq!(curve.x_display_range, Some((1.0, 5.0)));
    assert_eq!(curve.y_display_range, None);
}

#[test]
fn log_range_is_geometric() {
    let x = axis(QuantityKind::Energy, 1e-4, 1.0, AxisScale::Log);
    let y = axis(QuantityKind::Wavelength, 0.1, 100.0, AxisScale::Log);
    let curve = sample(&x, &y);
    assert_eq!(curve.len(), 100);
    assert_eq!(curve.points[0].0, 1e-4);
    assert!((curve.points[99].0 - 1.0).abs() < 1e-12);
    let r0 = curve.points[1].0 / curve.points[0].0;
    let r1 = curve.points[51].0 / curve.points[50].0;
    assert!((r0 - r1).abs() < 1e-9);
    let (lo, hi) = curve.x_display_range.expect("x range");
    assert!((lo + 4.0).abs() < 1e-12 && hi.abs() < 1e-12);
    let (lo, hi) = curve.y_display_range.expect("y range");
    assert!((lo + 1.0).abs() < 1e-12 && (hi - 2.0).abs() < 1e-12);
}

#[test]
fn y_values_come_from_pairwise_convert() {
    let x = axis(QuantityKind::Wavelength, 0.5, 20.0, AxisScale::Log);
    let y = axis(QuantityKind::Temperature, 1.0, 1000.0, AxisScale::Log);
    for (px, py) in sample(&x, &y).points {
        assert_eq!(py, convert(px, QuantityKind::Wavelength, QuantityKind::Temperature));
    }
}

#[test]
fn undefined_points_are_passed_through() {
    let x = axis(QuantityKind::Energy, -1.0, 1.0, AxisScale::Linear);
    let y = axis(QuantityKind::Wavelength, 0.0, 10.0, AxisScale::Linear);
    let curve = sample(&x, &y);
    assert_eq!(curve.len(), 100);
    assert!(curve.points[0].1.is_nan());
    assert!(curve.points[99].1.is_finite());
}

#[test]
fn invalid_ranges_are_degenerate() {
    let y = axis(QuantityKind::Energy, 1.0, 2.0, AxisScale::Linear);
    for x in [
        axis(QuantityKind::Wavelength, 5.0, 5.0, AxisScale::Linear),
        axis(QuantityKind::Wavelength, 5.0, 1.0, AxisScale::Linear),
        axis(QuantityKind::Wavelength, -1.0, 10.0, AxisScale::Log),
        axis(QuantityKind::Wavelength, f64::NAN, 10.0, AxisScale::Linear),
    ] {
        let curve = sample(&x, &y);
        assert!(curve.is_empty(), "{x:?}");
        assert_eq!(curve.x_display_range, None);
    }
}

#[test]
fn negative_linear_range_is_allowed() {
    let x = axis(QuantityKind::Velocity, -10.0, 10.0, AxisScale::Linear);
    assert!(x.is_valid());
    assert_eq!(x.display_range(), Some((-10.0, 10.0)));
}

#[test]
fn small_counts_are_guarded() {
    let x = axis(QuantityKind::Wavelength, 2.0, 4.0, AxisScale::Log);
    let y = axis(QuantityKind::Velocity, 1.0, 2.0, AxisScale::Log);
    assert!(sample_with_count(&x, &y, 0).is_empty());
    let one = sample_with_count(&x, &y, 1);
    assert_eq!(one.len(), 1);
    assert_eq!(one.points[0].0, 2.0);
    let two = sample_with_count(&x, &y, 2);
    assert_eq!(two.points.iter().map(|p| p.0).collect::<Vec<_>>(), vec![2.0, 4.0]);
}

#[test]
fn scale_tokens_parse() {
    assert_eq!("log".parse::<AxisScale>(), Ok(AxisScale::Log));
    assert_eq!("Linear".parse::<AxisScale>(), Ok(AxisScale::Linear));
    assert!("cubic".parse::<AxisScale>().is_err());
}
