//! 허브(파장) 기반 변환 회귀 테스트.
use neutron_property_calculator::conversion::{convert, convert_all, ConversionError};
use neutron_property_calculator::quantity::QuantityKind;
use neutron_property_calculator::units;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(f64::MIN_POSITIVE);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:e} got {actual:e} (diff {diff:e}, tol {rel_tol})"
    );
}

/// 열/냉중성자 영역의 대표값.
fn representative(kind: QuantityKind) -> f64 {
    match kind {
        QuantityKind::Wavelength => 1.8,
        QuantityKind::Energy => 0.0253,
        QuantityKind::Temperature => 293.6,
        QuantityKind::Velocity => 2200.0,
        QuantityKind::Wavenumber => 3.5,
    }
}

#[test]
fn one_angstrom_reference_point() {
    let state = convert_all(1.0, QuantityKind::Wavelength);
    assert_close("E(1Å)", state.energy_ev, 0.081_80, 1e-3);
    assert_close("T(1Å)", state.temperature_k, 949.3, 1e-3);
    assert_close("v(1Å)", state.velocity_m_per_s, 3956.0, 1e-3);
    assert_close(
        "k(1Å)",
        state.wavenumber_per_angstrom,
        2.0 * std::f64::consts::PI,
        1e-12,
    );
    assert_eq!(state.wavelength_angstrom, 1.0);
}

#[test]
fn thermal_neutron_reference_point() {
    // 25.3 meV ↔ 2200 m/s ↔ 1.798 Å
    let state = convert_all(0.0253, QuantityKind::Energy);
    assert_close("v", state.velocity_m_per_s, 2200.0, 2e-3);
    assert_close("λ", state.wavelength_angstrom, 1.798, 2e-3);
    assert_close("T", state.temperature_k, 293.6, 2e-3);
}

#[test]
fn roundtrip_through_every_pair() {
    for from in QuantityKind::ALL {
        let v = representative(from);
        for to in QuantityKind::ALL {
            if from == to {
                continue;
            }
            let there = convert(v, from, to);
            let back = convert(there, to, from);
            assert_close(&format!("{from}->{to}->{from}"), back, v, 1e-9);
        }
    }
}

#[test]
fn identity_returns_input_unchanged() {
    for kind in QuantityKind::ALL {
        for v in [1.0, 0.0, -3.5, 1e-300, f64::INFINITY] {
            assert_eq!(convert(v, kind, kind).to_bits(), v.to_bits(), "{kind} {v}");
        }
        assert!(convert(f64::NAN, kind, kind).is_nan());
    }
}

#[test]
fn convert_all_matches_pairwise_convert() {
    for kind in QuantityKind::ALL {
        for v in [representative(kind), 0.0, -1.0, 42.0] {
            let state = convert_all(v, kind);
            for target in QuantityKind::ALL {
                let a = state.get(target);
                let b = convert(v, kind, target);
                assert!(
                    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan()),
                    "{kind}={v} -> {target}: convert_all {a} vs convert {b}"
                );
            }
        }
    }
}

#[test]
fn temperature_input_is_kept_as_is() {
    let state = convert_all(300.0, QuantityKind::Temperature);
    assert_eq!(state.temperature_k, 300.0);
}

#[test]
fn negative_energy_gives_nan() {
    assert!(convert(-1.0, QuantityKind::Energy, QuantityKind::Temperature).is_nan());
    let state = convert_all(-1.0, QuantityKind::Temperature);
    assert!(state.wavelength_angstrom.is_nan());
    assert!(state.energy_ev.is_nan());
    assert!(state.velocity_m_per_s.is_nan());
    assert!(state.wavenumber_per_angstrom.is_nan());
    assert_eq!(state.temperature_k, -1.0);
}

#[test]
fn zero_inputs_propagate_without_error() {
    // λ = 0 → v, E, T, k 발산
    let state = convert_all(0.0, QuantityKind::Wavelength);
    assert!(state.velocity_m_per_s.is_infinite());
    assert!(state.energy_ev.is_infinite());
    assert!(state.wavenumber_per_angstrom.is_infinite());

    // E = 0 → v = 0 → λ = ∞ → k = 0
    assert!(convert(0.0, QuantityKind::Energy, QuantityKind::Wavelength).is_infinite());
    assert_eq!(convert(0.0, QuantityKind::Energy, QuantityKind::Wavenumber), 0.0);

    // k = 0 → λ = ∞ → v = 0
    assert_eq!(convert(0.0, QuantityKind::Wavenumber, QuantityKind::Velocity), 0.0);
}

#[test]
fn negative_wavelength_follows_arithmetic() {
    let v = convert(-1.0, QuantityKind::Wavelength, QuantityKind::Velocity);
    let v_pos = convert(1.0, QuantityKind::Wavelength, QuantityKind::Velocity);
    assert_close("v(-1Å)", v, -v_pos, 1e-12);
    let e = convert(-1.0, QuantityKind::Wavelength, QuantityKind::Energy);
    assert_close("E(-1Å)", e, 0.081_80, 1e-3);
}

#[test]
fn hub_is_wavelength_in_meters() {
    assert_close("λ", units::to_wavelength_m(2.0, QuantityKind::Wavelength), 2e-10, 1e-15);
    assert_close(
        "λ(k)",
        units::to_wavelength_m(2.0 * std::f64::consts::PI, QuantityKind::Wavenumber),
        1e-10,
        1e-12,
    );
    let lambda = units::to_wavelength_m(3956.0, QuantityKind::Velocity);
    assert_close("λ(v)", lambda, 1e-10, 1e-3);
    assert_close(
        "v(λ)",
        units::from_wavelength_m(lambda, QuantityKind::Velocity),
        3956.0,
        1e-12,
    );
}

#[test]
fn quantity_tokens_and_labels_are_stable() {
    let expected = [
        ("wavelength", "Wavelength (Å)"),
        ("energy", "Energy (eV)"),
        ("temperature", "Temperature (K)"),
        ("velocity", "Velocity (m/s)"),
        ("wavenumber", "Wavenumber (1/Å)"),
    ];
    for (kind, (token, label)) in QuantityKind::ALL.iter().zip(expected) {
        assert_eq!(kind.token(), token);
        assert_eq!(kind.label(), label);
        assert_eq!(token.parse::<QuantityKind>(), Ok(*kind));
    }
    assert_eq!(
        "momentum".parse::<QuantityKind>(),
        Err(ConversionError::UnknownQuantity("momentum".into()))
    );
}
