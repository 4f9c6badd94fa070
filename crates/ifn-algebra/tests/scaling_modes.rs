use ifn_algebra::{equivalent_ifn, global_scaling, ScalingMode};
use ifn_core::errors::IfnError;
use nalgebra::DMatrix;

fn sample_flow() -> DMatrix<f64> {
    DMatrix::from_row_slice(2, 2, &[0.0, 0.1, 0.2, 0.3])
}

#[test]
fn min_mode_pins_the_smallest_nonzero_flow() {
    let factor = global_scaling(&sample_flow(), ScalingMode::Min(1.0)).unwrap();
    assert!((factor - 10.0).abs() < 1e-12);
    let scaled = equivalent_ifn(&sample_flow(), factor);
    assert_eq!(scaled[(0, 0)], 0.0);
    assert!((scaled[(0, 1)] - 1.0).abs() < 1e-12);
}

#[test]
fn max_mode_pins_the_largest_flow() {
    let factor = global_scaling(&sample_flow(), ScalingMode::Max(6.0)).unwrap();
    assert!((factor - 20.0).abs() < 1e-12);
    let scaled = equivalent_ifn(&sample_flow(), factor);
    assert!((scaled[(1, 1)] - 6.0).abs() < 1e-12);
}

#[test]
fn sum_mode_pins_the_total_flow() {
    let factor = global_scaling(&sample_flow(), ScalingMode::Sum(3.0)).unwrap();
    assert!((factor - 5.0).abs() < 1e-12);
    let scaled = equivalent_ifn(&sample_flow(), factor);
    assert!((scaled.sum() - 3.0).abs() < 1e-12);
}

#[test]
fn integer_basis_clears_float_dust() {
    let flow = DMatrix::from_row_slice(2, 2, &[1.0 / 3.0, 1.0 / 6.0, 0.25, 0.0]);
    let factor = global_scaling(&flow, ScalingMode::IntegerBasis).unwrap();
    assert_eq!(factor, 12.0);
    let scaled = equivalent_ifn(&flow, factor);
    assert!((scaled[(0, 0)] - 4.0).abs() < 1e-9);
    assert!((scaled[(0, 1)] - 2.0).abs() < 1e-9);
    assert!((scaled[(1, 0)] - 3.0).abs() < 1e-9);
    assert_eq!(scaled[(1, 1)], 0.0);
}

#[test]
fn integer_flows_already_have_basis_factor_one() {
    let flow = DMatrix::from_row_slice(2, 2, &[0.0, 3.0, 3.0, 0.0]);
    let factor = global_scaling(&flow, ScalingMode::IntegerBasis).unwrap();
    assert_eq!(factor, 1.0);
}

#[test]
fn all_zero_matrices_cannot_be_rescaled() {
    let err = global_scaling(&DMatrix::<f64>::zeros(3, 3), ScalingMode::Min(1.0)).unwrap_err();
    match err {
        IfnError::Scaling(info) => assert_eq!(info.code, "no-nonzero-entries"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn nonfinite_flows_cannot_be_rescaled() {
    let flow = DMatrix::from_row_slice(2, 2, &[0.0, f64::INFINITY, 1.0, 0.0]);
    let err = global_scaling(&flow, ScalingMode::Sum(1.0)).unwrap_err();
    match err {
        IfnError::Scaling(info) => assert_eq!(info.code, "nonfinite-entry"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn coprime_giant_denominators_overflow_the_basis() {
    // Two denominators just under the reconstruction bound whose difference
    // is 8, so they share no odd factor and the lcm is near 10^18.
    let flow = DMatrix::from_row_slice(
        2,
        2,
        &[1.0 / 999999937.0, 1.0 / 999999929.0, 0.0, 0.0],
    );
    let err = global_scaling(&flow, ScalingMode::IntegerBasis).unwrap_err();
    match err {
        IfnError::Scaling(info) => {
            assert_eq!(info.code, "lcm-overflow");
            assert!(info.hint.is_some());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn scaling_modes_serialize_for_configs() {
    let encoded = serde_json::to_string(&ScalingMode::Min(1.0)).unwrap();
    let decoded: ScalingMode = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, ScalingMode::Min(1.0));
    let basis: ScalingMode = serde_json::from_str("\"IntegerBasis\"").unwrap();
    assert_eq!(basis, ScalingMode::IntegerBasis);
}
