use std::collections::BTreeSet;

use ifn_core::errors::{ErrorInfo, IfnError};
use nalgebra::DMatrix;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

/// Largest denominator considered when reconstructing link flows as exact
/// fractions.
const MAX_DENOMINATOR: u64 = 1_000_000_000;

/// Rescaling rule for [`global_scaling`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScalingMode {
    /// Scale so the smallest nonzero flow equals the given target.
    Min(f64),
    /// Scale so the largest flow equals the given target.
    Max(f64),
    /// Scale so the total flow equals the given target.
    Sum(f64),
    /// Scale to the smallest equivalent network whose flows are all
    /// integers.
    IntegerBasis,
}

/// Computes the factor that rescales `flow` according to `mode`.
///
/// Only nonzero entries participate; zeros stay zero under any rescaling.
/// Apply the factor with [`equivalent_ifn`], which preserves flow
/// conservation and connectivity.
pub fn global_scaling(flow: &DMatrix<f64>, mode: ScalingMode) -> Result<f64, IfnError> {
    let nonzero: Vec<f64> = flow
        .iter()
        .copied()
        .filter(|value| *value != 0.0)
        .collect();
    if nonzero.is_empty() {
        let info = ErrorInfo::new(
            "no-nonzero-entries",
            "cannot rescale a matrix with no nonzero entries",
        )
        .with_context("rows", flow.nrows().to_string())
        .with_context("cols", flow.ncols().to_string());
        return Err(IfnError::Scaling(info));
    }
    if let Some(bad) = nonzero.iter().find(|value| !value.is_finite()) {
        let info = ErrorInfo::new("nonfinite-entry", "flows must be finite to be rescaled")
            .with_context("value", bad.to_string());
        return Err(IfnError::Scaling(info));
    }
    match mode {
        ScalingMode::Min(target) => {
            let smallest = nonzero.iter().copied().fold(f64::INFINITY, f64::min);
            Ok(target / smallest)
        }
        ScalingMode::Max(target) => {
            let largest = nonzero.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            Ok(target / largest)
        }
        ScalingMode::Sum(target) => {
            let total: f64 = nonzero.iter().sum();
            Ok(target / total)
        }
        ScalingMode::IntegerBasis => integer_basis_factor(&nonzero),
    }
}

/// Applies a scaling factor to every entry, yielding an equivalent network.
pub fn equivalent_ifn(flow: &DMatrix<f64>, factor: f64) -> DMatrix<f64> {
    flow * factor
}

/// Reconstructs each flow as the best fraction with denominator at most
/// [`MAX_DENOMINATOR`], then returns the least common multiple of the
/// denominators.
///
/// Reconstruction clears float dust: a flow stored as `0.3333333333333333`
/// is recognised as one third and scales to an exact integer. The factor
/// itself must stay exactly representable, so an lcm beyond `2^53` is
/// reported as an error.
fn integer_basis_factor(values: &[f64]) -> Result<f64, IfnError> {
    let limit = BigInt::from(MAX_DENOMINATOR);
    let mut denominators = BTreeSet::new();
    for &value in values {
        let exact = BigRational::from_float(value).ok_or_else(|| {
            let info = ErrorInfo::new("nonfinite-entry", "flows must be finite to be rescaled")
                .with_context("value", value.to_string());
            IfnError::Scaling(info)
        })?;
        denominators.insert(bounded_denominator(&exact, &limit));
    }

    let mut factor = BigInt::one();
    for denominator in &denominators {
        factor = factor.lcm(denominator);
    }

    let ceiling = BigInt::one() << 53u32;
    if factor > ceiling {
        let info = ErrorInfo::new(
            "lcm-overflow",
            "integer basis factor exceeds the exactly representable float range",
        )
        .with_context("factor", factor.to_string())
        .with_hint("rescale the flows to coarser fractions before requesting an integer basis");
        return Err(IfnError::Scaling(info));
    }
    factor.to_f64().ok_or_else(|| {
        let info = ErrorInfo::new(
            "lcm-overflow",
            "integer basis factor is not representable as a float",
        );
        IfnError::Scaling(info)
    })
}

fn bounded_denominator(value: &BigRational, limit: &BigInt) -> BigInt {
    best_approximation(value, limit).denom().clone()
}

/// Best rational approximation of `value` with denominator at most `limit`.
///
/// Walks the continued fraction expansion, tracking the last two
/// convergents, and stops when the next convergent's denominator would
/// exceed the limit. The answer is whichever of the final convergent and
/// its last semiconvergent lies closer to `value`; ties go to the
/// convergent.
fn best_approximation(value: &BigRational, limit: &BigInt) -> BigRational {
    if value.denom() <= limit {
        return value.clone();
    }
    let negative = value.is_negative();
    let magnitude = value.abs();

    let mut p0 = BigInt::zero();
    let mut q0 = BigInt::one();
    let mut p1 = BigInt::one();
    let mut q1 = BigInt::zero();
    let mut numer = magnitude.numer().clone();
    let mut denom = magnitude.denom().clone();

    loop {
        let quotient = &numer / &denom;
        let next_q = &q0 + &quotient * &q1;
        if next_q > *limit {
            break;
        }
        let next_p = &p0 + &quotient * &p1;
        p0 = std::mem::replace(&mut p1, next_p);
        q0 = std::mem::replace(&mut q1, next_q);
        let remainder = &numer - &quotient * &denom;
        numer = std::mem::replace(&mut denom, remainder);
    }

    let steps = (limit - &q0) / &q1;
    let semiconvergent = BigRational::new(&p0 + &steps * &p1, &q0 + &steps * &q1);
    let convergent = BigRational::new(p1, q1);
    let approximation =
        if (&semiconvergent - &magnitude).abs() < (&convergent - &magnitude).abs() {
            semiconvergent
        } else {
            convergent
        };
    if negative {
        -approximation
    } else {
        approximation
    }
}
