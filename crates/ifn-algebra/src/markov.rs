use ifn_core::errors::{ErrorInfo, IfnError};
use ifn_core::tolerance::{singular_value_cutoff, steady_state_tolerance};
use nalgebra::{DMatrix, DVector};

use crate::properties::require_square;

/// Computes the stationary node vector of a row stochastic matrix, scaled so
/// its entries sum to `kappa`.
///
/// The defining equations `pi' S = pi'` and `sum(pi) = kappa` are stacked
/// into one overdetermined system `X pi = y` with `X = [S' - I; 1']` and
/// `y = [0, ..., 0, kappa]`, then solved through the Moore-Penrose
/// pseudoinverse of `X`. For an irreducible input the system has exactly one
/// solution and the computed vector is strictly positive.
///
/// The input is screened first: a NaN or infinite entry produces an
/// [`IfnError::Shape`] before any factorisation runs. The solution is
/// checked before it is returned: entries must be nonnegative, the fixed
/// point residual must vanish and the entries must sum to `kappa`, each
/// within the shared tolerance widened by the observed condition number of
/// `X`. A violation produces [`IfnError::ReducibleNetwork`]; it usually
/// means the input was reducible or not actually row stochastic.
pub fn steady_state(stochastic: &DMatrix<f64>, kappa: f64) -> Result<DVector<f64>, IfnError> {
    let n = require_square(stochastic, "steady state")?;
    if n == 0 {
        let info = ErrorInfo::new("empty-matrix", "steady state requires at least one node");
        return Err(IfnError::Shape(info));
    }
    require_finite(stochastic, n)?;

    let mut system = DMatrix::<f64>::zeros(n + 1, n);
    for row in 0..n {
        for col in 0..n {
            system[(row, col)] = stochastic[(col, row)];
        }
        system[(row, row)] -= 1.0;
    }
    for col in 0..n {
        system[(n, col)] = 1.0;
    }
    let mut rhs = DVector::<f64>::zeros(n + 1);
    rhs[n] = kappa;

    let svd = system.try_svd(true, true, f64::EPSILON, 0).ok_or_else(|| {
        let info = ErrorInfo::new(
            "svd-no-convergence",
            "singular value decomposition of the stationary system did not converge",
        )
        .with_context("nodes", n.to_string());
        IfnError::ReducibleNetwork(info)
    })?;
    let sigma_max = svd.singular_values.max();
    let cutoff = singular_value_cutoff(n + 1, n, sigma_max);
    let condition = retained_condition(svd.singular_values.as_slice(), sigma_max, cutoff);
    let pseudoinverse = svd.pseudo_inverse(cutoff).map_err(|reason| {
        let info =
            ErrorInfo::new("svd-pseudoinverse", reason).with_context("nodes", n.to_string());
        IfnError::ReducibleNetwork(info)
    })?;
    let pi = &pseudoinverse * &rhs;

    verify_stationary(stochastic, &pi, kappa, condition)?;
    Ok(pi)
}

/// A NaN entry would panic inside the SVD ordering, so non-finite input
/// must be turned away before the factorisation.
fn require_finite(stochastic: &DMatrix<f64>, n: usize) -> Result<(), IfnError> {
    // Column major iteration, matching the matrix storage.
    match stochastic
        .iter()
        .enumerate()
        .find(|(_, value)| !value.is_finite())
    {
        Some((index, value)) => {
            let info = ErrorInfo::new(
                "non-finite-entry",
                "stochastic matrix contains a non-finite entry",
            )
            .with_context("row", (index % n).to_string())
            .with_context("col", (index / n).to_string())
            .with_context("value", value.to_string())
            .with_hint("rebuild the matrix from capacities with capacity_to_stochastic");
            Err(IfnError::Shape(info))
        }
        None => Ok(()),
    }
}

/// Ratio of the largest singular value to the smallest one retained by the
/// rank cutoff. The verification tolerance scales with this ratio so that
/// ill conditioned but legitimate networks are not rejected.
fn retained_condition(singular_values: &[f64], sigma_max: f64, cutoff: f64) -> f64 {
    let sigma_min = singular_values
        .iter()
        .copied()
        .filter(|sigma| *sigma > cutoff)
        .fold(f64::INFINITY, f64::min);
    if sigma_min.is_finite() && sigma_min > 0.0 {
        (sigma_max / sigma_min).max(1.0)
    } else {
        1.0
    }
}

fn verify_stationary(
    stochastic: &DMatrix<f64>,
    pi: &DVector<f64>,
    kappa: f64,
    condition: f64,
) -> Result<(), IfnError> {
    let n = stochastic.nrows();
    let tolerance = steady_state_tolerance(n, kappa) * condition;

    for (node, value) in pi.iter().enumerate() {
        if *value < -tolerance {
            let info = ErrorInfo::new(
                "negative-stationary-entry",
                format!("stationary vector entry for node {node} is negative"),
            )
            .with_context("node", node.to_string())
            .with_context("value", format!("{value:e}"))
            .with_context("tolerance", format!("{tolerance:e}"))
            .with_hint("restrict the network to one strongly connected component");
            return Err(IfnError::ReducibleNetwork(info));
        }
    }

    let residual = (stochastic.transpose() * pi - pi).norm();
    if residual > tolerance {
        let info = ErrorInfo::new(
            "stationary-residual",
            "solved vector does not satisfy the stationary fixed point",
        )
        .with_context("residual", format!("{residual:e}"))
        .with_context("tolerance", format!("{tolerance:e}"))
        .with_hint("the network is reducible or its rows do not sum to one");
        return Err(IfnError::ReducibleNetwork(info));
    }

    let total = pi.sum();
    if (total - kappa).abs() > tolerance {
        let info = ErrorInfo::new(
            "stationary-total",
            "solved vector does not reach the requested total flow",
        )
        .with_context("total", format!("{total:e}"))
        .with_context("kappa", format!("{kappa:e}"))
        .with_hint("the network is reducible or its rows do not sum to one");
        return Err(IfnError::ReducibleNetwork(info));
    }
    Ok(())
}
