//! # Burgers BVP Utilities Module
//!
//! Configuration layer of the solver: the caller supplied parameters with their built-in
//! defaults and validation, the fixed numerical constants, and small helpers shared by the
//! solver and the result serializer.
//!
//! ## Main Structures
//!
//! - **`SolverParams`**: domain bounds, diffusion coefficient, iteration cap and residual tolerance
//!   - `Default` gives the built-in problem (`[-1, 1]`, `ε = 0.1`, `250000` passes, `1e-11`)
//!   - `validate()` rejects what would make the discretization meaningless
//!
//! ## Key Functions
//!
//! - `find_max()`: maximum of a slice, starting from zero
//! - `format_scientific()`: `d.dddddde±XX` form used for the residual in the JSON output

use super::PicardSolver::BVPError;

/// Over-relaxation factor of the outer iteration
pub const RELAXATION_FACTOR: f64 = 1.99;
/// Residual value the convergence loop starts from
pub const INITIAL_RESIDUAL: f64 = 1.0;
/// Initial guess for every node of the working state
pub const INITIAL_GUESS: f64 = 1.0;
/// Dirichlet value at `x_min`
pub const LEFT_BOUNDARY_VALUE: f64 = 1.0;
/// Dirichlet value at `x_max`
pub const RIGHT_BOUNDARY_VALUE: f64 = -1.0;

pub const DEFAULT_X_MIN: f64 = -1.0;
pub const DEFAULT_X_MAX: f64 = 1.0;
pub const DEFAULT_EPSILON: f64 = 0.1;
pub const DEFAULT_MAX_ITERATIONS: usize = 250000;
pub const DEFAULT_MAX_RESIDUAL: f64 = 1.0e-11;

/// Parameters supplied by the caller
#[derive(Debug, Clone, PartialEq)]
pub struct SolverParams {
    /// left end of the domain
    pub x_min: f64,
    /// right end of the domain
    pub x_max: f64,
    /// diffusion coefficient ε
    pub epsilon: f64,
    /// iteration cap
    pub max_iterations: usize,
    /// residual tolerance
    pub max_residual: f64,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            x_min: DEFAULT_X_MIN,
            x_max: DEFAULT_X_MAX,
            epsilon: DEFAULT_EPSILON,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_residual: DEFAULT_MAX_RESIDUAL,
        }
    }
}

impl SolverParams {
    pub fn new(
        x_min: f64,
        x_max: f64,
        epsilon: f64,
        max_iterations: usize,
        max_residual: f64,
    ) -> Self {
        Self {
            x_min,
            x_max,
            epsilon,
            max_iterations,
            max_residual,
        }
    }

    /// Validate parameters
    pub fn validate(&self) -> Result<(), BVPError> {
        if !self.x_min.is_finite() || !self.x_max.is_finite() || self.x_max <= self.x_min {
            return Err(BVPError::InvalidDomain {
                min: self.x_min,
                max: self.x_max,
            });
        }
        if !self.epsilon.is_finite() {
            return Err(BVPError::InvalidConfiguration(format!(
                "diffusion coefficient must be finite, got {}",
                self.epsilon
            )));
        }
        if self.max_residual.is_nan() {
            return Err(BVPError::InvalidConfiguration(
                "residual tolerance must be a number".to_string(),
            ));
        }
        Ok(())
    }
}

/// Largest value of the slice, or 0 if the slice is empty or all values are negative.
/// NaN entries never win the comparison.
pub fn find_max(x: &[f64]) -> f64 {
    let mut n = 0.0;
    for &v in x {
        if v > n {
            n = v;
        }
    }
    n
}

/// Scientific notation with six digits after the point and a signed, at least two digit
/// exponent: `9.857045e-12`, `1.000000e+00`. Non-finite values are returned as Rust prints them.
pub fn format_scientific(value: f64) -> String {
    let s = format!("{:.6e}", value);
    match s.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.abs())
            }
            Err(_) => s,
        },
        None => s,
    }
}
