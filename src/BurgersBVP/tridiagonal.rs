//! # Tridiagonal linear systems
//!
//! Storage and direct solution (Thomas algorithm) of `A·x = d` with `A` tridiagonal.
//! The sub- and super-diagonals are stored with exactly `n - 1` entries:
//!
//! ```text
//! | diag[0]   upper[0]                               |
//! | lower[0]  diag[1]   upper[1]                     |
//! |           lower[1]  diag[2]   upper[2]           |
//! |                     ...       ...       ...      |
//! |                               lower[n-2] diag[n-1]|
//! ```
//!
//! No pivoting is done. A zero, subnormal or non-finite pivot aborts the solve with
//! [`BVPError::ZeroPivot`] instead of spreading NaN/Inf through the solution.
use super::PicardSolver::BVPError;
use nalgebra::DVector;

#[derive(Debug, Clone)]
pub struct TridiagonalSystem {
    /// sub-diagonal, `lower[i - 1]` multiplies `x[i - 1]` in row `i`
    pub lower: DVector<f64>,
    /// main diagonal
    pub diag: DVector<f64>,
    /// super-diagonal, `upper[i]` multiplies `x[i + 1]` in row `i`
    pub upper: DVector<f64>,
    /// right hand side
    pub rhs: DVector<f64>,
}

impl TridiagonalSystem {
    /// Zero system of size `n` (`n >= 1`)
    pub fn new(n: usize) -> Self {
        let off = n.saturating_sub(1);
        Self {
            lower: DVector::zeros(off),
            diag: DVector::zeros(n),
            upper: DVector::zeros(off),
            rhs: DVector::zeros(n),
        }
    }

    pub fn size(&self) -> usize {
        self.diag.len()
    }

    /// Sets row `i`. `sub` is ignored for the first row and `sup` for the last one.
    pub fn set_row(&mut self, i: usize, sub: f64, diag: f64, sup: f64, rhs: f64) {
        let n = self.size();
        if i > 0 {
            self.lower[i - 1] = sub;
        }
        self.diag[i] = diag;
        if i + 1 < n {
            self.upper[i] = sup;
        }
        self.rhs[i] = rhs;
    }

    /// Identity row `x[i] = value` (Dirichlet condition)
    pub fn set_identity_row(&mut self, i: usize, value: f64) {
        self.set_row(i, 0.0, 1.0, 0.0, value);
    }

    /// Thomas algorithm. Forward elimination overwrites `diag` and `rhs`, so the system
    /// has to be reassembled before it is solved again. The result is written into `x`.
    pub fn solve_in_place(&mut self, x: &mut [f64]) -> Result<(), BVPError> {
        let n = self.size();
        if n == 0 || x.len() != n {
            return Err(BVPError::InvalidConfiguration(format!(
                "tridiagonal system of size {} cannot be solved into a buffer of length {}",
                n,
                x.len()
            )));
        }
        // forward elimination
        for i in 1..n {
            let pivot = checked_pivot(i - 1, self.diag[i - 1])?;
            self.diag[i] -= self.upper[i - 1] * self.lower[i - 1] / pivot;
            self.rhs[i] -= self.rhs[i - 1] * self.lower[i - 1] / pivot;
        }
        // back substitution
        let last = checked_pivot(n - 1, self.diag[n - 1])?;
        x[n - 1] = self.rhs[n - 1] / last;
        for i in (0..n - 1).rev() {
            x[i] = (self.rhs[i] - self.upper[i] * x[i + 1]) / self.diag[i];
        }
        Ok(())
    }

    /// Solves a copy of the system, leaving `self` untouched
    pub fn solve(&self) -> Result<DVector<f64>, BVPError> {
        let mut work = self.clone();
        let mut x = DVector::zeros(self.size());
        work.solve_in_place(x.as_mut_slice())?;
        Ok(x)
    }

    /// `A·x`
    pub fn mul_vec(&self, x: &DVector<f64>) -> DVector<f64> {
        let n = self.size();
        DVector::from_fn(n, |i, _| {
            let mut s = self.diag[i] * x[i];
            if i > 0 {
                s += self.lower[i - 1] * x[i - 1];
            }
            if i + 1 < n {
                s += self.upper[i] * x[i + 1];
            }
            s
        })
    }
}

fn checked_pivot(row: usize, pivot: f64) -> Result<f64, BVPError> {
    if !pivot.is_finite() || pivot.abs() < f64::MIN_POSITIVE {
        return Err(BVPError::ZeroPivot { row, pivot });
    }
    Ok(pivot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity() {
        let mut sys = TridiagonalSystem::new(5);
        for i in 0..5 {
            sys.set_identity_row(i, (i + 1) as f64);
        }
        let x = sys.solve().unwrap();
        for i in 0..5 {
            assert_relative_eq!(x[i], (i + 1) as f64, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_laplacian() {
        // [ 2 -1  0  0]       [1]
        // [-1  2 -1  0] * x = [0]
        // [ 0 -1  2 -1]       [0]
        // [ 0  0 -1  2]       [1]
        let mut sys = TridiagonalSystem::new(4);
        sys.set_row(0, 0.0, 2.0, -1.0, 1.0);
        sys.set_row(1, -1.0, 2.0, -1.0, 0.0);
        sys.set_row(2, -1.0, 2.0, -1.0, 0.0);
        sys.set_row(3, -1.0, 2.0, 0.0, 1.0);
        assert_eq!(sys.lower.len(), 3);
        assert_eq!(sys.upper.len(), 3);
        let x = sys.solve().unwrap();
        // exact solution is all ones
        for i in 0..4 {
            assert_relative_eq!(x[i], 1.0, epsilon = 1e-12);
        }
        let ax = sys.mul_vec(&x);
        for i in 0..4 {
            assert_relative_eq!(ax[i], sys.rhs[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_solve_does_not_touch_system() {
        let mut sys = TridiagonalSystem::new(3);
        sys.set_row(0, 0.0, 4.0, 1.0, 5.0);
        sys.set_row(1, 1.0, 4.0, 1.0, 6.0);
        sys.set_row(2, 1.0, 4.0, 0.0, 5.0);
        let before = sys.diag.clone();
        let x = sys.solve().unwrap();
        assert_eq!(sys.diag, before);
        for i in 0..3 {
            assert_relative_eq!(x[i], 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_zero_pivot_detected() {
        let mut sys = TridiagonalSystem::new(3);
        sys.set_row(0, 0.0, 0.0, 1.0, 1.0);
        sys.set_row(1, 1.0, 1.0, 1.0, 1.0);
        sys.set_row(2, 1.0, 1.0, 0.0, 1.0);
        match sys.solve() {
            Err(BVPError::ZeroPivot { row, .. }) => assert_eq!(row, 0),
            other => panic!("expected zero pivot error, got {:?}", other),
        }
    }

    #[test]
    fn test_size_mismatch() {
        let mut sys = TridiagonalSystem::new(3);
        let mut x = vec![0.0; 2];
        assert!(sys.solve_in_place(&mut x).is_err());
    }
}
