//! Uniform grid for the Burgers BVP.
//!
//! The node count is a compile time constant; only the domain bounds come from the caller.
use super::PicardSolver::BVPError;
use nalgebra::SVector;

/// Number of grid nodes
pub const N_NODES: usize = 101;
/// Number of entries in the residual vector (the last node carries no stencil)
pub const N_RESIDUALS: usize = N_NODES - 1;

/// Evenly spaced values from `min` to `max` inclusive. Fewer than two points gives an empty vector.
pub fn make_range(min: f64, max: f64, n: usize) -> Vec<f64> {
    if n <= 1 {
        return Vec::new();
    }
    let delta = (max - min) / (n - 1) as f64;
    (0..n).map(|i| min + i as f64 * delta).collect()
}

/// Immutable uniform grid derived from the domain bounds
#[derive(Debug, Clone)]
pub struct Grid {
    pub x_min: f64,
    pub x_max: f64,
    /// grid step
    pub dx: f64,
    /// node coordinates
    pub nodes: SVector<f64, N_NODES>,
}

impl Grid {
    /// Builds the grid. A domain with `x_max <= x_min` (or non-finite bounds) would give a
    /// zero or negative step and is rejected.
    pub fn new(x_min: f64, x_max: f64) -> Result<Self, BVPError> {
        if !x_min.is_finite() || !x_max.is_finite() || x_max <= x_min {
            return Err(BVPError::InvalidDomain {
                min: x_min,
                max: x_max,
            });
        }
        let dx = (x_max - x_min) / (N_NODES - 1) as f64;
        let nodes = SVector::<f64, N_NODES>::from_vec(make_range(x_min, x_max, N_NODES));
        Ok(Self {
            x_min,
            x_max,
            dx,
            nodes,
        })
    }

    pub fn len(&self) -> usize {
        N_NODES
    }

    /// Δx²
    pub fn dx2(&self) -> f64 {
        self.dx.powi(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_make_range() {
        assert_eq!(make_range(1.0, 3.0, 3), vec![1.0, 2.0, 3.0]);
        assert_eq!(make_range(1.0, 3.0, 2), vec![1.0, 3.0]);
        assert_eq!(make_range(1.0, 3.0, 5), vec![1.0, 1.5, 2.0, 2.5, 3.0]);
        assert!(make_range(1.0, 3.0, 1).is_empty());
        assert!(make_range(1.0, 3.0, 0).is_empty());
    }

    #[test]
    fn test_grid_spacing() {
        let grid = Grid::new(-1.0, 1.0).unwrap();
        assert_eq!(grid.len(), 101);
        assert_eq!((grid.x_min, grid.x_max), (-1.0, 1.0));
        assert_relative_eq!(grid.dx, 0.02, epsilon = 1e-15);
        assert_relative_eq!(grid.dx2(), 4e-4, epsilon = 1e-15);
        assert_eq!(grid.nodes[0], -1.0);
        assert_relative_eq!(grid.nodes[N_NODES - 1], 1.0, epsilon = 1e-14);
        assert_relative_eq!(grid.nodes[50], 0.0, epsilon = 1e-14);
    }

    #[test]
    fn test_degenerate_domain_rejected() {
        assert!(matches!(
            Grid::new(0.5, 0.5),
            Err(BVPError::InvalidDomain { .. })
        ));
        assert!(matches!(
            Grid::new(1.0, -1.0),
            Err(BVPError::InvalidDomain { .. })
        ));
        assert!(Grid::new(f64::NAN, 1.0).is_err());
        assert!(Grid::new(0.0, f64::INFINITY).is_err());
    }
}
