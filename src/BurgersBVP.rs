//! # Viscous Burgers Boundary Value Problem (BVP) Module
//!
//! This module solves the steady one-dimensional convection–diffusion problem
//! (the viscous Burgers profile) by finite differences on a fixed uniform grid.
//!
//! ## Mathematical Model
//!
//! ### Nomenclature
//!
//! | Symbol | Description |
//! |--------|-------------|
//! | `u` | Unknown velocity profile |
//! | `ε` | Diffusion (viscosity) coefficient |
//! | `Δx` | Grid spacing, `(x_max - x_min)/(N - 1)` |
//! | `N` | Number of grid nodes, fixed to 101 |
//! | `ω` | Over-relaxation factor, fixed to 1.99 |
//!
//! ### Governing Equation
//!
//! ```text
//! u·du/dx - ε·d²u/dx² = 0,     x ∈ [x_min, x_max]
//! u(x_min) = 1,  u(x_max) = -1
//! ```
//!
//! ### Discretization
//!
//! Central differences on interior nodes. The convective term is linearized with the
//! previous iterate (Picard), so every pass produces a tridiagonal system:
//!
//! ```text
//! sub_i  = -u_old_i/(2Δx) - ε/Δx²
//! diag_i =  2ε/Δx²
//! sup_i  =  u_old_i/(2Δx) - ε/Δx²
//! rhs_i  =  0
//! ```
//!
//! Boundary rows are identity rows carrying the Dirichlet values.
//!
//! ## Numerical Solution
//!
//! Each pass: assemble, solve with the Thomas algorithm, evaluate the nonlinear residual
//! on the fresh solution, then blend it into the working state with successive
//! over-relaxation `u_old += ω·(u_new - u_old)`. The loop stops once the maximal residual
//! drops to the tolerance or the iteration cap is reached.

pub mod PicardSolver;
pub mod bvp_utils;
pub mod grid;
pub mod task_parser_BVP;
pub mod tridiagonal;
