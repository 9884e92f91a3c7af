//! # Picard / SOR solver for the viscous Burgers BVP
//!
//! The nonlinear problem `u·u' - ε·u'' = 0`, `u(x_min) = 1`, `u(x_max) = -1` is solved by
//! repeated linearization around the previous iterate:
//!
//! 1. assemble the tridiagonal system with the convective velocity frozen at `u_old`
//! 2. solve it directly (Thomas algorithm) to get `u_new`
//! 3. evaluate the nonlinear residual on `u_new` and keep its maximal absolute value
//! 4. over-relax: `u_old += ω·(u_new - u_old)`
//!
//! until the residual is at most the tolerance or the iteration cap is reached.
//!
//! ## Main Structures
//!
//! - **`BurgersBVPTask`**: user facing task: parameters, solve, pretty printing
//! - **`PicardIteration`**: the per-solve working buffers and the single steps of one pass
//! - **`BVPSolution`**: immutable record produced once the loop terminates
//! - **`ConvergenceStatus`**: state of the convergence loop
//! - **`BVPError`**: everything that can go wrong
//!
//! Grid size (101 nodes) and relaxation factor (1.99) are constants and not part of the task.
use super::bvp_utils::{
    INITIAL_GUESS, INITIAL_RESIDUAL, LEFT_BOUNDARY_VALUE, RELAXATION_FACTOR,
    RIGHT_BOUNDARY_VALUE, SolverParams, find_max,
};
use super::grid::{Grid, N_NODES, N_RESIDUALS};
use super::tridiagonal::TridiagonalSystem;
use log::{debug, info, warn};
use nalgebra::SVector;
use prettytable::{Table, row};
use std::time::Instant;
use thiserror::Error;

/// Solution values on the grid nodes
pub type NodalState = SVector<f64, N_NODES>;
/// Residual values, one per node except the last one
pub type ResidualVector = SVector<f64, N_RESIDUALS>;

/// how often the loop reports progress
const PROGRESS_LOG_EVERY: usize = 10_000;

/////////////////////ERROR HANDLING////////////////////////////////////////////////////////
#[derive(Debug, Error)]
pub enum BVPError {
    #[error("Invalid domain: x_max ({max}) must be finite and greater than x_min ({min})")]
    InvalidDomain { min: f64, max: f64 },
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Zero or non-finite pivot {pivot} in row {row} of the tridiagonal system")]
    ZeroPivot { row: usize, pivot: f64 },
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid base64 input: {0}")]
    Encoding(#[from] base64::DecodeError),
}
////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvergenceStatus {
    Running,
    /// residual dropped to the tolerance
    Converged,
    /// iteration cap exhausted first
    IterationCapReached,
}

/// Result of one solve
#[derive(Debug, Clone)]
pub struct BVPSolution {
    /// number of passes performed
    pub iterations: usize,
    /// maximal absolute residual after the last pass (1.0 if no pass ran)
    pub residual: f64,
    /// wall clock time of the solve, ms
    pub elapsed_ms: u64,
    pub status: ConvergenceStatus,
    /// profile of the last direct solve, boundary values are exactly 1 and -1
    pub solution: NodalState,
    /// over-relaxed working state that would seed the next pass
    pub relaxed_state: NodalState,
    /// maximal residual after every pass
    pub residual_history: Vec<f64>,
}

impl BVPSolution {
    pub fn is_converged(&self) -> bool {
        self.status == ConvergenceStatus::Converged
    }
}

/// Working buffers of a single solve and the steps of one Picard pass
#[derive(Debug, Clone)]
pub struct PicardIteration {
    pub grid: Grid,
    pub epsilon: f64,
    /// relaxed state, linearization point of the next pass
    pub u_old: NodalState,
    /// fresh solution of the last linear solve
    pub u_new: NodalState,
    pub system: TridiagonalSystem,
    pub residuals: ResidualVector,
    pub residual: f64,
    pub iterations: usize,
    pub residual_history: Vec<f64>,
}

impl PicardIteration {
    pub fn new(grid: Grid, epsilon: f64) -> Self {
        Self {
            grid,
            epsilon,
            u_old: NodalState::repeat(INITIAL_GUESS),
            u_new: NodalState::repeat(INITIAL_GUESS),
            system: TridiagonalSystem::new(N_NODES),
            residuals: ResidualVector::zeros(),
            residual: INITIAL_RESIDUAL,
            iterations: 0,
            residual_history: Vec::new(),
        }
    }

    /// Builds the linear system around `u_old`. Interior rows carry the Picard
    /// linearized central differences, the first and last rows the Dirichlet values.
    pub fn assemble(&mut self) {
        let dx = self.grid.dx;
        let dx2 = self.grid.dx2();
        let eps = self.epsilon;
        for i in 1..N_NODES - 1 {
            let u = self.u_old[i];
            let sub = (-u / (2.0 * dx)) - (eps / dx2);
            let diag = (2.0 * eps) / dx2;
            let sup = (u / (2.0 * dx)) - (eps / dx2);
            self.system.set_row(i, sub, diag, sup, 0.0);
        }
        self.system.set_identity_row(0, LEFT_BOUNDARY_VALUE);
        self.system.set_identity_row(N_NODES - 1, RIGHT_BOUNDARY_VALUE);
    }

    /// Thomas solve of the assembled system into `u_new`
    pub fn solve_linear(&mut self) -> Result<(), BVPError> {
        self.system.solve_in_place(self.u_new.as_mut_slice())?;
        if let Some(i) = self.u_new.iter().position(|v| !v.is_finite()) {
            return Err(BVPError::NumericalInstability(format!(
                "non-finite solution value at node {} in iteration {}",
                i,
                self.iterations + 1
            )));
        }
        Ok(())
    }

    /// Nonlinear residual of `u_new`, returns its maximal absolute value.
    /// Entry 0 is the boundary node and stays zero.
    pub fn evaluate_residual(&mut self) -> Result<f64, BVPError> {
        let dx = self.grid.dx;
        let dx2 = self.grid.dx2();
        let eps = self.epsilon;
        let u = &self.u_new;
        self.residuals[0] = 0.0;
        for i in 1..N_NODES - 1 {
            self.residuals[i] = u[i] * ((u[i + 1] - u[i - 1]) / (2.0 * dx))
                - eps * ((u[i - 1] - (2.0 * u[i]) + u[i + 1]) / dx2);
        }
        let max_residual = find_max(self.residuals.abs().as_slice());
        if !max_residual.is_finite() || self.residuals.iter().any(|r| r.is_nan()) {
            return Err(BVPError::NumericalInstability(format!(
                "non-finite residual in iteration {}",
                self.iterations
            )));
        }
        Ok(max_residual)
    }

    /// `u_old += ω·(u_new - u_old)`
    pub fn relax(&mut self) {
        for i in 0..N_NODES {
            self.u_old[i] = self.u_old[i] + (self.u_new[i] - self.u_old[i]) * RELAXATION_FACTOR;
        }
    }

    /// One full pass: assemble, solve, count, residual, relax
    pub fn step(&mut self) -> Result<(), BVPError> {
        self.assemble();
        self.solve_linear()?;
        self.iterations += 1;
        let max_residual = self.evaluate_residual()?;
        self.relax();
        self.residual = max_residual;
        self.residual_history.push(max_residual);
        Ok(())
    }

    /// Where the loop stands with respect to the given limits.
    /// The tolerance is checked first, so a run that meets both limits counts as converged.
    pub fn status(&self, max_iterations: usize, max_residual: f64) -> ConvergenceStatus {
        if !(self.residual > max_residual) {
            ConvergenceStatus::Converged
        } else if self.iterations >= max_iterations {
            ConvergenceStatus::IterationCapReached
        } else {
            ConvergenceStatus::Running
        }
    }

    /// Runs passes until a terminal status is reached
    pub fn run(
        &mut self,
        max_iterations: usize,
        max_residual: f64,
    ) -> Result<ConvergenceStatus, BVPError> {
        loop {
            let status = self.status(max_iterations, max_residual);
            if status != ConvergenceStatus::Running {
                return Ok(status);
            }
            self.step()?;
            if self.iterations % PROGRESS_LOG_EVERY == 0 {
                debug!(
                    "iteration {}: max residual {:e}",
                    self.iterations, self.residual
                );
            }
        }
    }
}

/// Solves the Burgers BVP for the given parameters. Every call owns its own buffers.
pub fn solve_bvp(params: &SolverParams) -> Result<BVPSolution, BVPError> {
    params.validate()?;
    let grid = Grid::new(params.x_min, params.x_max)?;
    info!(
        "solving Burgers BVP on [{}, {}], eps = {}, dx = {}, max iterations = {}, tolerance = {:e}",
        params.x_min, params.x_max, params.epsilon, grid.dx, params.max_iterations, params.max_residual
    );
    let start = Instant::now();
    let mut picard = PicardIteration::new(grid, params.epsilon);
    let status = picard.run(params.max_iterations, params.max_residual)?;
    let elapsed_ms = start.elapsed().as_millis() as u64;
    match status {
        ConvergenceStatus::Converged => info!(
            "converged in {} iterations, residual {:e}, {} ms",
            picard.iterations, picard.residual, elapsed_ms
        ),
        _ => warn!(
            "iteration cap {} reached, residual {:e} above tolerance {:e}",
            params.max_iterations, picard.residual, params.max_residual
        ),
    }
    Ok(BVPSolution {
        iterations: picard.iterations,
        residual: picard.residual,
        elapsed_ms,
        status,
        solution: picard.u_new,
        relaxed_state: picard.u_old,
        residual_history: picard.residual_history,
    })
}

/// Main task structure: parameters in, solution out
#[derive(Debug, Clone)]
pub struct BurgersBVPTask {
    /// Optional problem identifier
    pub problem_name: Option<String>,
    /// Optional problem description
    pub problem_description: Option<String>,
    pub params: SolverParams,
    /// filled by `solve`
    pub solution: Option<BVPSolution>,
}

impl Default for BurgersBVPTask {
    fn default() -> Self {
        Self::new()
    }
}

impl BurgersBVPTask {
    /// Task with the built-in parameters
    pub fn new() -> Self {
        Self {
            problem_name: None,
            problem_description: None,
            params: SolverParams::default(),
            solution: None,
        }
    }

    pub fn with_params(params: SolverParams) -> Self {
        Self {
            params,
            ..Self::new()
        }
    }

    pub fn set_problem_name(&mut self, name: &str) {
        self.problem_name = Some(name.to_string());
    }

    pub fn set_problem_description(&mut self, description: &str) {
        self.problem_description = Some(description.to_string());
    }

    pub fn set_domain(&mut self, x_min: f64, x_max: f64) {
        self.params.x_min = x_min;
        self.params.x_max = x_max;
    }

    pub fn set_epsilon(&mut self, epsilon: f64) {
        self.params.epsilon = epsilon;
    }

    pub fn set_iteration_limits(&mut self, max_iterations: usize, max_residual: f64) {
        self.params.max_iterations = max_iterations;
        self.params.max_residual = max_residual;
    }

    /// Solves the task and stores the solution
    pub fn solve(&mut self) -> Result<&BVPSolution, BVPError> {
        let solution = solve_bvp(&self.params)?;
        Ok(&*self.solution.insert(solution))
    }

    pub fn get_solution(&self) -> Option<&BVPSolution> {
        self.solution.as_ref()
    }

    pub fn pretty_print_task(&self) {
        let mut table = Table::new();
        table.add_row(row!["Parameter", "Value"]);
        if let Some(name) = &self.problem_name {
            table.add_row(row!["problem", name]);
        }
        table.add_row(row!["x_min", self.params.x_min]);
        table.add_row(row!["x_max", self.params.x_max]);
        table.add_row(row!["epsilon", self.params.epsilon]);
        table.add_row(row!["max iterations", self.params.max_iterations]);
        table.add_row(row!["max residual", format!("{:e}", self.params.max_residual)]);
        table.add_row(row!["nodes", N_NODES]);
        table.add_row(row!["omega", RELAXATION_FACTOR]);
        table.printstd();
    }

    pub fn pretty_print_result(&self) {
        let Some(sol) = &self.solution else {
            println!("task is not solved yet");
            return;
        };
        println!("__________Burgers BVP solution__________");
        let mut table = Table::new();
        table.add_row(row!["status", format!("{:?}", sol.status)]);
        table.add_row(row!["iterations", sol.iterations]);
        table.add_row(row!["residual", format!("{:e}", sol.residual)]);
        table.add_row(row!["time, ms", sol.elapsed_ms]);
        table.printstd();
        if let Ok(grid) = Grid::new(self.params.x_min, self.params.x_max) {
            println!("profile on [{}, {}], dx = {:e}", grid.x_min, grid.x_max, grid.dx);
            let mut profile = Table::new();
            profile.add_row(row!["x", "u"]);
            for i in (0..N_NODES).step_by(10) {
                profile.add_row(row![
                    format!("{:.3}", grid.nodes[i]),
                    format!("{:.6}", sol.solution[i])
                ]);
            }
            profile.printstd();
        }
    }
}
