//! # Task Parser for the Burgers BVP Module
//!
//! JSON front end of the solver. It turns a configuration document into solver parameters
//! and the solver outcome into the result document:
//!
//! ```json
//! {"solverConfig":{"epsilon":0.1,"maxIterations":250000,"maxResidual":1e-11,"domain":{"min":-1.0,"max":1.0}}}
//! ```
//! ```json
//! {"result":{"iterations":35680,"residual":9.857045e-12,"time":21}}
//! ```
//!
//! ## Main Functions
//!
//! - **`solve_bvp_without_inputs()`**: built-in problem → result document
//! - **`solve_bvp_with_inputs()`**: configuration document → result document
//! - **`parse_config()`** / **`parse_config_file()`**: configuration text/file → `ConfigDatum`
//! - **`result_to_json()`** / **`parse_result()`**: result document in both directions
//! - **`create_template()`**: writes a configuration file with the built-in values
//!
//! ## Notes
//!
//! Missing fields are read as zero, like an unset field of the upstream producers. The
//! parameters are then validated by the solver, so e.g. a missing domain ends as
//! `BVPError::InvalidDomain` instead of a silent division by zero.
//! The residual is written as a raw JSON number in `d.dddddde±XX` form so existing consumers
//! keep reading the same text.

use super::PicardSolver::{BVPError, BVPSolution, BurgersBVPTask, solve_bvp};
use super::bvp_utils::{SolverParams, format_scientific};
use log::info;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::value::RawValue;
use std::fs;
use std::path::{Path, PathBuf};

/// Default name of the generated template
pub const TEMPLATE_FILE_NAME: &str = "problem_template.json";

/// Root of the configuration document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDatum {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem_description: Option<String>,
    #[serde(default)]
    pub solver_config: SolverConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolverConfig {
    pub epsilon: f64,
    pub max_iterations: usize,
    pub max_residual: f64,
    pub domain: Domain,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl From<&SolverConfig> for SolverParams {
    fn from(config: &SolverConfig) -> Self {
        SolverParams::new(
            config.domain.min,
            config.domain.max,
            config.epsilon,
            config.max_iterations,
            config.max_residual,
        )
    }
}

impl From<&SolverParams> for SolverConfig {
    fn from(params: &SolverParams) -> Self {
        Self {
            epsilon: params.epsilon,
            max_iterations: params.max_iterations,
            max_residual: params.max_residual,
            domain: Domain {
                min: params.x_min,
                max: params.x_max,
            },
        }
    }
}

/// Root of the result document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    pub result: ResultBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultBody {
    pub iterations: usize,
    #[serde(serialize_with = "serialize_scientific")]
    pub residual: f64,
    /// elapsed time, ms
    pub time: u64,
}

impl From<&BVPSolution> for ResultEnvelope {
    fn from(solution: &BVPSolution) -> Self {
        Self {
            result: ResultBody {
                iterations: solution.iterations,
                residual: solution.residual,
                time: solution.elapsed_ms,
            },
        }
    }
}

fn serialize_scientific<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    let raw = RawValue::from_string(format_scientific(*value)).map_err(|e| {
        <S::Error as serde::ser::Error>::custom(format!(
            "residual {} is not a JSON number: {}",
            value, e
        ))
    })?;
    raw.serialize(serializer)
}

/// Configuration text → configuration document
pub fn parse_config(config: &str) -> Result<ConfigDatum, BVPError> {
    let datum: ConfigDatum = serde_json::from_str(config)?;
    Ok(datum)
}

/// Configuration file → configuration document
pub fn parse_config_file(path: &Path) -> Result<ConfigDatum, BVPError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Solution → result document
pub fn result_to_json(solution: &BVPSolution) -> Result<String, BVPError> {
    let envelope = ResultEnvelope::from(solution);
    Ok(serde_json::to_string(&envelope)?)
}

/// Result document → structured result
pub fn parse_result(json: &str) -> Result<ResultEnvelope, BVPError> {
    Ok(serde_json::from_str(json)?)
}

/// Solves the built-in problem: domain `[-1, 1]`, `ε = 0.1`, 250000 passes, tolerance `1e-11`
pub fn solve_bvp_without_inputs() -> Result<String, BVPError> {
    let solution = solve_bvp(&SolverParams::default())?;
    result_to_json(&solution)
}

/// Solves the problem described by a configuration document
pub fn solve_bvp_with_inputs(config: &str) -> Result<String, BVPError> {
    let datum = parse_config(config)?;
    info!("configDatum: {:?}", datum);
    let solution = solve_bvp(&SolverParams::from(&datum.solver_config))?;
    result_to_json(&solution)
}

impl BurgersBVPTask {
    /// Takes name, description and solver parameters from a configuration document
    pub fn set_params_from_config(&mut self, datum: &ConfigDatum) {
        self.problem_name = datum.problem_name.clone();
        self.problem_description = datum.problem_description.clone();
        self.params = SolverParams::from(&datum.solver_config);
    }

    /// Configuration document of this task
    pub fn to_config(&self) -> ConfigDatum {
        ConfigDatum {
            problem_name: self.problem_name.clone(),
            problem_description: self.problem_description.clone(),
            solver_config: SolverConfig::from(&self.params),
        }
    }

    /// Reads the task from a configuration file
    pub fn parse_file(&mut self, path: &Path) -> Result<(), BVPError> {
        let datum = parse_config_file(path)?;
        info!("task read from {:?}", path);
        self.set_params_from_config(&datum);
        Ok(())
    }

    /// One-shot method: file → parameters → solution → result document
    pub fn solve_from_file(&mut self, path: &Path) -> Result<String, BVPError> {
        self.parse_file(path)?;
        let solution = self.solve()?;
        result_to_json(solution)
    }
}

/// Writes a template configuration with the built-in values into `path`
pub fn create_template_at(path: &Path) -> Result<(), BVPError> {
    let mut task = BurgersBVPTask::new();
    task.set_problem_name("YourProblemName");
    task.set_problem_description("Viscous Burgers profile u*u' - eps*u'' = 0, u(min) = 1, u(max) = -1");
    let content = serde_json::to_string_pretty(&task.to_config())?;
    fs::write(path, content)?;
    Ok(())
}

/// Writes `problem_template.json` into the current directory
pub fn create_template() -> Result<PathBuf, BVPError> {
    let path = PathBuf::from(TEMPLATE_FILE_NAME);
    create_template_at(&path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FULL_CONFIG: &str = "{\"solverConfig\":{\"epsilon\": 0.1, \"maxIterations\": 250000, \"maxResidual\": 1.0e-11, \"domain\": {\"min\": -1.0, \"max\": 1.0 }}}";

    #[test]
    fn test_parse_full_config() {
        let datum = parse_config(FULL_CONFIG).unwrap();
        let params = SolverParams::from(&datum.solver_config);
        assert_eq!(params, SolverParams::default());
        assert!(datum.problem_name.is_none());
    }

    #[test]
    fn test_missing_fields_are_zero() {
        let datum = parse_config("{\"solverConfig\":{\"epsilon\": 0.5}}").unwrap();
        assert_eq!(datum.solver_config.epsilon, 0.5);
        assert_eq!(datum.solver_config.max_iterations, 0);
        assert_eq!(datum.solver_config.max_residual, 0.0);
        assert_eq!(datum.solver_config.domain, Domain::default());

        let datum = parse_config("{}").unwrap();
        assert_eq!(datum, ConfigDatum::default());
    }

    #[test]
    fn test_malformed_config() {
        assert!(matches!(
            parse_config("{\"solverConfig\": "),
            Err(BVPError::ConfigParse(_))
        ));
        assert!(matches!(
            parse_config("{\"solverConfig\":{\"maxIterations\": -5}}"),
            Err(BVPError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_missing_domain_is_rejected_by_solver() {
        let res = solve_bvp_with_inputs("{\"solverConfig\":{\"epsilon\": 0.1, \"maxIterations\": 10}}");
        assert!(matches!(res, Err(BVPError::InvalidDomain { .. })));
    }

    #[test]
    fn test_result_format() {
        let envelope = ResultEnvelope {
            result: ResultBody {
                iterations: 35680,
                residual: 9.5e-12,
                time: 17,
            },
        };
        let json = serde_json::to_string(&envelope).unwrap();
        assert_eq!(
            json,
            "{\"result\":{\"iterations\":35680,\"residual\":9.500000e-12,\"time\":17}}"
        );
        let back = parse_result(&json).unwrap();
        assert_eq!(back.result.iterations, 35680);
        assert_relative_eq!(back.result.residual, 9.5e-12, max_relative = 1e-12);
        assert_eq!(back.result.time, 17);
    }

    #[test]
    fn test_non_finite_residual_is_not_serialized() {
        let envelope = ResultEnvelope {
            result: ResultBody {
                iterations: 1,
                residual: f64::NAN,
                time: 0,
            },
        };
        assert!(serde_json::to_string(&envelope).is_err());
    }

    #[test]
    fn test_zero_cap_document() {
        let json = solve_bvp_with_inputs(
            "{\"solverConfig\":{\"epsilon\": 0.1, \"maxIterations\": 0, \"maxResidual\": 1.0e-11, \"domain\": {\"min\": -1.0, \"max\": 1.0 }}}",
        )
        .unwrap();
        assert!(json.contains("\"iterations\":0"));
        assert!(json.contains("\"residual\":1.000000e+00"));
    }

    #[test]
    fn test_template_round_trip() {
        let file = NamedTempFile::new().unwrap();
        create_template_at(file.path()).unwrap();
        let datum = parse_config_file(file.path()).unwrap();
        assert_eq!(datum.problem_name.as_deref(), Some("YourProblemName"));
        assert_eq!(
            SolverParams::from(&datum.solver_config),
            SolverParams::default()
        );
    }

    #[test]
    fn test_task_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            b"{\"problemName\": \"short run\", \"solverConfig\":{\"epsilon\": 0.1, \"maxIterations\": 25, \"maxResidual\": 1.0e-11, \"domain\": {\"min\": -1.0, \"max\": 1.0 }}}",
        )
        .unwrap();
        let mut task = BurgersBVPTask::new();
        let json = task.solve_from_file(file.path()).unwrap();
        assert_eq!(task.problem_name.as_deref(), Some("short run"));
        assert_eq!(task.params.max_iterations, 25);
        let result = parse_result(&json).unwrap();
        assert_eq!(result.result.iterations, 25);
        assert!(result.result.residual > 1e-11);
    }

    #[test]
    fn test_missing_file() {
        let mut task = BurgersBVPTask::new();
        let res = task.parse_file(Path::new("definitely/not/here.json"));
        assert!(matches!(res, Err(BVPError::Io(_))));
    }
}
