//! Solver configuration.

#[cfg(test)]
#[path = "../../tests/unit/extensions/config_test.rs"]
mod config_test;

use serde::Deserialize;
use std::collections::HashMap;
use std::io::{BufReader, Read};
use std::sync::Arc;
use tsp_core::prelude::*;

/// An algorithm used when none is specified.
pub const DEFAULT_ALGORITHM: SolverKind = SolverKind::TwoOpt;

/// How often the best known distance is logged when logging is enabled and config has no value.
pub const DEFAULT_LOG_BEST: usize = 100;

/// A solver configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Specifies algorithm name, e.g. `genetic`.
    pub algorithm: Option<String>,
    /// Specifies random seed.
    pub seed: Option<u64>,
    /// Specifies algorithm parameters.
    pub parameters: Option<HashMap<String, f64>>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// A telemetry configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryConfig {
    /// Specifies how often the best known distance is logged (in iterations).
    pub log_best: Option<usize>,
}

impl Config {
    /// Combines two configs: values from `overrides` take precedence, parameters are merged.
    pub fn merge(self, overrides: Config) -> Config {
        let parameters = match (self.parameters, overrides.parameters) {
            (Some(mut base), Some(overrides)) => {
                base.extend(overrides);
                Some(base)
            }
            (base, overrides) => overrides.or(base),
        };

        Config {
            algorithm: overrides.algorithm.or(self.algorithm),
            seed: overrides.seed.or(self.seed),
            parameters,
            telemetry: overrides.telemetry.or(self.telemetry),
        }
    }

    /// Returns an algorithm kind specified by the config or the default one.
    pub fn get_solver_kind(&self) -> Result<SolverKind, String> {
        self.algorithm
            .as_deref()
            .map_or(Ok(DEFAULT_ALGORITHM), |algorithm| algorithm.parse::<SolverKind>().map_err(|err| err.to_string()))
    }
}

/// Reads config from a json reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}

/// Creates a solver from config. When a logger is passed, solvers report their progress with it.
pub fn create_solver_from_config(config: &Config, logger: Option<InfoLogger>) -> Result<Box<dyn Solver>, String> {
    let kind = config.get_solver_kind()?;

    let environment = config.seed.map(Environment::new_with_seed).unwrap_or_default();
    let environment = Arc::new(match &logger {
        Some(logger) => environment.with_logger(logger.clone()),
        None => environment,
    });

    let telemetry_mode = match logger {
        Some(logger) => TelemetryMode::OnlyLogging {
            logger,
            log_best: config.telemetry.as_ref().and_then(|telemetry| telemetry.log_best).unwrap_or(DEFAULT_LOG_BEST),
        },
        None => TelemetryMode::None,
    };

    let mut solver: Box<dyn Solver> = match kind {
        SolverKind::TwoOpt => Box::new(TwoOpt::new(environment).with_telemetry(telemetry_mode)),
        SolverKind::Genetic => Box::new(Genetic::new(environment).with_telemetry(telemetry_mode)),
        kind => create_solver(kind, environment),
    };

    if let Some(parameters) = config.parameters.as_ref() {
        solver.set_parameters(parameters).map_err(|err| format!("cannot apply parameters: '{err}'"))?;
    }

    Ok(solver)
}

/// Parses a `key=value` parameter definition.
pub fn parse_parameter(definition: &str) -> Result<(String, f64), String> {
    let (key, value) =
        definition.split_once('=').ok_or_else(|| format!("expected 'key=value' parameter, got: '{definition}'"))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty parameter name in: '{definition}'"));
    }

    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("cannot parse value of parameter '{key}': '{err}'"))?;

    Ok((key.to_string(), value))
}
