//! A module which provides the logic to collect metrics about algorithm execution and simple logging.

#[cfg(test)]
#[path = "../../tests/unit/solver/telemetry_test.rs"]
mod telemetry_test;

use crate::utils::{Float, InfoLogger, Timer};

/// Specifies a telemetry mode.
#[derive(Clone, Default)]
pub enum TelemetryMode {
    /// No telemetry at all.
    #[default]
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often best individual is logged.
        log_best: usize,
    },
}

/// Encapsulates different measurements regarding algorithm evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct TelemetryMetrics {
    /// Algorithm duration in milliseconds.
    pub duration: usize,
    /// Total amount of iterations (generations or passes).
    pub iterations: usize,
    /// Amount of iterations which improved the best known distance.
    pub improvements: usize,
    /// The best known distance.
    pub best: Option<Float>,
}

/// Tracks iterative search progress and reports it according to [TelemetryMode].
pub struct Telemetry {
    name: String,
    mode: TelemetryMode,
    timer: Timer,
    iterations: usize,
    improvements: usize,
    best: Option<Float>,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry` for an algorithm with given name.
    pub fn new(name: &str, mode: TelemetryMode) -> Self {
        Self { name: name.to_string(), mode, timer: Timer::start(), iterations: 0, improvements: 0, best: None }
    }

    /// Reports that an iteration has finished with given best distance.
    pub fn on_iteration(&mut self, best: Float) {
        let is_improvement = self.best.map_or(true, |current| best < current);

        if is_improvement {
            self.improvements += 1;
            self.best = Some(best);
        }

        if let TelemetryMode::OnlyLogging { logger, log_best } = &self.mode {
            if *log_best > 0 && self.iterations % *log_best == 0 {
                (logger)(&format!(
                    "[{}] iteration {}: best distance {best:.3}{}, elapsed {:.3}s",
                    self.name,
                    self.iterations,
                    if is_improvement { " (improved)" } else { "" },
                    self.timer.elapsed_secs_as_float()
                ));
            }
        }

        self.iterations += 1;
    }

    /// Finishes tracking, logs summary and returns collected metrics.
    pub fn finish(self) -> TelemetryMetrics {
        let metrics = TelemetryMetrics {
            duration: self.timer.elapsed_millis() as usize,
            iterations: self.iterations,
            improvements: self.improvements,
            best: self.best,
        };

        if let TelemetryMode::OnlyLogging { logger, .. } = &self.mode {
            (logger)(&format!(
                "[{}] finished: {} iterations, {} improvements, best distance {}, took {}ms",
                self.name,
                metrics.iterations,
                metrics.improvements,
                metrics.best.map_or_else(|| "n/a".to_string(), |best| format!("{best:.3}")),
                metrics.duration
            ));
        }

        metrics
    }
}
