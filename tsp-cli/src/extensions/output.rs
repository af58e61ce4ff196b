//! Contains logic to present solver results.

#[cfg(test)]
#[path = "../../tests/unit/extensions/output_test.rs"]
mod output_test;

use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Write};
use tsp_core::prelude::*;

/// A solved route representation.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOutput {
    /// Algorithm name.
    pub algorithm: String,
    /// Total tour length.
    pub distance: f64,
    /// Time spent by the algorithm.
    pub calculation_time_ms: u64,
    /// Visited points in tour order.
    pub route: Vec<RoutePointOutput>,
}

/// A visited point.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RoutePointOutput {
    /// Point index in the graph.
    pub index: usize,
    /// Point name.
    pub name: String,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl RouteOutput {
    /// Creates a new instance of `RouteOutput`.
    pub fn new(algorithm: &str, graph: &Graph, route: &Route) -> Result<Self, String> {
        let distance = route.total_distance(graph).map_err(|err| err.to_string())?;
        let points = route
            .sequence()
            .iter()
            .map(|&index| {
                graph.get_point(index).map(|point| RoutePointOutput {
                    index,
                    name: point.name().to_string(),
                    x: point.x(),
                    y: point.y(),
                })
            })
            .collect::<TspResult<Vec<_>>>()
            .map_err(|err| err.to_string())?;

        Ok(Self {
            algorithm: algorithm.to_string(),
            distance,
            calculation_time_ms: route.calculation_time().map_or(0, |duration| duration.as_millis() as u64),
            route: points,
        })
    }
}

/// A single algorithm result in comparison.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonEntry {
    /// Algorithm name.
    pub algorithm: String,
    /// Total tour length.
    pub distance: f64,
    /// Time spent by the algorithm.
    pub calculation_time_ms: u64,
}

/// Writes route as pretty json.
pub fn write_json_output<W: Write>(writer: BufWriter<W>, output: &RouteOutput) -> Result<(), String> {
    let mut writer = writer;

    serde_json::to_writer_pretty(&mut writer, output).map_err(|err| format!("cannot write json: '{err}'"))?;
    writeln!(writer).map_err(|err| err.to_string())?;

    writer.flush().map_err(|err| err.to_string())
}

/// Writes route as human readable text.
pub fn write_text_output<W: Write>(writer: BufWriter<W>, output: &RouteOutput) -> Result<(), String> {
    let mut writer = writer;

    let names = output
        .route
        .iter()
        .chain(output.route.first().filter(|_| output.route.len() > 1))
        .map(|point| if point.name.is_empty() { point.index.to_string() } else { point.name.clone() })
        .collect::<Vec<_>>();

    let write_all = |writer: &mut BufWriter<W>| -> std::io::Result<()> {
        writeln!(writer, "Algorithm: {}", output.algorithm)?;
        writeln!(writer, "Points: {}", output.route.len())?;
        writeln!(writer, "Distance: {:.3}", output.distance)?;
        writeln!(writer, "Time: {}ms", output.calculation_time_ms)?;
        writeln!(writer, "Route: {}", names.join(" -> "))?;

        writer.flush()
    };

    write_all(&mut writer).map_err(|err| err.to_string())
}

/// Writes comparison table: distances, difference to the best distance and timings.
pub fn write_comparison<W: Write>(writer: BufWriter<W>, entries: &[ComparisonEntry]) -> Result<(), String> {
    let mut writer = writer;

    let best = entries.iter().min_by(|a, b| compare_floats(a.distance, b.distance));

    let write_all = |writer: &mut BufWriter<W>| -> std::io::Result<()> {
        writeln!(writer, "{:<20} {:>14} {:>10} {:>10}", "Algorithm", "Distance", "Diff", "Time")?;

        for entry in entries {
            let diff = best.map_or(0., |best| get_relative_diff(entry.distance, best.distance));
            writeln!(
                writer,
                "{:<20} {:>14.3} {:>9.2}% {:>8}ms",
                entry.algorithm, entry.distance, diff, entry.calculation_time_ms
            )?;
        }

        if let Some(best) = best {
            writeln!(writer, "Best: {} ({:.3})", best.algorithm, best.distance)?;
        }

        writer.flush()
    };

    write_all(&mut writer).map_err(|err| err.to_string())
}

fn get_relative_diff(distance: f64, best: f64) -> f64 {
    if best > 0. { (distance - best) / best * 100. } else { 0. }
}
