#[cfg(test)]
#[path = "../../tests/unit/format/route_test.rs"]
mod route_test;

use super::*;
use crate::models::{Graph, Route};
use std::io::Write;

/// A trait to read a route from route text format.
pub trait RouteReader {
    /// Reads point indices, all of them must exist in the graph.
    fn read_route(self, graph: &Graph) -> TspResult<Route>;
}

impl<R: Read> RouteReader for BufReader<R> {
    fn read_route(self, graph: &Graph) -> TspResult<Route> {
        let sequence = read_data_lines(self)?
            .into_iter()
            .map(|(line_number, line)| {
                let index = line.parse::<usize>().map_err(|err| {
                    TspError::file_io(format!("line {line_number}: cannot parse point index '{line}': {err}"))
                })?;

                graph.check_index(index).map(|_| index)
            })
            .collect::<TspResult<Vec<_>>>()?;

        Ok(Route::from_sequence(sequence))
    }
}

impl RouteReader for String {
    fn read_route(self, graph: &Graph) -> TspResult<Route> {
        BufReader::new(self.as_bytes()).read_route(graph)
    }
}

/// A trait to write a route in route text format.
pub trait RouteWriter<W: Write> {
    /// Writes total distance as a comment followed by point indices, one per line.
    fn write_route(&self, graph: &Graph, writer: BufWriter<W>) -> TspResult<()>;
}

impl<W: Write> RouteWriter<W> for Route {
    fn write_route(&self, graph: &Graph, writer: BufWriter<W>) -> TspResult<()> {
        let mut writer = writer;

        writeln!(writer, "# distance: {}", self.total_distance(graph)?)?;
        self.sequence().iter().try_for_each(|index| writeln!(writer, "{index}"))?;

        writer.flush()?;

        Ok(())
    }
}

impl Route {
    /// Loads a route over given graph from a route file.
    pub fn load_from_file<P: AsRef<Path>>(path: P, graph: &Graph) -> TspResult<Route> {
        open_file(path.as_ref())?.read_route(graph)
    }

    /// Saves the route to a route file, overwriting an existing one.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P, graph: &Graph) -> TspResult<()> {
        self.write_route(graph, create_file(path.as_ref())?)
    }
}
