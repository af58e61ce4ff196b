#[cfg(test)]
#[path = "../../tests/unit/format/points_test.rs"]
mod points_test;

use super::*;
use crate::models::{Graph, Point};
use crate::utils::Float;
use std::io::Write;

/// A trait to read a graph from points text format.
pub trait PointsReader {
    /// Reads points and adds them to a new graph. Duplicated points are rejected.
    fn read_points(self) -> TspResult<Graph>;
}

impl<R: Read> PointsReader for BufReader<R> {
    fn read_points(self) -> TspResult<Graph> {
        read_data_lines(self)?.into_iter().try_fold(Graph::new(), |mut graph, (line_number, line)| {
            graph.add_point(parse_point(line_number, line.as_str())?)?;
            Ok(graph)
        })
    }
}

impl PointsReader for String {
    fn read_points(self) -> TspResult<Graph> {
        BufReader::new(self.as_bytes()).read_points()
    }
}

/// A trait to write a graph in points text format.
pub trait PointsWriter<W: Write> {
    /// Writes all points, one per line.
    fn write_points(&self, writer: BufWriter<W>) -> TspResult<()>;
}

impl<W: Write> PointsWriter<W> for Graph {
    fn write_points(&self, writer: BufWriter<W>) -> TspResult<()> {
        let mut writer = writer;

        writeln!(writer, "# {} points: x y name", self.size())?;
        self.iter().try_for_each(|point| {
            if point.name().is_empty() {
                writeln!(writer, "{} {}", point.x(), point.y())
            } else {
                writeln!(writer, "{} {} {}", point.x(), point.y(), point.name())
            }
        })?;

        writer.flush()?;

        Ok(())
    }
}

impl Graph {
    /// Loads a graph from a points file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> TspResult<Graph> {
        open_file(path.as_ref())?.read_points()
    }

    /// Saves the graph to a points file, overwriting an existing one.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> TspResult<()> {
        self.write_points(create_file(path.as_ref())?)
    }
}

fn parse_point(line_number: usize, line: &str) -> TspResult<Point> {
    let mut tokens = line.split_whitespace();

    let x = parse_coordinate(line_number, "x", tokens.next())?;
    let y = parse_coordinate(line_number, "y", tokens.next())?;
    let name = tokens.collect::<Vec<_>>().join(" ");

    Point::try_new(x, y, name.as_str())
        .map_err(|err| TspError::file_io(format!("line {line_number}: {}", err.message())))
}

fn parse_coordinate(line_number: usize, axis: &str, token: Option<&str>) -> TspResult<Float> {
    let token = token.ok_or_else(|| TspError::file_io(format!("line {line_number}: missing {axis} coordinate")))?;

    token.parse::<Float>().map_err(|err| {
        TspError::file_io(format!("line {line_number}: cannot parse {axis} coordinate '{token}': {err}"))
    })
}
