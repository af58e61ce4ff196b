//! Plain text formats to persist graphs and routes.
//!
//! A points file keeps one point per line as `x y [name]`, a route file keeps one 0-based graph
//! index per line. Blank lines and lines starting with `#` are ignored by both readers.

use crate::utils::{TspError, TspResult};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read};
use std::path::Path;

mod points;
pub use self::points::*;

mod route;
pub use self::route::*;

const COMMENT_PREFIX: &str = "#";

/// Reads all meaningful lines together with their 1-based line numbers.
fn read_data_lines<R: Read>(reader: BufReader<R>) -> TspResult<Vec<(usize, String)>> {
    reader.lines().zip(1..).try_fold(Vec::new(), |mut lines, (line, line_number)| {
        let line = line.map_err(|err| TspError::file_io(format!("line {line_number}: {err}")))?;
        let trimmed = line.trim();

        if !trimmed.is_empty() && !trimmed.starts_with(COMMENT_PREFIX) {
            lines.push((line_number, trimmed.to_string()));
        }

        Ok(lines)
    })
}

fn open_file(path: &Path) -> TspResult<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|err| TspError::file_io(format!("cannot open file '{}': {err}", path.display())))
}

fn create_file(path: &Path) -> TspResult<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|err| TspError::file_io(format!("cannot create file '{}': {err}", path.display())))
}
