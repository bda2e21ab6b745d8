//! `.poly` text codec.
//!
//! Format
//! - One point per line: `<polygon_index> <x> <y>`, whitespace separated.
//! - Lines without exactly three tokens are skipped.
//! - A new polygon starts when `polygon_index` equals the number of polygons
//!   completed so far; any other index appends to the current polygon.
//!
//! Ghost polygon
//! - The first data line (index 0) closes the still-empty buffer, so the reader
//!   yields a leading empty polygon. Callers strip it with [`drop_ghost`];
//!   nothing here validates that convention.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::geom::{Point, Polygon};

/// Reader/writer failures.
#[derive(Debug)]
pub enum PolyFileError {
    Io(io::Error),
    /// A token on a three-token line is not a valid index or finite coordinate.
    Parse { line: usize, token: String },
}

impl fmt::Display for PolyFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolyFileError::Io(e) => write!(f, "i/o error: {e}"),
            PolyFileError::Parse { line, token } => {
                write!(f, "line {line}: cannot parse '{token}' as a number")
            }
        }
    }
}

impl std::error::Error for PolyFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PolyFileError::Io(e) => Some(e),
            PolyFileError::Parse { .. } => None,
        }
    }
}

impl From<io::Error> for PolyFileError {
    fn from(e: io::Error) -> Self {
        PolyFileError::Io(e)
    }
}

/// Parse polygons from `.poly` text. The result keeps the leading ghost.
pub fn read_polygons<R: BufRead>(reader: R) -> Result<Vec<Polygon>, PolyFileError> {
    let mut polys: Vec<Polygon> = Vec::new();
    let mut current: Vec<Point> = Vec::new();
    let mut skipped = 0usize;
    for (k, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = k + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [index, x, y] = tokens[..] else {
            skipped += 1;
            continue;
        };
        let index: i64 = parse_token(index, lineno)?;
        if index == polys.len() as i64 {
            polys.push(Polygon::new(std::mem::take(&mut current)));
        }
        let x: f64 = parse_coord(x, lineno)?;
        let y: f64 = parse_coord(y, lineno)?;
        current.push(Point::new(x, y));
    }
    if !current.is_empty() {
        polys.push(Polygon::new(current));
    }
    tracing::debug!(polygons = polys.len(), skipped, "read .poly");
    Ok(polys)
}

/// Open and parse a `.poly` file.
pub fn load_polygons<P: AsRef<Path>>(path: P) -> Result<Vec<Polygon>, PolyFileError> {
    let file = File::open(path)?;
    read_polygons(BufReader::new(file))
}

/// Remove the leading ghost polygon produced by the reader.
pub fn drop_ghost(mut polys: Vec<Polygon>) -> Vec<Polygon> {
    if polys.is_empty() {
        return polys;
    }
    let ghost = polys.remove(0);
    if !ghost.is_empty() {
        tracing::warn!(points = ghost.len(), "dropped a non-empty leading polygon");
    }
    polys
}

/// Write polygons as `<index> <x> <y> ` lines, indices following slice order.
pub fn write_polygons<W: Write>(mut w: W, polys: &[Polygon]) -> io::Result<()> {
    for (i, poly) in polys.iter().enumerate() {
        for p in &poly.pts {
            writeln!(w, "{i} {} {} ", p.x, p.y)?;
        }
    }
    w.flush()
}

/// Create (or truncate) `path` and write `polys` into it.
pub fn save_polygons<P: AsRef<Path>>(path: P, polys: &[Polygon]) -> io::Result<()> {
    let file = File::create(path)?;
    write_polygons(BufWriter::new(file), polys)
}

fn parse_token<T: std::str::FromStr>(token: &str, line: usize) -> Result<T, PolyFileError> {
    token.parse().map_err(|_| PolyFileError::Parse {
        line,
        token: token.to_string(),
    })
}

fn parse_coord(token: &str, line: usize) -> Result<f64, PolyFileError> {
    let v: f64 = parse_token(token, line)?;
    if !v.is_finite() {
        return Err(PolyFileError::Parse {
            line,
            token: token.to_string(),
        });
    }
    Ok(v)
}
