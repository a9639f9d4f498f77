//! Loaders for the flat whitespace-delimited numeric files the upstream
//! pipeline emits: one value per line (energy samples, neighbor counts), two
//! columns (theta, r pairs), and three columns (x, y, z coordinates).
//!
//! Blank lines and `#`-prefixed comment lines are skipped. Anything else must
//! parse, with the offending line reported in the error.

use nalgebra::Point3;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid number '{value}' on line {line} of '{path}'", path = path.display())]
    InvalidNumber {
        path: PathBuf,
        line: usize,
        value: String,
    },
    #[error(
        "expected {expected} columns on line {line} of '{path}', found {found}",
        path = path.display()
    )]
    ColumnCount {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("no data rows in '{path}'", path = path.display())]
    Empty { path: PathBuf },
}

fn data_lines(path: &Path) -> Result<impl Iterator<Item = Result<(usize, String), LoadError>>, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let owned = path.to_path_buf();
    Ok(BufReader::new(file)
        .lines()
        .enumerate()
        .map(move |(i, res)| {
            res.map(|l| (i + 1, l)).map_err(|e| LoadError::Io {
                path: owned.clone(),
                source: e,
            })
        })
        .filter(|res| match res {
            Ok((_, l)) => {
                let t = l.trim();
                !t.is_empty() && !t.starts_with('#')
            }
            Err(_) => true,
        }))
}

fn parse_row(path: &Path, line: usize, text: &str, expected: usize) -> Result<Vec<f64>, LoadError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != expected {
        return Err(LoadError::ColumnCount {
            path: path.to_path_buf(),
            line,
            expected,
            found: tokens.len(),
        });
    }
    tokens
        .iter()
        .map(|t| {
            t.parse::<f64>().map_err(|_| LoadError::InvalidNumber {
                path: path.to_path_buf(),
                line,
                value: (*t).to_string(),
            })
        })
        .collect()
}

/// Loads a one-value-per-line file (e.g. `NNNEwwnbr.txt`, `NNNNnbrs.txt`).
pub fn load_column<P: AsRef<Path>>(path: P) -> Result<Vec<f64>, LoadError> {
    let path = path.as_ref();
    let mut values = Vec::new();
    for entry in data_lines(path)? {
        let (line, text) = entry?;
        values.push(parse_row(path, line, &text, 1)?[0]);
    }
    if values.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(values)
}

/// Loads a two-column file of (theta, r) samples (`NNNr_theta.txt`).
pub fn load_pairs<P: AsRef<Path>>(path: P) -> Result<Vec<(f64, f64)>, LoadError> {
    let path = path.as_ref();
    let mut values = Vec::new();
    for entry in data_lines(path)? {
        let (line, text) = entry?;
        let row = parse_row(path, line, &text, 2)?;
        values.push((row[0], row[1]));
    }
    if values.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(values)
}

/// Loads a three-column file of x y z coordinates, one point per line.
pub fn load_xyz<P: AsRef<Path>>(path: P) -> Result<Vec<Point3<f64>>, LoadError> {
    let path = path.as_ref();
    let mut points = Vec::new();
    for entry in data_lines(path)? {
        let (line, text) = entry?;
        let row = parse_row(path, line, &text, 3)?;
        points.push(Point3::new(row[0], row[1], row[2]));
    }
    if points.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(points)
}
