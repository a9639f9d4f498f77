//! Readers for the headered per-site summary tables produced by HSA and GIST
//! runs.
//!
//! The first line of a summary file is a whitespace-delimited header; every
//! following row starts with an integer site index and continues with numeric
//! descriptors. The two schemes share the file shape and differ only in column
//! meaning (see [`crate::core::fields`]), so both public readers delegate to
//! one parser.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Number of descriptor columns retained per site row. Tables may carry
/// trailing non-numeric bookkeeping columns beyond these; they are ignored.
pub const MAX_DESCRIPTORS: usize = 26;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("failed to read '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("summary file '{path}' has no header line", path = path.display())]
    MissingHeader { path: PathBuf },
    #[error("invalid site index '{value}' on line {line} of '{path}'", path = path.display())]
    InvalidIndex {
        path: PathBuf,
        line: usize,
        value: String,
    },
    #[error("invalid value '{value}' on line {line} of '{path}'", path = path.display())]
    InvalidValue {
        path: PathBuf,
        line: usize,
        value: String,
    },
    #[error("line {line} of '{path}' has no descriptor columns", path = path.display())]
    TooFewColumns { path: PathBuf, line: usize },
}

/// A parsed per-site summary table.
///
/// Rows are keyed by site index; each row holds up to [`MAX_DESCRIPTORS`]
/// descriptors in file column order (the site-index column itself excluded).
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTable {
    /// Column titles from the header line, in file order.
    pub columns: Vec<String>,
    /// Site index to descriptor row.
    pub sites: BTreeMap<usize, Vec<f64>>,
}

impl SummaryTable {
    /// Looks up one descriptor by site index and descriptor column
    /// (0 = first column after the site index).
    pub fn descriptor(&self, site: usize, column: usize) -> Option<f64> {
        self.sites.get(&site).and_then(|row| row.get(column)).copied()
    }
}

/// Reads an HSA per-site summary table.
pub fn read_hsa_summary<P: AsRef<Path>>(path: P) -> Result<SummaryTable, SummaryError> {
    read_summary(path.as_ref())
}

/// Reads a GIST per-site summary table.
pub fn read_gist_summary<P: AsRef<Path>>(path: P) -> Result<SummaryTable, SummaryError> {
    read_summary(path.as_ref())
}

fn read_summary(path: &Path) -> Result<SummaryTable, SummaryError> {
    let file = File::open(path).map_err(|e| SummaryError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut lines = BufReader::new(file).lines().enumerate();

    let header = loop {
        match lines.next() {
            Some((_, Ok(line))) if line.trim().is_empty() => continue,
            Some((_, Ok(line))) => break line,
            Some((_, Err(e))) => {
                return Err(SummaryError::Io {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
            None => {
                return Err(SummaryError::MissingHeader {
                    path: path.to_path_buf(),
                });
            }
        }
    };
    let columns: Vec<String> = header.split_whitespace().map(str::to_string).collect();

    let mut sites = BTreeMap::new();
    for (idx, line_res) in lines {
        let line_num = idx + 1;
        let line = line_res.map_err(|e| SummaryError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 2 {
            return Err(SummaryError::TooFewColumns {
                path: path.to_path_buf(),
                line: line_num,
            });
        }
        let site: usize = tokens[0].parse().map_err(|_| SummaryError::InvalidIndex {
            path: path.to_path_buf(),
            line: line_num,
            value: tokens[0].to_string(),
        })?;
        let row = tokens[1..]
            .iter()
            .take(MAX_DESCRIPTORS)
            .map(|t| {
                t.parse::<f64>().map_err(|_| SummaryError::InvalidValue {
                    path: path.to_path_buf(),
                    line: line_num,
                    value: (*t).to_string(),
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;
        // Last row wins on duplicate indices, matching upstream behavior.
        sites.insert(site, row);
    }

    Ok(SummaryTable { columns, sites })
}
