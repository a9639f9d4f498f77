//! Discovery of per-site data files by naming convention.
//!
//! Upstream runs drop one file per hydration site into a data directory,
//! named `NNN<suffix>` where `NNN` is the 3-digit zero-padded site index
//! (e.g. `007Ewwnbr.txt`). Discovery scans for a suffix, decodes the prefix,
//! and optionally restricts to a chosen set of site indices.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Suffix of per-site water-water neighbor interaction-energy sample files.
pub const ENBR_SUFFIX: &str = "Ewwnbr.txt";
/// Suffix of per-site neighbor-count files.
pub const NBRS_SUFFIX: &str = "Nnbrs.txt";
/// Suffix of per-site (theta, r) sample files.
pub const RTHETA_SUFFIX: &str = "r_theta.txt";

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("data directory not found: '{path}'", path = path.display())]
    DirectoryNotFound { path: PathBuf },
    #[error("failed to scan '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("file '{name}' matches suffix '{suffix}' but lacks a 3-digit site prefix")]
    BadSitePrefix { name: String, suffix: String },
}

/// One discovered per-site data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteFile {
    pub site: usize,
    pub path: PathBuf,
}

/// Builds the conventional file name for a site and suffix (`NNN<suffix>`).
pub fn site_file_name(site: usize, suffix: &str) -> String {
    format!("{site:03}{suffix}")
}

/// Scans `data_dir` for files ending in `suffix`, decoding the 3-digit site
/// prefix of each match. When `sites` is given, only those indices are kept.
/// Results are sorted by site index.
pub fn discover_site_files(
    data_dir: &Path,
    suffix: &str,
    sites: Option<&[usize]>,
) -> Result<Vec<SiteFile>, DiscoveryError> {
    if !data_dir.is_dir() {
        return Err(DiscoveryError::DirectoryNotFound {
            path: data_dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(data_dir).map_err(|e| DiscoveryError::Io {
        path: data_dir.to_path_buf(),
        source: e,
    })?;

    let mut found = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| DiscoveryError::Io {
            path: data_dir.to_path_buf(),
            source: e,
        })?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(suffix) {
            continue;
        }
        let site = parse_site_prefix(&name).ok_or_else(|| DiscoveryError::BadSitePrefix {
            name: name.clone(),
            suffix: suffix.to_string(),
        })?;
        if let Some(wanted) = sites {
            if !wanted.contains(&site) {
                continue;
            }
        }
        found.push(SiteFile {
            site,
            path: entry.path(),
        });
    }

    found.sort_by_key(|f| f.site);
    Ok(found)
}

fn parse_site_prefix(name: &str) -> Option<usize> {
    let prefix = name.get(0..3)?;
    if !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}
