//! Fixed-column PDB writers for water placements.
//!
//! Two entry points cover the two shapes hydration-site results come in:
//! a flat list of coordinates (clustered water positions) and a selection of
//! (frame, atom) picks against per-frame coordinate sets (waters pulled out
//! of a trajectory). Each water is either a lone oxygen or a full O/H1/H2
//! residue taken from three consecutive coordinates.
//!
//! A `TER` chain-break record is emitted every 9999 residues, after which the
//! atom serial restarts at 1. The two entry points keep their historical
//! numbering conventions: the flat-coordinate writer numbers from 0 and
//! prepends a `REMARK`, the selection writer numbers from 1 with no header.
//! Downstream tooling keys on both.

use nalgebra::Point3;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

const RESIDUE_NAME: &str = "WAT";
const CHAIN_ID: &str = "A";
const CHAIN_BREAK_RESIDUE: usize = 9999;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(
        "coordinate list ends mid-water at index {index}; full water residues need O, H1, H2 triples"
    )]
    TruncatedWater { index: usize },
    #[error("selection (frame {frame}, atom {atom}) is out of bounds")]
    SelectionOutOfBounds { frame: usize, atom: usize },
}

fn atom_record(serial: usize, name: &str, res_seq: usize, pos: &Point3<f64>, element: &str) -> String {
    format!(
        "{:<6}{:>5}  {:<3}{:<1}{:>3} {:1}{:>4}{:1}   {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6.2}{:>12}",
        "ATOM", serial, name, " ", RESIDUE_NAME, CHAIN_ID, res_seq, " ", pos.x, pos.y, pos.z, 0.0,
        0.0, element
    )
}

fn ter_record(serial: usize, res_seq: usize) -> String {
    format!(
        "{:<3}   {:>5}      {:>3} {:1}{:>4} ",
        "TER", serial, RESIDUE_NAME, CHAIN_ID, res_seq
    )
}

/// Writes waters from a flat coordinate list.
///
/// With `full_water` set, coordinates are consumed in O, H1, H2 triples;
/// otherwise every coordinate is an oxygen. Atom serials and residue numbers
/// start at 0.
pub fn write_water_pdb_to(
    coords: &[Point3<f64>],
    full_water: bool,
    writer: &mut impl Write,
) -> Result<(), PdbError> {
    writeln!(writer, "REMARK Initial number of clusters: N/A")?;

    let mut at = 0usize;
    let mut res = 0usize;
    let mut i = 0usize;
    while i < coords.len() {
        let res_seq = res % 10000;
        writeln!(writer, "{}", atom_record(at, "O", res_seq, &coords[i], "O"))?;
        i += 1;
        if full_water {
            let h1 = coords.get(i).ok_or(PdbError::TruncatedWater { index: i })?;
            let h2 = coords
                .get(i + 1)
                .ok_or(PdbError::TruncatedWater { index: i + 1 })?;
            writeln!(writer, "{}", atom_record(at + 1, "H1", res_seq, h1, "H"))?;
            writeln!(writer, "{}", atom_record(at + 2, "H2", res_seq, h2, "H"))?;
            at += 3;
            i += 2;
        } else {
            at += 1;
        }
        res += 1;
        if res_seq == CHAIN_BREAK_RESIDUE {
            writeln!(writer, "{}", ter_record(at, res_seq))?;
            at = 1;
        }
    }
    Ok(())
}

/// Writes waters from a flat coordinate list to `<stem>.pdb`.
pub fn write_water_pdb<P: AsRef<Path>>(
    coords: &[Point3<f64>],
    full_water: bool,
    stem: P,
) -> Result<PathBuf, PdbError> {
    let path = with_pdb_extension(stem.as_ref());
    let mut writer = BufWriter::new(File::create(&path)?);
    write_water_pdb_to(coords, full_water, &mut writer)?;
    writer.flush()?;
    Ok(path)
}

/// Writes waters picked as (frame, atom) pairs out of per-frame coordinate
/// sets.
///
/// With `full_water` set, the two atoms following each picked oxygen within
/// its frame are taken as H1 and H2. Atom serials and residue numbers start
/// at 1.
pub fn write_water_selection_to(
    frames: &[Vec<Point3<f64>>],
    picks: &[(usize, usize)],
    full_water: bool,
    writer: &mut impl Write,
) -> Result<(), PdbError> {
    let mut at = 1usize;
    let mut res = 1usize;
    for &(frame, atom) in picks {
        let res_seq = res % 10000;
        let coords = frames
            .get(frame)
            .ok_or(PdbError::SelectionOutOfBounds { frame, atom })?;
        let oxygen = coords
            .get(atom)
            .ok_or(PdbError::SelectionOutOfBounds { frame, atom })?;
        writeln!(writer, "{}", atom_record(at, "O", res_seq, oxygen, "O"))?;
        if full_water {
            let h1 = coords
                .get(atom + 1)
                .ok_or(PdbError::SelectionOutOfBounds { frame, atom: atom + 1 })?;
            let h2 = coords
                .get(atom + 2)
                .ok_or(PdbError::SelectionOutOfBounds { frame, atom: atom + 2 })?;
            writeln!(writer, "{}", atom_record(at + 1, "H1", res_seq, h1, "H"))?;
            writeln!(writer, "{}", atom_record(at + 2, "H2", res_seq, h2, "H"))?;
            at += 3;
        } else {
            at += 1;
        }
        res += 1;
        if res_seq == CHAIN_BREAK_RESIDUE {
            writeln!(writer, "{}", ter_record(at, res_seq))?;
            at = 1;
        }
    }
    Ok(())
}

/// Writes a water selection to `<stem>.pdb`.
pub fn write_water_selection<P: AsRef<Path>>(
    frames: &[Vec<Point3<f64>>],
    picks: &[(usize, usize)],
    full_water: bool,
    stem: P,
) -> Result<PathBuf, PdbError> {
    let path = with_pdb_extension(stem.as_ref());
    let mut writer = BufWriter::new(File::create(&path)?);
    write_water_selection_to(frames, picks, full_water, &mut writer)?;
    writer.flush()?;
    Ok(path)
}

fn with_pdb_extension(stem: &Path) -> PathBuf {
    let mut os = stem.as_os_str().to_owned();
    os.push(".pdb");
    PathBuf::from(os)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(buf: &[u8]) -> Vec<String> {
        String::from_utf8(buf.to_vec())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn oxygen_only_records_are_fixed_width() {
        let coords = vec![Point3::new(1.0, 2.0, 3.0), Point3::new(-4.25, 0.5, 12.125)];
        let mut buf = Vec::new();
        write_water_pdb_to(&coords, false, &mut buf).unwrap();
        let lines = lines(&buf);
        assert_eq!(lines[0], "REMARK Initial number of clusters: N/A");
        assert_eq!(
            lines[1],
            "ATOM      0  O   WAT A   0       1.000   2.000   3.000  0.00  0.00           O"
        );
        assert_eq!(
            lines[2],
            "ATOM      1  O   WAT A   1      -4.250   0.500  12.125  0.00  0.00           O"
        );
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn full_water_consumes_coordinate_triples() {
        let coords = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.96, 0.0, 0.0),
            Point3::new(-0.24, 0.93, 0.0),
            Point3::new(5.0, 5.0, 5.0),
            Point3::new(5.96, 5.0, 5.0),
            Point3::new(4.76, 5.93, 5.0),
        ];
        let mut buf = Vec::new();
        write_water_pdb_to(&coords, true, &mut buf).unwrap();
        let lines = lines(&buf);
        // REMARK + two residues of three atoms each.
        assert_eq!(lines.len(), 7);
        assert!(lines[1].starts_with("ATOM      0  O   WAT A   0"));
        assert!(lines[2].starts_with("ATOM      1  H1  WAT A   0"));
        assert!(lines[3].starts_with("ATOM      2  H2  WAT A   0"));
        assert!(lines[4].starts_with("ATOM      3  O   WAT A   1"));
        assert!(lines[2].ends_with("           H"));
    }

    #[test]
    fn truncated_full_water_is_an_error() {
        let coords = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        let mut buf = Vec::new();
        let err = write_water_pdb_to(&coords, true, &mut buf).unwrap_err();
        assert!(matches!(err, PdbError::TruncatedWater { index: 2 }));
    }

    #[test]
    fn chain_break_every_9999_residues() {
        let coords: Vec<Point3<f64>> = (0..10_001)
            .map(|i| Point3::new(i as f64, 0.0, 0.0))
            .collect();
        let mut buf = Vec::new();
        write_water_pdb_to(&coords, false, &mut buf).unwrap();
        let lines = lines(&buf);
        // REMARK + 10001 atoms + one TER.
        assert_eq!(lines.len(), 10_003);
        assert_eq!(lines[10_001], "TER   10000      WAT A9999 ");
        // Serial restarts after the chain break.
        assert!(lines[10_002].starts_with("ATOM      1  O   WAT A   0"));
    }

    #[test]
    fn selection_numbers_from_one_without_header() {
        let frames = vec![
            vec![Point3::new(1.0, 1.0, 1.0), Point3::new(2.0, 2.0, 2.0)],
            vec![Point3::new(9.0, 9.0, 9.0)],
        ];
        let picks = vec![(1, 0), (0, 1)];
        let mut buf = Vec::new();
        write_water_selection_to(&frames, &picks, false, &mut buf).unwrap();
        let lines = lines(&buf);
        assert_eq!(
            lines[0],
            "ATOM      1  O   WAT A   1       9.000   9.000   9.000  0.00  0.00           O"
        );
        assert!(lines[1].starts_with("ATOM      2  O   WAT A   2       2.000"));
    }

    #[test]
    fn selection_out_of_bounds_is_an_error() {
        let frames = vec![vec![Point3::new(0.0, 0.0, 0.0)]];
        let mut buf = Vec::new();
        let err = write_water_selection_to(&frames, &[(0, 5)], false, &mut buf).unwrap_err();
        assert!(matches!(
            err,
            PdbError::SelectionOutOfBounds { frame: 0, atom: 5 }
        ));
        let err = write_water_selection_to(&frames, &[(0, 0)], true, &mut buf).unwrap_err();
        assert!(matches!(
            err,
            PdbError::SelectionOutOfBounds { frame: 0, atom: 1 }
        ));
    }

    #[test]
    fn path_variant_appends_pdb_extension() {
        let dir = tempfile::tempdir().unwrap();
        let stem = dir.path().join("hydration_sites");
        let coords = vec![Point3::new(0.0, 0.0, 0.0)];
        let written = write_water_pdb(&coords, false, &stem).unwrap();
        assert_eq!(written, dir.path().join("hydration_sites.pdb"));
        assert!(written.is_file());
    }
}
