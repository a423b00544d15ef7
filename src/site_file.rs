/// Site-list input files
///
/// The first integer is the grid size n; every following pair of integers is
/// a 1-based `row col` site to open, in order. Integers are whitespace
/// separated and may be spread over lines arbitrarily. Blank lines and lines
/// starting with '#' are skipped.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{PercolationError, Result};
use crate::percolation::Percolation;

/// A grid size plus the sites to open on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteList {
    pub size: usize,
    pub sites: Vec<(usize, usize)>,
}

impl SiteList {
    /// Build a grid and open every listed site in order
    pub fn build(&self) -> Result<Percolation> {
        let mut grid = Percolation::new(self.size)?;
        for &(row, col) in &self.sites {
            grid.open(row, col)?;
        }
        Ok(grid)
    }
}

/// Read a site list from a file on disk
pub fn read_sites<P: AsRef<Path>>(path: P) -> Result<SiteList> {
    let file = File::open(path)?;
    parse_sites(BufReader::new(file))
}

/// Parse a site list from any buffered reader
pub fn parse_sites<R: BufRead>(reader: R) -> Result<SiteList> {
    let mut values: Vec<(usize, usize)> = Vec::new();

    for (line_idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = line_idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        for token in trimmed.split_whitespace() {
            let value = token.parse::<usize>().map_err(|e| PercolationError::Parse {
                line: line_no,
                message: format!("'{token}' is not a non-negative integer: {e}"),
            })?;
            values.push((line_no, value));
        }
    }

    let mut values = values.into_iter();
    let (_, size) = values.next().ok_or_else(|| PercolationError::Parse {
        line: 1,
        message: "missing grid size".to_string(),
    })?;

    let mut sites = Vec::new();
    while let Some((line, row)) = values.next() {
        let (_, col) = values.next().ok_or_else(|| PercolationError::Parse {
            line,
            message: format!("row {row} has no matching column"),
        })?;
        sites.push((row, col));
    }

    Ok(SiteList { size, sites })
}
