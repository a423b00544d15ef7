/// Percolation grid with backwash-free fullness tracking
///
/// The grid owns a union-find over its n² sites plus a single virtual top
/// element. There is no virtual bottom: fullness is propagated eagerly by an
/// explicit-stack flood fill whenever a newly opened site joins the top
/// component, and percolation latches the first time a bottom-row site fills.
use log::trace;
use std::fmt;

use crate::error::{PercolationError, Result};
use crate::union_find::UnionFind;

/// State of a single site. Only ever moves forward: `Blocked -> Open -> Full`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Site {
    #[default]
    Blocked,
    /// Open but not reached by liquid from the top row
    Open,
    /// Open and connected to the top row through open sites
    Full,
}

impl Site {
    pub fn is_open(self) -> bool {
        !matches!(self, Site::Blocked)
    }

    pub fn is_full(self) -> bool {
        matches!(self, Site::Full)
    }

    fn symbol(self) -> char {
        match self {
            Site::Blocked => '#',
            Site::Open => '.',
            Site::Full => '~',
        }
    }
}

/// An n-by-n percolation system. Rows and columns are 1-based.
#[derive(Debug, Clone)]
pub struct Percolation {
    size: usize,
    sites: Vec<Site>,
    opened: usize,
    percolates: bool,
    uf: UnionFind,
    virtual_top: usize,
}

impl Percolation {
    /// Create an n-by-n grid with every site blocked
    ///
    /// # Arguments
    /// * `size` - grid side length, must be at least 1
    ///
    /// # Returns
    /// The grid, or `InvalidArgument` if `size` is zero or n² + 1 overflows
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(PercolationError::InvalidArgument(
                "grid size n must be >= 1".to_string(),
            ));
        }
        let len = size
            .checked_mul(size)
            .filter(|len| *len < usize::MAX)
            .ok_or_else(|| {
                PercolationError::InvalidArgument(format!("grid size {size} is too large"))
            })?;

        Ok(Percolation {
            size,
            sites: vec![Site::Blocked; len],
            opened: 0,
            percolates: false,
            uf: UnionFind::new(len + 1),
            virtual_top: len,
        })
    }

    /// Grid side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Open the site at (row, col) if it is not open already
    ///
    /// The site is unioned with every open orthogonal neighbour, and with the
    /// virtual top when it sits in row 1. If that joins it to the top
    /// component, liquid is pushed through every open site it can now reach.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let index = self.index(row, col)?;
        if self.sites[index].is_open() {
            return Ok(());
        }

        self.sites[index] = Site::Open;
        self.opened += 1;

        if row == 1 {
            self.uf.union(index, self.virtual_top)?;
        }
        for neighbour in self.neighbours(index).into_iter().flatten() {
            if self.sites[neighbour].is_open() {
                self.uf.union(index, neighbour)?;
            }
        }

        if self.uf.connected(index, self.virtual_top)? {
            self.fill_from(index);
        }
        Ok(())
    }

    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        Ok(self.site(row, col)?.is_open())
    }

    pub fn is_full(&self, row: usize, col: usize) -> Result<bool> {
        Ok(self.site(row, col)?.is_full())
    }

    /// Current state of the site at (row, col)
    pub fn site(&self, row: usize, col: usize) -> Result<Site> {
        let index = self.index(row, col)?;
        Ok(self.sites[index])
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.opened
    }

    /// Whether some bottom-row site is full. Once true, stays true.
    pub fn percolates(&self) -> bool {
        self.percolates
    }

    /// Mark `start` and every open site reachable from it through open sites as full.
    /// Sites that are already full are never revisited.
    fn fill_from(&mut self, start: usize) {
        let bottom_row = self.size - 1;
        let mut stack = vec![start];
        let mut filled = 0usize;
        self.sites[start] = Site::Full;

        while let Some(index) = stack.pop() {
            filled += 1;
            if !self.percolates && index / self.size == bottom_row {
                self.percolates = true;
                trace!(
                    "grid {n}x{n} percolates after {} open sites",
                    self.opened,
                    n = self.size
                );
            }
            for neighbour in self.neighbours(index).into_iter().flatten() {
                if self.sites[neighbour] == Site::Open {
                    self.sites[neighbour] = Site::Full;
                    stack.push(neighbour);
                }
            }
        }

        trace!("flood fill from site {start} wetted {filled} sites");
    }

    /// Up, down, left and right neighbours of a site index; no wraparound
    fn neighbours(&self, index: usize) -> [Option<usize>; 4] {
        let n = self.size;
        let (row, col) = (index / n, index % n);
        [
            (row > 0).then(|| index - n),
            (row + 1 < n).then(|| index + n),
            (col > 0).then(|| index - 1),
            (col + 1 < n).then(|| index + 1),
        ]
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row < 1 || col < 1 || row > self.size || col > self.size {
            return Err(PercolationError::InvalidCoordinate {
                row,
                col,
                size: self.size,
            });
        }
        Ok((row - 1) * self.size + col - 1)
    }
}

/// One line per row: `#` blocked, `.` open, `~` full
impl fmt::Display for Percolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.sites.chunks(self.size) {
            for site in row {
                write!(f, "{}", site.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
