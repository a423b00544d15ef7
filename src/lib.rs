// Library exports for percolation
pub mod error;
pub mod percolation;
pub mod site_file;
pub mod stats;
pub mod union_find;

pub use error::{PercolationError, Result};
pub use percolation::{Percolation, Site};
pub use site_file::{parse_sites, read_sites, SiteList};
pub use stats::{run_trial, PercolationStats, StatsConfig};
pub use union_find::UnionFind;
