/// Monte Carlo estimation of the percolation threshold
///
/// Each trial opens the sites of a fresh grid in a uniformly random order
/// until it percolates and records the fraction of open sites. The sample
/// mean, standard deviation and a 95% confidence interval are then taken
/// over all trials.
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;

use crate::error::{PercolationError, Result};
use crate::percolation::Percolation;

const CONFIDENCE_95: f64 = 1.96;

/// Parameters of one experiment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsConfig {
    pub size: usize,
    pub trials: usize,
    /// Seed for the site order; `None` draws from the thread-local generator
    pub seed: Option<u64>,
}

impl StatsConfig {
    pub fn new(size: usize, trials: usize) -> Result<Self> {
        validate(size, trials)?;
        Ok(StatsConfig {
            size,
            trials,
            seed: None,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run every trial and aggregate the thresholds
    pub fn run(&self) -> Result<PercolationStats> {
        match self.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                PercolationStats::with_rng(self.size, self.trials, &mut rng)
            }
            None => PercolationStats::with_rng(self.size, self.trials, &mut rand::thread_rng()),
        }
    }
}

/// Sample statistics of the percolation threshold over independent trials
#[derive(Debug, Clone)]
pub struct PercolationStats {
    size: usize,
    thresholds: Vec<f64>,
    mean: f64,
    stddev: f64,
    confidence_lo: f64,
    confidence_hi: f64,
}

impl PercolationStats {
    /// Perform `trials` independent experiments on an n-by-n grid
    pub fn new(size: usize, trials: usize) -> Result<Self> {
        Self::with_rng(size, trials, &mut rand::thread_rng())
    }

    /// Same as [`PercolationStats::new`] with a caller-supplied random source
    pub fn with_rng<R: Rng + ?Sized>(size: usize, trials: usize, rng: &mut R) -> Result<Self> {
        validate(size, trials)?;

        let mut thresholds = Vec::with_capacity(trials);
        for trial in 0..trials {
            let threshold = run_trial(size, rng)?;
            debug!("trial {}/{trials}: threshold {threshold:.6}", trial + 1);
            thresholds.push(threshold);
        }

        let mean = sample_mean(&thresholds);
        let stddev = sample_stddev(&thresholds, mean);
        let delta = CONFIDENCE_95 * stddev / (trials as f64).sqrt();

        info!(
            "{size}x{size} grid, {trials} trials: mean threshold {mean:.6}, stddev {stddev:.6}"
        );

        Ok(PercolationStats {
            size,
            thresholds,
            mean,
            stddev,
            confidence_lo: mean - delta,
            confidence_hi: mean + delta,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// Per-trial fractions of open sites, in trial order
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Sample mean of percolation threshold
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation of percolation threshold; NaN for a single trial
    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    /// Low endpoint of 95% confidence interval
    pub fn confidence_lo(&self) -> f64 {
        self.confidence_lo
    }

    /// High endpoint of 95% confidence interval
    pub fn confidence_hi(&self) -> f64 {
        self.confidence_hi
    }
}

impl fmt::Display for PercolationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<23} = {:.6}", "mean", self.mean)?;
        writeln!(f, "{:<23} = {:.6}", "stddev", self.stddev)?;
        write!(
            f,
            "{:<23} = [{:.6}, {:.6}]",
            "95% confidence interval", self.confidence_lo, self.confidence_hi
        )
    }
}

/// Run one trial: open sites of a fresh n-by-n grid in random order until it
/// percolates.
///
/// # Returns
/// The fraction of sites open at the moment the grid first percolates
pub fn run_trial<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<f64> {
    let mut grid = Percolation::new(size)?;
    let total = size * size;

    // Shuffled order only ever draws unopened sites
    let mut order: Vec<usize> = (0..total).collect();
    order.shuffle(rng);

    for index in order {
        grid.open(index / size + 1, index % size + 1)?;
        if grid.percolates() {
            break;
        }
    }

    Ok(grid.number_of_open_sites() as f64 / total as f64)
}

fn validate(size: usize, trials: usize) -> Result<()> {
    if size < 1 || trials < 1 {
        return Err(PercolationError::InvalidArgument(format!(
            "size n and number of trials both must be >= 1 (got n={size}, trials={trials})"
        )));
    }
    Ok(())
}

fn sample_mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Uses the n-1 denominator, so a single value yields NaN
fn sample_stddev(values: &[f64], mean: f64) -> f64 {
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    let n = values.len() as f64;
    (sum_sq / (n - 1.0)).sqrt()
}
