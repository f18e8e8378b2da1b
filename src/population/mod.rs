//! Batch storage for population-style callers.
//!
//! An owned, bounds-checked matrix of candidate vectors indexed by
//! (row, column). Rows are solution vectors; randomization draws row-major
//! so the consumed stream order is well defined.

use crate::error::{Result, SearchError};
use crate::problem::Benchmark;
use crate::rng::Mt19937;

/// A fixed-size batch of candidate solution vectors.
///
/// # Examples
///
/// ```
/// use stochbench::population::Population;
/// use stochbench::problem::Benchmark;
/// use stochbench::rng::Mt19937;
///
/// let mut rng = Mt19937::seeded(42);
/// let mut pop = Population::new(20, 5).unwrap();
/// pop.randomize_default(&mut rng, Benchmark::Rastrigin);
///
/// let mut fitness = vec![0.0; 20];
/// pop.evaluate(Benchmark::Rastrigin, &mut fitness).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Population {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Population {
    /// Allocates a `rows x cols` population, zero-initialized.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(SearchError::InvalidArgument(format!(
                "population shape must be positive, got {rows}x{cols}"
            )));
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(SearchError::Allocation)?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| SearchError::Allocation)?;
        data.resize(len, 0.0);

        Ok(Self { data, rows, cols })
    }

    /// Number of individuals.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Dimension of each individual.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// One candidate vector.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[f64] {
        assert!(row < self.rows, "row {row} out of bounds ({})", self.rows);
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Redraws every component uniformly in `[lower, upper)`, row-major.
    pub fn randomize(&mut self, rng: &mut Mt19937, lower: f64, upper: f64) {
        rng.fill_uniform(&mut self.data, lower, upper);
    }

    /// Redraws every component within the benchmark's recommended domain.
    pub fn randomize_default(&mut self, rng: &mut Mt19937, benchmark: Benchmark) {
        let (lower, upper) = benchmark.recommended_range();
        self.randomize(rng, lower, upper);
    }

    /// Evaluates every row, writing one fitness per individual.
    pub fn evaluate(&self, benchmark: Benchmark, fitness: &mut [f64]) -> Result<()> {
        if fitness.len() != self.rows {
            return Err(SearchError::InvalidArgument(format!(
                "fitness buffer holds {} values for {} rows",
                fitness.len(),
                self.rows
            )));
        }
        for (row, slot) in fitness.iter_mut().enumerate() {
            *slot = benchmark.evaluate(self.row(row));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_shape() {
        assert!(matches!(
            Population::new(0, 5),
            Err(SearchError::InvalidArgument(_))
        ));
        assert!(matches!(
            Population::new(5, 0),
            Err(SearchError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_row_slices_are_disjoint_vectors() {
        let mut rng = Mt19937::seeded(1);
        let mut pop = Population::new(4, 3).unwrap();
        pop.randomize(&mut rng, -1.0, 1.0);

        assert_eq!(pop.row(0).len(), 3);
        assert_ne!(pop.row(0), pop.row(1));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_row_out_of_bounds_panics() {
        let pop = Population::new(2, 2).unwrap();
        let _ = pop.row(2);
    }

    #[test]
    fn test_randomize_row_major_draw_order() {
        let mut a = Mt19937::seeded(9);
        let mut b = Mt19937::seeded(9);

        let mut pop = Population::new(3, 2).unwrap();
        pop.randomize(&mut a, 0.0, 10.0);

        let mut flat = vec![0.0; 6];
        b.fill_uniform(&mut flat, 0.0, 10.0);

        for row in 0..3 {
            assert_eq!(pop.row(row), &flat[row * 2..row * 2 + 2]);
        }
    }

    #[test]
    fn test_randomize_default_uses_recommended_range() {
        let mut rng = Mt19937::seeded(5);
        let mut pop = Population::new(50, 4).unwrap();
        pop.randomize_default(&mut rng, Benchmark::Rastrigin);

        let (lower, upper) = Benchmark::Rastrigin.recommended_range();
        for row in 0..pop.rows() {
            for &v in pop.row(row) {
                assert!(v >= lower && v < upper);
            }
        }
    }

    #[test]
    fn test_evaluate_checks_buffer_size() {
        let pop = Population::new(3, 2).unwrap();
        let mut short = vec![0.0; 2];
        assert!(matches!(
            pop.evaluate(Benchmark::DeJong1, &mut short),
            Err(SearchError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_evaluate_matches_direct_calls() {
        let mut rng = Mt19937::seeded(17);
        let mut pop = Population::new(5, 3).unwrap();
        pop.randomize(&mut rng, -5.0, 5.0);

        let mut fitness = vec![0.0; 5];
        pop.evaluate(Benchmark::Griewangk, &mut fitness).unwrap();

        for row in 0..5 {
            assert_eq!(fitness[row], Benchmark::Griewangk.evaluate(pop.row(row)));
        }
    }
}
