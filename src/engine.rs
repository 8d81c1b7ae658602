mod parallel;
mod sequential;
mod state;

pub use parallel::ParallelEngine;
pub use sequential::SequentialEngine;
pub(crate) use state::LifeState;

use crate::{CellSource, Grid, NiceInt, Result};

/// Steppable Game of Life simulation on a bounded grid.
///
/// Every implementation applies the same rule and produces identical generations;
/// they differ only in how the work of one step is scheduled.
pub trait Engine {
    /// Create an engine whose seed and current generation are copies of `grid`.
    fn from_grid(grid: Grid) -> Self
    where
        Self: Sized;

    /// Create an engine with `rows x columns` cells drawn from `source`.
    ///
    /// Fails with [`LifeError::InvalidDimension`](crate::LifeError::InvalidDimension)
    /// if either dimension is zero.
    fn random(rows: usize, columns: usize, source: &mut impl CellSource) -> Result<Self>
    where
        Self: Sized,
    {
        Ok(Self::from_grid(Grid::random(rows, columns, source)?))
    }

    /// Independent copy of the current generation.
    fn snapshot(&self) -> Grid;

    /// Number of steps taken since construction or the last restart.
    fn generation(&self) -> u64;

    /// Advance the field by one generation.
    ///
    /// On error the engine is left exactly as it was before the call.
    fn advance(&mut self) -> Result<()>;

    /// Restore the seed grid and reset the generation counter.
    fn restart(&mut self);

    /// Total number of alive cells in the current generation.
    fn population(&self) -> usize;

    /// Returns multiline string reporting engine stats.
    fn statistics(&self) -> String {
        format_statistics(self.generation(), self.population(), &self.snapshot())
    }
}

/// Stats lines shared by every engine.
pub(crate) fn format_statistics(generation: u64, population: usize, grid: &Grid) -> String {
    format!(
        "Generation: {}\nPopulation: {}\nGrid: {}x{}\n",
        NiceInt::from(generation),
        NiceInt::from_usize(population),
        grid.rows(),
        grid.columns(),
    )
}
