use super::{Engine, LifeState};
use crate::{rule, Grid, Result};

/// Single-threaded engine: one full scan of the field per generation.
pub struct SequentialEngine {
    state: LifeState,
}

impl Engine for SequentialEngine {
    fn from_grid(grid: Grid) -> Self {
        Self {
            state: LifeState::new(grid),
        }
    }

    fn snapshot(&self) -> Grid {
        self.state.current.clone()
    }

    fn generation(&self) -> u64 {
        self.state.generation
    }

    fn advance(&mut self) -> Result<()> {
        let LifeState { current, next, .. } = &mut self.state;
        rule::step_rows(current, 0..current.rows(), next.cells_mut());
        self.state.publish();
        log::debug!("generation {} computed sequentially", self.state.generation);
        Ok(())
    }

    fn restart(&mut self) {
        self.state.restart();
    }

    fn population(&self) -> usize {
        self.state.current.population()
    }
}
