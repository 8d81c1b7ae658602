use crate::Grid;

/// Seed, current generation and the write buffer of the next one.
///
/// `next` is scratch space: it is only ever exposed by swapping it into `current`.
pub(crate) struct LifeState {
    pub(crate) seed: Grid,
    pub(crate) current: Grid,
    pub(crate) next: Grid,
    pub(crate) generation: u64,
}

impl LifeState {
    pub(crate) fn new(grid: Grid) -> Self {
        Self {
            seed: grid.clone(),
            current: grid.clone(),
            next: grid,
            generation: 0,
        }
    }

    /// Makes the fully computed `next` buffer the current generation.
    pub(crate) fn publish(&mut self) {
        debug_assert!(self.next.same_shape(&self.current));
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }

    pub(crate) fn restart(&mut self) {
        self.current.clone_from(&self.seed);
        self.generation = 0;
    }
}
