use super::{format_statistics, Engine, LifeState};
use crate::{config::get_config, rule, Grid, LifeError, Result};
use std::any::Any;
use std::thread;

/// Engine that splits every generation into row chunks computed on scoped worker threads.
///
/// Workers read the untouched current generation and write disjoint slices of the
/// next one, so the result is identical to [`SequentialEngine`](super::SequentialEngine)
/// for any number of chunks. Nothing is published until every worker has been joined.
pub struct ParallelEngine {
    state: LifeState,
    workers: usize,
    #[cfg(test)]
    pub(super) fault_in_chunk: Option<usize>,
}

impl ParallelEngine {
    /// Create an engine that always uses `workers` chunks (clamped to the number of rows).
    pub fn with_workers(grid: Grid, workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(LifeError::InvalidWorkerCount);
        }
        Ok(Self {
            workers: workers.min(grid.rows()),
            state: LifeState::new(grid),
            #[cfg(test)]
            fault_in_chunk: None,
        })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    fn panic_reason(payload: Box<dyn Any + Send>) -> String {
        if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "worker panicked".to_string()
        }
    }

    /// Fills `state.next` chunk by chunk. `state.current` is never written.
    fn compute_next(&mut self) -> Result<()> {
        #[cfg(test)]
        let fault_in_chunk = self.fault_in_chunk;

        let ranges = rule::partition(self.state.current.rows(), self.workers);
        let LifeState { current, next, .. } = &mut self.state;
        let (current, columns) = (&*current, current.columns());
        let mut rest = next.cells_mut();

        thread::scope(|s| {
            let mut fault = None;
            let mut handles = Vec::with_capacity(ranges.len());
            for (chunk, range) in ranges.iter().cloned().enumerate() {
                let (dst, tail) = std::mem::take(&mut rest).split_at_mut(range.len() * columns);
                rest = tail;
                let spawned = thread::Builder::new()
                    .name(format!("life-worker-{}", chunk))
                    .spawn_scoped(s, move || {
                        #[cfg(test)]
                        if fault_in_chunk == Some(chunk) {
                            panic!("injected fault in chunk {}", chunk);
                        }
                        log::trace!("chunk {}: rows {:?}", chunk, range);
                        rule::step_rows(current, range, dst);
                    });
                match spawned {
                    Ok(handle) => handles.push((chunk, handle)),
                    Err(err) => {
                        fault = Some(LifeError::WorkerFault {
                            chunk,
                            reason: err.to_string(),
                        });
                        break;
                    }
                }
            }
            // every spawned worker is joined, even after a fault, so no panic escapes the scope
            for (chunk, handle) in handles {
                if let Err(payload) = handle.join() {
                    let reason = Self::panic_reason(payload);
                    fault.get_or_insert(LifeError::WorkerFault { chunk, reason });
                }
            }
            fault.map_or(Ok(()), Err)
        })
    }
}

impl Engine for ParallelEngine {
    /// The number of chunks is taken from the global config.
    fn from_grid(grid: Grid) -> Self {
        Self {
            workers: get_config().workers_for(grid.rows()),
            state: LifeState::new(grid),
            #[cfg(test)]
            fault_in_chunk: None,
        }
    }

    fn snapshot(&self) -> Grid {
        self.state.current.clone()
    }

    fn generation(&self) -> u64 {
        self.state.generation
    }

    fn advance(&mut self) -> Result<()> {
        if let Err(err) = self.compute_next() {
            log::warn!(
                "generation {} discarded: {}",
                self.state.generation + 1,
                err
            );
            return Err(err);
        }
        self.state.publish();
        log::debug!(
            "generation {} computed in {} chunks",
            self.state.generation,
            self.workers
        );
        Ok(())
    }

    fn restart(&mut self) {
        self.state.restart();
    }

    fn population(&self) -> usize {
        self.state.current.population()
    }

    fn statistics(&self) -> String {
        let mut stats =
            format_statistics(self.state.generation, self.population(), &self.state.current);
        stats.push_str(&format!("Workers: {}\n", self.workers));
        stats
    }
}
