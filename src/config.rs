use std::sync::atomic::{AtomicUsize, Ordering};

struct Config {
    worker_threads: AtomicUsize,
    min_rows_per_worker: AtomicUsize,
}

static CONFIG: Config = Config {
    worker_threads: AtomicUsize::new(0),
    min_rows_per_worker: AtomicUsize::new(16),
};

pub struct ConfigSnapshot {
    /// `0` means "use `std::thread::available_parallelism`".
    pub worker_threads: usize,
    /// Parallel engines built without an explicit worker count never give
    /// a worker fewer rows than this.
    pub min_rows_per_worker: usize,
}

impl ConfigSnapshot {
    /// Number of chunks a grid with `rows` rows is split into.
    pub fn workers_for(&self, rows: usize) -> usize {
        let threads = match self.worker_threads {
            0 => std::thread::available_parallelism().map_or(1, |n| n.get()),
            n => n,
        };
        threads.min(rows / self.min_rows_per_worker.max(1)).max(1)
    }
}

pub fn get_config() -> ConfigSnapshot {
    ConfigSnapshot {
        worker_threads: CONFIG.worker_threads.load(Ordering::Relaxed),
        min_rows_per_worker: CONFIG.min_rows_per_worker.load(Ordering::Relaxed),
    }
}

pub fn set_worker_threads(threads: usize) {
    CONFIG.worker_threads.store(threads, Ordering::Relaxed);
}

pub fn set_min_rows_per_worker(rows: usize) {
    CONFIG.min_rows_per_worker.store(rows, Ordering::Relaxed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn explicit_thread_count_is_capped_by_rows() {
        set_worker_threads(8);
        set_min_rows_per_worker(4);
        let config = get_config();
        assert_eq!(config.workers_for(100), 8);
        assert_eq!(config.workers_for(12), 3);
        assert_eq!(config.workers_for(3), 1);
        set_worker_threads(0);
        set_min_rows_per_worker(16);
    }

    #[test]
    #[serial]
    fn automatic_thread_count_is_positive() {
        set_worker_threads(0);
        let config = get_config();
        assert!(config.workers_for(1) >= 1);
        assert!(config.workers_for(1 << 20) >= 1);
    }
}
