use rayon::ThreadPool;
use tracing::trace;

use crate::Result;

/// Owns the worker threads that sub-intervals are solved on.
///
/// Each context has its own rayon pool rather than using the global one, so
/// a solve call can size it and release it independently of anything else
/// in the process. The threads are shut down when the context is dropped.
pub struct ExecutionContext {
    pool: ThreadPool,
}

impl ExecutionContext {
    /// Starts a pool with `num_threads` workers (0 = one per available core).
    ///
    /// # Errors
    ///
    /// [`Error::PoolBuild`](crate::Error::PoolBuild) if the threads cannot be
    /// spawned.
    pub fn new(num_threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("poly-sweep-{i}"))
            .build()?;
        trace!(threads = pool.current_num_threads(), "started worker pool");
        Ok(Self { pool })
    }

    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Runs `op` on this context's pool and waits for it.
    pub(crate) fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(op)
    }
}

impl std::fmt::Debug for ExecutionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutionContext")
            .field("num_threads", &self.num_threads())
            .finish()
    }
}

impl Drop for ExecutionContext {
    fn drop(&mut self) {
        trace!(threads = self.num_threads(), "releasing worker pool");
    }
}
