//! Fixed-size worker pools for background jobs.
//!
//! An engine runs one pool per priority: flushes in the high-priority pool,
//! compactions in the low-priority pool. Every worker reports its thread type
//! to the environment's status registry when it starts and unregisters before
//! it exits, so jobs only need to report the column family, operation and
//! state they are working on.

use parking_lot::{Condvar, Mutex};
use std::any::Any;
use std::collections::VecDeque;
use std::sync::Arc;
use std::thread::JoinHandle;
use strata_core::{Env, ThreadType};
use thiserror::Error;
use tracing::{debug, error};

use crate::thread_status::{ThreadStatusTracking, ThreadStatusUtil};

/// Error returned when submitting to a pool that has been shut down.
#[derive(Debug, Error)]
#[error("thread pool has been shut down")]
pub struct PoolShutdownError;

/// Pool metrics snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    /// Jobs waiting in the queue.
    pub queued_jobs: usize,
    /// Jobs currently running.
    pub active_jobs: usize,
    /// Jobs finished since the pool was created, including ones that panicked.
    pub jobs_completed: u64,
    /// Number of worker threads.
    pub worker_count: usize,
}

type Job = Box<dyn FnOnce() + Send>;

#[derive(Default)]
struct PoolState {
    jobs: VecDeque<Job>,
    active: usize,
    completed: u64,
    shutdown: bool,
}

struct PoolInner {
    state: Mutex<PoolState>,
    work_ready: Condvar,
    idle: Condvar,
}

/// A pool of worker threads of one [`ThreadType`], running jobs in FIFO order.
pub struct ThreadPool {
    inner: Arc<PoolInner>,
    workers: Mutex<Vec<JoinHandle<()>>>,
    thread_type: ThreadType,
    num_threads: usize,
}

impl ThreadPool {
    /// Start `num_threads` workers reporting to `env`'s status registry.
    ///
    /// Workers are named `strata-high-0`, `strata-low-1`, etc.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `num_threads` is zero, or the spawn error if
    /// a worker thread cannot be started.
    pub fn new(
        thread_type: ThreadType,
        num_threads: usize,
        env: Arc<dyn Env>,
    ) -> std::io::Result<Self> {
        if num_threads == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "thread pool needs at least one worker",
            ));
        }

        let pool = Self {
            inner: Arc::new(PoolInner {
                state: Mutex::new(PoolState::default()),
                work_ready: Condvar::new(),
                idle: Condvar::new(),
            }),
            workers: Mutex::new(Vec::with_capacity(num_threads)),
            thread_type,
            num_threads,
        };

        let prefix = match thread_type {
            ThreadType::HighPriority => "strata-high",
            ThreadType::LowPriority => "strata-low",
            ThreadType::User => "strata-user",
        };
        for i in 0..num_threads {
            let inner = Arc::clone(&pool.inner);
            let env = Arc::clone(&env);
            let spawned = std::thread::Builder::new()
                .name(format!("{}-{}", prefix, i))
                .spawn(move || worker_loop(&inner, &*env, thread_type));
            match spawned {
                Ok(handle) => pool.workers.lock().push(handle),
                Err(e) => {
                    pool.shutdown();
                    return Err(e);
                }
            }
        }

        debug!(thread_type = %thread_type, num_threads, "started thread pool");
        Ok(pool)
    }

    /// Thread type reported by this pool's workers.
    pub fn thread_type(&self) -> ThreadType {
        self.thread_type
    }

    /// Queue a job.
    pub fn submit(&self, job: impl FnOnce() + Send + 'static) -> Result<(), PoolShutdownError> {
        {
            let mut state = self.inner.state.lock();
            if state.shutdown {
                return Err(PoolShutdownError);
            }
            state.jobs.push_back(Box::new(job));
        }
        self.inner.work_ready.notify_one();
        Ok(())
    }

    /// Block until every queued and running job has finished.
    ///
    /// Workers keep running afterwards.
    pub fn drain(&self) {
        let mut state = self.inner.state.lock();
        while !state.jobs.is_empty() || state.active > 0 {
            self.inner.idle.wait(&mut state);
        }
    }

    /// Run the remaining jobs, then stop and join every worker.
    pub fn shutdown(&self) {
        {
            let mut state = self.inner.state.lock();
            state.shutdown = true;
            self.inner.work_ready.notify_all();
        }

        let mut workers = self.workers.lock();
        for handle in workers.drain(..) {
            let _ = handle.join();
        }
    }

    /// Return a snapshot of pool metrics.
    pub fn stats(&self) -> PoolStats {
        let state = self.inner.state.lock();
        PoolStats {
            queued_jobs: state.jobs.len(),
            active_jobs: state.active,
            jobs_completed: state.completed,
            worker_count: self.num_threads,
        }
    }
}

impl Drop for ThreadPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Next job to run, or `None` once the pool is shut down and empty.
fn next_job(inner: &PoolInner) -> Option<Job> {
    let mut state = inner.state.lock();
    loop {
        if let Some(job) = state.jobs.pop_front() {
            state.active += 1;
            return Some(job);
        }
        if state.shutdown {
            return None;
        }
        inner.work_ready.wait(&mut state);
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("(non-string panic)")
}

fn worker_loop(inner: &PoolInner, env: &dyn Env, thread_type: ThreadType) {
    ThreadStatusUtil::set_thread_type(Some(env), thread_type);

    while let Some(job) = next_job(inner) {
        if let Err(e) = std::panic::catch_unwind(std::panic::AssertUnwindSafe(job)) {
            error!("background job panicked: {:?}", panic_message(&*e));
            // The job may have died mid-operation
            ThreadStatusUtil::reset_thread_status();
        }

        let mut state = inner.state.lock();
        state.active -= 1;
        state.completed += 1;
        if state.active == 0 && state.jobs.is_empty() {
            inner.idle.notify_all();
        }
    }

    ThreadStatusUtil::unregister_thread();
}
