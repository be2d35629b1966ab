//! Main-context task scheduling
//!
//! Device state is only ever mutated from one cooperative control-flow
//! context. Work that originates on other threads, such as the modem
//! driver's material-ready signal, is handed off through a [`Scheduler`]
//! and runs when the main context next drains its queue.

use parking_lot::Mutex;
use std::collections::VecDeque;
use tracing::trace;

/// A deferred unit of work.
pub type Task = Box<dyn FnOnce() + Send>;

/// Hands work to the main context.
pub trait Scheduler: Send + Sync {
    /// Queue `task` for later execution on the main context. Callable from
    /// any thread; never runs the task inline.
    fn schedule(&self, task: Task);
}

/// FIFO queue implementation of [`Scheduler`].
///
/// `schedule` may be called from anywhere; `run_pending` belongs to the
/// main context and runs tasks in submission order.
pub struct TaskQueue {
    tasks: Mutex<VecDeque<Task>>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(VecDeque::new()),
        }
    }

    /// Number of tasks currently queued.
    pub fn pending(&self) -> usize {
        self.tasks.lock().len()
    }

    /// Drain the queue on the calling context, returning how many tasks
    /// ran. Tasks scheduled by a running task are picked up in the same
    /// drain. The lock is not held while a task runs, so tasks may
    /// schedule freely.
    pub fn run_pending(&self) -> usize {
        let mut ran = 0;
        loop {
            let task = self.tasks.lock().pop_front();
            match task {
                Some(task) => {
                    task();
                    ran += 1;
                }
                None => break,
            }
        }
        ran
    }
}

impl Default for TaskQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for TaskQueue {
    fn schedule(&self, task: Task) {
        let mut tasks = self.tasks.lock();
        tasks.push_back(task);
        trace!("task queued ({} pending)", tasks.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn runs_tasks_in_submission_order() {
        let queue = TaskQueue::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for i in 0..3 {
            let order = Arc::clone(&order);
            queue.schedule(Box::new(move || order.lock().push(i)));
        }
        assert_eq!(queue.pending(), 3);
        assert_eq!(queue.run_pending(), 3);
        assert_eq!(*order.lock(), vec![0, 1, 2]);
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn schedule_never_runs_inline() {
        let queue = TaskQueue::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&hits);
        queue.schedule(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        queue.run_pending();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn tasks_scheduled_mid_drain_run_in_same_drain() {
        let queue = Arc::new(TaskQueue::new());
        let hits = Arc::new(AtomicUsize::new(0));

        let inner_queue = Arc::clone(&queue);
        let inner_hits = Arc::clone(&hits);
        queue.schedule(Box::new(move || {
            let counter = Arc::clone(&inner_hits);
            inner_queue.schedule(Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }));
        }));

        assert_eq!(queue.run_pending(), 2);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn schedule_from_other_threads() {
        let queue = Arc::new(TaskQueue::new());
        let hits = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..4 {
            let queue = Arc::clone(&queue);
            let hits = Arc::clone(&hits);
            handles.push(std::thread::spawn(move || {
                let counter = Arc::clone(&hits);
                queue.schedule(Box::new(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                }));
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(queue.pending(), 4);
        assert_eq!(queue.run_pending(), 4);
        assert_eq!(hits.load(Ordering::SeqCst), 4);
    }
}
