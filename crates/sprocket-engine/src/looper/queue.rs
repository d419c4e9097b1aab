use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};
use std::time::Duration;

/// Handle to a posted task, used to cancel it before it runs.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

struct Entry<T> {
    due: Duration,
    id: TaskId,
    task: T,
}

impl<T> Entry<T> {
    #[inline]
    fn key(&self) -> (Duration, TaskId) {
        (self.due, self.id)
    }
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<T> Eq for Entry<T> {}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Time-ordered FIFO of tasks.
///
/// Ordering rules:
/// 1) `due`: ascending
/// 2) posting order for equal `due`
///
/// Cancelled tasks stay in the heap and are skipped when they surface.
pub struct Looper<T> {
    now: Duration,
    next_id: u64,
    queue: BinaryHeap<Reverse<Entry<T>>>,
    live: HashSet<TaskId>,
}

impl<T> Looper<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            queue: BinaryHeap::new(),
            live: HashSet::new(),
        }
    }

    /// Current queue time.
    #[inline]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of tasks still waiting to run.
    #[inline]
    pub fn pending(&self) -> usize {
        self.live.len()
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.live.is_empty()
    }

    /// Posts `task` to run after everything already due now.
    pub fn post(&mut self, task: T) -> TaskId {
        self.post_delayed(task, Duration::ZERO)
    }

    /// Posts `task` to run `delay` after the current queue time.
    pub fn post_delayed(&mut self, task: T, delay: Duration) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.live.insert(id);
        self.queue.push(Reverse(Entry { due: self.now + delay, id, task }));
        id
    }

    /// Removes a task that has not run yet.
    ///
    /// Returns `false` if the task already ran or was cancelled before.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        self.live.remove(&id)
    }

    #[inline]
    pub fn is_pending(&self, id: TaskId) -> bool {
        self.live.contains(&id)
    }

    /// Due time of the earliest live task.
    pub fn next_due(&mut self) -> Option<Duration> {
        self.discard_cancelled();
        self.queue.peek().map(|Reverse(e)| e.due)
    }

    /// Pops the earliest task due at or before `deadline`, moving the clock
    /// to its due time.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<(TaskId, T)> {
        self.discard_cancelled();
        let due = self.queue.peek().map(|Reverse(e)| e.due)?;
        if due > deadline {
            return None;
        }

        let Reverse(entry) = self.queue.pop()?;
        self.live.remove(&entry.id);
        if entry.due > self.now {
            self.now = entry.due;
        }
        Some((entry.id, entry.task))
    }

    /// Moves the clock forward to `t`. Never moves it backwards.
    pub fn advance_to(&mut self, t: Duration) {
        if t > self.now {
            self.now = t;
        }
    }

    fn discard_cancelled(&mut self) {
        while let Some(Reverse(e)) = self.queue.peek() {
            if self.live.contains(&e.id) {
                break;
            }
            self.queue.pop();
        }
    }
}

impl<T> Default for Looper<T> {
    fn default() -> Self {
        Self::new()
    }
}
