use std::time::Duration;

use crate::looper::{Looper, TaskId};

/// Interval used when the owner does not configure one.
pub const DEFAULT_INTERVAL_MS: u32 = 1000;

/// Fixed-interval repeating alarm.
///
/// While enabled, exactly one copy of `alarm` is pending on the looper. The
/// owner hands every alarm task it pops back to [`fire`](Self::fire), which
/// re-arms the timer and says whether the alarm should be honoured.
///
/// State transitions:
/// - enable: cancel any pending alarm, then arm `interval` from now
/// - disable: cancel the pending alarm
/// - interval change while enabled: cancel and re-arm from now
#[derive(Debug)]
pub struct Timer<T> {
    alarm: T,
    interval_ms: u32,
    enabled: bool,
    pending: Option<TaskId>,
}

impl<T: Clone> Timer<T> {
    /// Creates an enabled timer with the default interval.
    pub fn new(alarm: T, looper: &mut Looper<T>) -> Self {
        Self::with_settings(alarm, DEFAULT_INTERVAL_MS, true, looper)
    }

    pub fn with_settings(alarm: T, interval_ms: u32, enabled: bool, looper: &mut Looper<T>) -> Self {
        let mut timer = Self {
            alarm,
            interval_ms: interval_ms.max(1),
            enabled,
            pending: None,
        };
        if enabled {
            timer.arm(looper);
        }
        timer
    }

    #[inline]
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Sets the interval. Zero is raised to 1 ms so the alarm cannot spin.
    pub fn set_interval_ms(&mut self, interval_ms: u32, looper: &mut Looper<T>) {
        self.interval_ms = interval_ms.max(1);
        if self.enabled {
            self.disarm(looper);
            self.arm(looper);
        }
    }

    #[inline]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool, looper: &mut Looper<T>) {
        if self.enabled {
            self.disarm(looper);
        }
        self.enabled = enabled;
        if enabled {
            self.arm(looper);
        }
    }

    /// Accepts a popped alarm task.
    ///
    /// Returns `true` if `id` is this timer's live alarm; the timer is then
    /// already re-armed for the next interval. Stale ids return `false`.
    pub fn fire(&mut self, id: TaskId, looper: &mut Looper<T>) -> bool {
        if self.pending != Some(id) {
            return false;
        }
        self.pending = None;
        if !self.enabled {
            return false;
        }
        self.arm(looper);
        true
    }

    /// Id of the alarm currently waiting on the looper.
    #[inline]
    pub fn pending(&self) -> Option<TaskId> {
        self.pending
    }

    fn arm(&mut self, looper: &mut Looper<T>) {
        let delay = Duration::from_millis(u64::from(self.interval_ms));
        self.pending = Some(looper.post_delayed(self.alarm.clone(), delay));
    }

    fn disarm(&mut self, looper: &mut Looper<T>) {
        if let Some(id) = self.pending.take() {
            looper.cancel(id);
        }
    }
}
