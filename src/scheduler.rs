//! Fixed-rate tick scheduler.
//!
//! The loop thread asks `wait` to sleep until the next deadline after every
//! frame.  Stopping the scheduler (game over) halts simulation steps; the
//! frontend then blocks on input until a restart starts it again.

use std::time::{Duration, Instant};

pub const DEFAULT_TICK_RATE_HZ: f64 = 60.0;

#[derive(Clone, Debug)]
pub struct Scheduler {
    interval: Duration,
    running: bool,
    next_deadline: Instant,
}

impl Scheduler {
    /// A stopped scheduler ticking at `rate_hz` once started.
    pub fn new(rate_hz: f64) -> Self {
        let interval = Duration::from_secs_f64(1.0 / rate_hz);
        Self {
            interval,
            running: false,
            next_deadline: Instant::now() + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        if !self.running {
            log::debug!("scheduler started ({:?} per tick)", self.interval);
        }
        self.running = true;
        self.next_deadline = Instant::now() + self.interval;
    }

    pub fn stop(&mut self) {
        if self.running {
            log::debug!("scheduler stopped");
        }
        self.running = false;
    }

    /// Time left before the next tick is due, measured from `now`.
    pub fn time_until_next(&self, now: Instant) -> Duration {
        self.next_deadline.saturating_duration_since(now)
    }

    /// Sleep until the next tick is due and schedule the one after.
    ///
    /// If the loop fell more than a whole interval behind, the schedule is
    /// re-anchored on the current time instead of bursting to catch up.
    pub fn wait(&mut self) {
        let now = Instant::now();
        let remaining = self.time_until_next(now);
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }

        self.next_deadline += self.interval;
        let now = Instant::now();
        if self.next_deadline + self.interval < now {
            self.next_deadline = now + self.interval;
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_RATE_HZ)
    }
}
