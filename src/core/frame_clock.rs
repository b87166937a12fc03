//! Fixed-rate frame clock standing in for the display's vertical blank.

use std::thread;
use std::time::{Duration, Instant};

/// Monotonic frame counter plus a blocking "wait for next frame" primitive.
#[derive(Debug)]
pub struct FrameClock {
    interval: Duration,
    frame: u64,
    next_deadline: Instant,
}

impl FrameClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            frame: 0,
            next_deadline: Instant::now() + interval,
        }
    }

    /// Number of frames completed so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Block until the next frame boundary, then advance the counter.
    ///
    /// A frame that overran its deadline does not cause a burst of catch-up
    /// frames; the schedule restarts from now instead.
    pub fn wait_next_frame(&mut self) {
        let now = Instant::now();
        if now < self.next_deadline {
            thread::sleep(self.next_deadline - now);
            self.next_deadline += self.interval;
        } else {
            self.next_deadline = now + self.interval;
        }
        self.frame += 1;
    }
}
