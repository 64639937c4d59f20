//! Timed wait abstraction used for the key hold interval

use std::thread;
use std::time::Duration;

/// Blocks the caller for a hold interval
pub trait Clock {
    fn sleep(&self, duration: Duration);
}

/// Sleeps the calling thread in real time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration)
    }
}
