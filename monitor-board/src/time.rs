use embassy_time::{block_for, Duration, Instant};
use genmon_lib::time::Clock;

/// Embassy time driver truncated to a wrapping 32 bit microsecond count.
#[derive(Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now_us(&self) -> u32 {
        Instant::now().as_micros() as u32
    }

    fn delay_us(&self, us: u32) {
        block_for(Duration::from_micros(u64::from(us)));
    }
}
