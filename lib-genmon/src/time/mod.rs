// Time here is a free running 32 bit microsecond counter. It wraps after
// ~71 minutes, so every comparison goes through wrapping subtraction.

const SIGN_BIT: u32 = 1 << 31;

/// Monotonic microsecond tick source.
pub trait Clock {
    fn now_us(&self) -> u32;

    /// Spins until `us` microseconds have elapsed.
    fn delay_us(&self, us: u32) {
        let start = self.now_us();
        while elapsed_us(start, self.now_us()) < us {}
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_us(&self) -> u32 {
        T::now_us(self)
    }

    fn delay_us(&self, us: u32) {
        T::delay_us(self, us)
    }
}

pub const fn elapsed_us(start: u32, now: u32) -> u32 {
    now.wrapping_sub(start)
}

/// True once `now` has moved past `deadline`.
///
/// `deadline - now` interpreted as unsigned exceeds half the counter range
/// exactly when the deadline lies behind us, including across a wrap.
pub const fn deadline_passed(deadline: u32, now: u32) -> bool {
    deadline.wrapping_sub(now) & SIGN_BIT != 0
}

/// Periodic deadline for a polled loop. A late poll does not catch up, the
/// next deadline is always rearmed one period after the poll that fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyncTicker {
    period_us: u32,
    ready_at: u32,
}

impl SyncTicker {
    pub const fn every(period_us: u32, now_us: u32) -> Self {
        Self {
            period_us,
            ready_at: now_us.wrapping_add(period_us),
        }
    }

    pub fn reset(&mut self, now_us: u32) {
        self.ready_at = now_us.wrapping_add(self.period_us);
    }

    pub const fn ready_at(&self) -> u32 {
        self.ready_at
    }

    pub const fn is_ready(&self, now_us: u32) -> bool {
        deadline_passed(self.ready_at, now_us)
    }

    pub fn next(&mut self, now_us: u32) -> bool {
        if self.is_ready(now_us) {
            self.reset(now_us);
            true
        } else {
            false
        }
    }
}
