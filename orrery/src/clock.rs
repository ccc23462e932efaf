use crate::math::swept_angle;
use crate::nanotime::Nanotime;

/// Accumulated simulated time. Owned by whoever drives frames; the draw
/// step only ever reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Clock {
    elapsed: Nanotime,
}

impl Clock {
    pub fn new() -> Self {
        Clock::default()
    }

    /// clock positioned at `stamp`; negative stamps start at zero
    pub fn at(stamp: Nanotime) -> Self {
        let mut c = Clock::new();
        c.advance(stamp);
        c
    }

    /// Adds one frame's worth of time. Negative deltas are dropped so the
    /// clock never runs backwards.
    pub fn advance(&mut self, delta: Nanotime) {
        if delta.is_negative() {
            return;
        }
        self.elapsed += delta;
    }

    pub fn elapsed(&self) -> Nanotime {
        self.elapsed
    }

    pub fn angle(&self, rate: f32) -> f32 {
        swept_angle(self.elapsed.to_secs_f64(), rate)
    }
}
