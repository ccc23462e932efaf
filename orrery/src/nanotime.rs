use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul};
use std::time::Duration;

/// Simulated time, stored as whole nanoseconds so that repeated frame
/// accumulation never loses precision.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Nanotime(i64);

impl Nanotime {
    pub const PER_MILLI: i64 = 1000000;
    pub const PER_SEC: i64 = Nanotime::PER_MILLI * 1000;

    pub const fn zero() -> Self {
        Nanotime(0)
    }

    pub const fn nanos(ns: i64) -> Self {
        Nanotime(ns)
    }

    pub const fn millis(ms: i64) -> Self {
        Nanotime(ms * Nanotime::PER_MILLI)
    }

    pub const fn secs(s: i64) -> Self {
        Nanotime(s * Nanotime::PER_SEC)
    }

    pub fn secs_f32(s: f32) -> Self {
        Nanotime::secs_f64(s as f64)
    }

    pub fn secs_f64(s: f64) -> Self {
        Nanotime((s * Nanotime::PER_SEC as f64).round() as i64)
    }

    pub fn to_secs_f64(&self) -> f64 {
        self.0 as f64 / Nanotime::PER_SEC as f64
    }

    pub fn inner(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl From<Duration> for Nanotime {
    fn from(d: Duration) -> Self {
        Nanotime(d.as_nanos().min(i64::MAX as u128) as i64)
    }
}

fn fmt(s: &Nanotime, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let disp = s.0.abs();
    let sign = if s.0 < 0 { "-" } else { "" };
    write!(
        f,
        "{sign}{}.{:09}",
        disp / Nanotime::PER_SEC,
        disp % Nanotime::PER_SEC
    )
}

impl std::fmt::Debug for Nanotime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt(self, f)
    }
}

impl std::fmt::Display for Nanotime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt(self, f)
    }
}

impl Add for Nanotime {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Nanotime(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Nanotime {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul<f32> for Nanotime {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self((self.0 as f64 * rhs as f64) as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_seconds_dot_nanos() {
        assert_eq!(Nanotime::millis(1500).to_string(), "1.500000000");
        assert_eq!(Nanotime::millis(-250).to_string(), "-0.250000000");
    }

    #[test]
    fn duration_conversion() {
        let t: Nanotime = Duration::from_millis(16).into();
        assert_eq!(t, Nanotime::millis(16));
        assert_eq!(Nanotime::secs_f64(0.016), t);
    }

    #[test]
    fn addition_saturates() {
        let t = Nanotime::nanos(i64::MAX) + Nanotime::secs(1);
        assert_eq!(t.inner(), i64::MAX);
    }
}
