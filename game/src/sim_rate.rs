use enum_iterator::{all, Sequence};
use std::str::FromStr;

/// How many simulated seconds pass per wall-clock second.
#[derive(Debug, Clone, Copy, Default, Sequence, PartialEq, Eq)]
pub enum SimRate {
    #[default]
    RealTime,
    Double,
    FiveTimes,
    TenTimes,
    FiftyTimes,
}

impl SimRate {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimRate::RealTime => "1x",
            SimRate::Double => "2x",
            SimRate::FiveTimes => "5x",
            SimRate::TenTimes => "10x",
            SimRate::FiftyTimes => "50x",
        }
    }

    pub fn multiplier(&self) -> f32 {
        match self {
            SimRate::RealTime => 1.0,
            SimRate::Double => 2.0,
            SimRate::FiveTimes => 5.0,
            SimRate::TenTimes => 10.0,
            SimRate::FiftyTimes => 50.0,
        }
    }

    pub fn all() -> impl Iterator<Item = Self> {
        all::<Self>()
    }
}

impl std::fmt::Display for SimRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SimRate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SimRate::all().find(|r| r.as_str() == s).ok_or_else(|| {
            let choices: Vec<_> = SimRate::all().map(|r| r.as_str()).collect();
            format!("unknown rate {s:?}, expected one of {}", choices.join(", "))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_label() {
        for r in SimRate::all() {
            assert_eq!(r.as_str().parse::<SimRate>(), Ok(r));
        }
        assert_eq!("10x".parse::<SimRate>(), Ok(SimRate::TenTimes));
    }

    #[test]
    fn rejects_unknown() {
        let e = "3x".parse::<SimRate>().unwrap_err();
        assert!(e.contains("1x, 2x, 5x, 10x, 50x"), "{e}");
    }

    #[test]
    fn multipliers_increase() {
        let m: Vec<_> = SimRate::all().map(|r| r.multiplier()).collect();
        assert!(m.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(SimRate::default().multiplier(), 1.0);
    }
}
