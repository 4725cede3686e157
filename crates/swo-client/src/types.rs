//! Scalar types with server-side constraints.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rejected value for [`TestIntervalInSeconds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid TestIntervalInSeconds {0}: must be one of {allowed:?}", allowed = TestIntervalInSeconds::ALLOWED)]
pub struct InvalidTestInterval(pub u32);

/// How often an availability test runs.
///
/// Only the intervals the platform schedules are representable; anything else
/// fails on construction and on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TestIntervalInSeconds(u32);

impl TestIntervalInSeconds {
    /// Accepted intervals, in seconds.
    pub const ALLOWED: [u32; 8] = [60, 300, 600, 900, 1800, 3600, 7200, 14400];

    pub const ONE_MINUTE: Self = Self(60);
    pub const FIVE_MINUTES: Self = Self(300);
    pub const TEN_MINUTES: Self = Self(600);
    pub const FIFTEEN_MINUTES: Self = Self(900);
    pub const THIRTY_MINUTES: Self = Self(1800);
    pub const ONE_HOUR: Self = Self(3600);
    pub const TWO_HOURS: Self = Self(7200);
    pub const FOUR_HOURS: Self = Self(14400);

    /// Validate `seconds`.
    pub fn new(seconds: u32) -> Result<Self, InvalidTestInterval> {
        if Self::ALLOWED.contains(&seconds) {
            Ok(Self(seconds))
        } else {
            Err(InvalidTestInterval(seconds))
        }
    }

    pub fn as_secs(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for TestIntervalInSeconds {
    type Error = InvalidTestInterval;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TestIntervalInSeconds> for u32 {
    fn from(value: TestIntervalInSeconds) -> Self {
        value.0
    }
}

impl fmt::Display for TestIntervalInSeconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_scheduled_intervals() {
        for seconds in TestIntervalInSeconds::ALLOWED {
            assert_eq!(TestIntervalInSeconds::new(seconds).unwrap().as_secs(), seconds);
        }
        assert_eq!(TestIntervalInSeconds::new(1800), Ok(TestIntervalInSeconds::THIRTY_MINUTES));
    }

    #[test]
    fn test_rejects_other_values() {
        assert_eq!(TestIntervalInSeconds::new(61), Err(InvalidTestInterval(61)));
        assert!(TestIntervalInSeconds::new(0).is_err());
        assert!(
            InvalidTestInterval(5)
                .to_string()
                .starts_with("invalid TestIntervalInSeconds 5: must be one of [60, 300")
        );
    }

    #[test]
    fn test_serde_is_a_plain_integer() {
        let json = serde_json::to_string(&TestIntervalInSeconds::FIVE_MINUTES).unwrap();
        assert_eq!(json, "300");

        let parsed: TestIntervalInSeconds = serde_json::from_str("14400").unwrap();
        assert_eq!(parsed, TestIntervalInSeconds::FOUR_HOURS);

        assert!(serde_json::from_str::<TestIntervalInSeconds>("42").is_err());
    }
}
