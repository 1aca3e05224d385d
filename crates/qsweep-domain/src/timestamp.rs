//! Timestamp module - the single clock domain shared by jobs and watermarks
//!
//! Every timestamp the sweep compares lives here: seconds since the Unix
//! epoch, UTC. Job enqueue times and stored watermarks must never be held in
//! different representations, or the skip classification silently breaks.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// A wall-clock instant in seconds since the Unix epoch (UTC)
///
/// `Timestamp` is a totally ordered value type. The minimum value,
/// [`Timestamp::EPOCH`], is used as the "include every job" watermark on a
/// first-ever sweep run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The minimum representable timestamp (the Unix epoch itself)
    pub const EPOCH: Timestamp = Timestamp(0);

    /// Current wall-clock time
    ///
    /// # Examples
    ///
    /// ```
    /// use qsweep_domain::Timestamp;
    ///
    /// let now = Timestamp::now();
    /// assert!(now > Timestamp::EPOCH);
    /// ```
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self(secs)
    }

    /// Construct from raw epoch seconds
    pub fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Raw epoch seconds
    pub fn as_secs(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_is_minimum() {
        assert!(Timestamp::EPOCH <= Timestamp::from_secs(0));
        assert!(Timestamp::EPOCH < Timestamp::from_secs(1));
        assert!(Timestamp::EPOCH < Timestamp::now());
    }

    #[test]
    fn test_ordering() {
        let earlier = Timestamp::from_secs(100);
        let later = Timestamp::from_secs(200);

        assert!(earlier < later);
        assert!(later > earlier);
        assert_eq!(earlier, Timestamp::from_secs(100));
    }

    #[test]
    fn test_display_is_raw_seconds() {
        assert_eq!(Timestamp::from_secs(1_700_000_000).to_string(), "1700000000");
        assert_eq!(Timestamp::EPOCH.to_string(), "0");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Timestamp ordering matches raw seconds ordering
        #[test]
        fn test_ordering_property(a: u64, b: u64) {
            let ts_a = Timestamp::from_secs(a);
            let ts_b = Timestamp::from_secs(b);

            prop_assert_eq!(ts_a < ts_b, a < b);
            prop_assert_eq!(ts_a == ts_b, a == b);
            prop_assert_eq!(ts_a > ts_b, a > b);
        }

        /// Property: Round-trip through raw seconds preserves the value
        #[test]
        fn test_secs_roundtrip(secs: u64) {
            let ts = Timestamp::from_secs(secs);
            prop_assert_eq!(ts.as_secs(), secs);
        }
    }
}
