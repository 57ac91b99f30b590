// tests/support/mocks/time.rs
use std::sync::Mutex;

use chrono::{DateTime, Duration, TimeZone, Utc};

use papyrus_core::application::ports::time::Clock;

/// Deterministic clock. Starts at a fixed instant and only moves when a test
/// advances it, so timestamp-ordered assertions are stable.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl Default for FixedClock {
    fn default() -> Self {
        Self {
            now: Mutex::new(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()),
        }
    }
}

impl FixedClock {
    pub fn advance_secs(&self, secs: i64) {
        let mut now = self.now.lock().unwrap();
        *now += Duration::seconds(secs);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
