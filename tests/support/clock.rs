// tests/support/clock.rs
use std::sync::{Arc, Mutex};

use blogger_core::application::ports::time::Clock;
use chrono::{DateTime, Duration, TimeZone, Utc};

/// Clock that only moves when told to.
#[derive(Clone)]
pub struct TestClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl TestClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }

    pub fn set(&self, at: DateTime<Utc>) {
        *self.now.lock().unwrap() = at;
    }
}

impl Default for TestClock {
    fn default() -> Self {
        Self::at(Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap())
    }
}

impl Clock for TestClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
