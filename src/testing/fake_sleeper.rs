use std::sync::Mutex;
use std::time::Duration;

use crate::ports::Sleeper;
use crate::testing::Journal;

/// Records requested sleeps instead of blocking.
#[derive(Debug, Default)]
pub struct FakeSleeper {
    journal: Journal,
    pub slept: Mutex<Vec<Duration>>,
}

impl FakeSleeper {
    pub fn new(journal: Journal) -> Self {
        Self { journal, slept: Mutex::new(Vec::new()) }
    }

    pub fn total(&self) -> Duration {
        self.slept.lock().unwrap().iter().sum()
    }
}

impl Sleeper for FakeSleeper {
    fn sleep(&self, duration: Duration) {
        self.journal.push(format!("sleep {}s", duration.as_secs()));
        self.slept.lock().unwrap().push(duration);
    }
}
