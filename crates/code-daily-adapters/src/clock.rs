//! Wall-clock adapter.

use chrono::{NaiveDate, Utc};
use code_daily_core::application::ports::Clock;

/// Today's date in UTC. Workspace folders are named by the UTC day.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_matches_utc_calendar_day() {
        let before = Utc::now().date_naive();
        let today = SystemClock.today();
        let after = Utc::now().date_naive();
        assert!(today == before || today == after);
    }
}
