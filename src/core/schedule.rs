//! Wall-clock gating for scheduled runs: trading hours, weekends, and
//! exchange holidays. The scoring engine itself has no notion of time;
//! everything here runs before a tick reaches it.

use chrono::{DateTime, Datelike, Local, Timelike, Weekday};

/// Full analysis fires every four hours across the trading day.
/// Cron format: second minute hour day month weekday.
pub const ANALYSIS_CRON: &str = "0 0 5,9,13,17,21 * * *";

/// The daily price summary goes out before the first analysis window.
pub const DAILY_SUMMARY_CRON: &str = "0 30 4 * * *";

const MARKET_OPEN_HOUR: u32 = 5;
const MARKET_CLOSE_HOUR: u32 = 21;

/// Observed exchange holidays, YYYY-MM-DD.
const MARKET_HOLIDAYS: &[&str] = &[
    "2024-01-01",
    "2024-01-15",
    "2024-02-19",
    "2024-03-29",
    "2024-05-27",
    "2024-07-04",
    "2024-09-02",
    "2024-11-28",
    "2024-12-25",
    "2025-01-01",
    "2025-01-20",
    "2025-02-17",
    "2025-04-18",
    "2025-05-26",
    "2025-07-04",
    "2025-09-01",
    "2025-11-27",
    "2025-12-25",
    "2026-01-01",
    "2026-01-19",
    "2026-02-16",
    "2026-04-03",
    "2026-05-25",
    "2026-07-03",
    "2026-09-07",
    "2026-11-26",
    "2026-12-25",
];

pub fn is_weekend(now: &DateTime<Local>) -> bool {
    matches!(now.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn is_holiday(now: &DateTime<Local>) -> bool {
    let key = now.format("%Y-%m-%d").to_string();
    MARKET_HOLIDAYS.contains(&key.as_str())
}

/// True while the market is trading (05:00 through 21:59 local).
pub fn within_market_hours(now: &DateTime<Local>) -> bool {
    let hour = now.hour();
    (MARKET_OPEN_HOUR..=MARKET_CLOSE_HOUR).contains(&hour)
}

/// Whether a full analysis pass should run at this instant.
pub fn should_run_analysis(now: &DateTime<Local>) -> bool {
    is_market_day(now) && within_market_hours(now)
}

/// Whether the daily summary should go out. It fires at 04:30, before the
/// market-hours window opens, so only the calendar applies.
pub fn should_run_summary(now: &DateTime<Local>) -> bool {
    is_market_day(now)
}

fn is_market_day(now: &DateTime<Local>) -> bool {
    !is_weekend(now) && !is_holiday(now)
}
