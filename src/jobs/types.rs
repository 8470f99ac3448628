//! Job types for the scheduled analysis workflow

use chrono::{DateTime, Local};

/// Tick for a full multi-instrument analysis pass
#[derive(Debug, Clone, Default)]
pub struct AnalysisJob {
    pub scheduled_at: DateTime<Local>,
}

impl From<DateTime<Local>> for AnalysisJob {
    fn from(scheduled_at: DateTime<Local>) -> Self {
        Self { scheduled_at }
    }
}

/// Tick for the once-a-day price summary
#[derive(Debug, Clone, Default)]
pub struct DailySummaryJob {
    pub scheduled_at: DateTime<Local>,
}

impl From<DateTime<Local>> for DailySummaryJob {
    fn from(scheduled_at: DateTime<Local>) -> Self {
        Self { scheduled_at }
    }
}
