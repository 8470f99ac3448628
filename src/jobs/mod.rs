//! Scheduled jobs: tick types, shared context, and handlers.

pub mod context;
pub mod handlers;
pub mod types;

pub use context::JobContext;
pub use types::{AnalysisJob, DailySummaryJob};
