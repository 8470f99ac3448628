//! Assayer: scheduled technical analysis for metals markets.
//!
//! Fetches 15-minute bars for a small set of instruments, computes a fixed
//! indicator set and a swing-structure trend score, fuses them into a
//! directional call with a confidence level, and posts the rendered report
//! to a Telegram channel on a market-hours cron schedule.

pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod jobs;
pub mod logging;
pub mod models;
pub mod report;
pub mod services;
pub mod signals;
