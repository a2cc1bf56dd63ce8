//! intraday-rth: one-minute intraday bars for US equities, restricted to
//! regular trading hours (09:30–16:00 America/New_York)
//!
//! This library provides:
//! - Query window resolution for a trading date (DST-aware)
//! - A JSON fetcher with bounded fixed-backoff retries and cache defeat
//! - Session filtering and OHLCV normalization of chart payloads
//! - The intraday service tying these together, plus its error taxonomy
//! - Configuration, logging and metrics

pub mod cli;
pub mod config;
pub mod fetch;
pub mod intraday;
pub mod quote;
pub mod session;
pub mod telemetry;
