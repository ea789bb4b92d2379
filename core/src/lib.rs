//! hitstat-core: scores lottery prediction rows against official draws
//! and persists per-forecaster, per-play-type hit statistics.

pub mod aggregator;
pub mod command;
pub mod config;
pub mod draw;
pub mod error;
pub mod numbers;
pub mod play_type;
pub mod rules;
pub mod scheduler;
pub mod store;
pub mod types;
