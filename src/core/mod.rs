pub mod aggregator;
pub mod calculator;
pub mod config;
pub mod log;
pub mod normalizer;
pub mod process;
