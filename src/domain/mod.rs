//! Core domain types and logic.

pub mod ohlc;
pub mod indicator;
pub mod signal;
pub mod ranking;
pub mod scan;
pub mod universe;
pub mod config;
pub mod error;
