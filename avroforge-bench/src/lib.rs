//! # avroforge Bench
//!
//! Benchmarking fixtures for avroforge performance testing.

pub mod fixtures;
