//! Control-flow micro-benchmarks.

pub mod gray_point;
