//! Mathematical utilities for zone statistics

/// Mean and population standard deviation
pub mod moments;
