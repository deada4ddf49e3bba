//! Host side: owns the path and triggers recomputation.

pub mod navigator;
