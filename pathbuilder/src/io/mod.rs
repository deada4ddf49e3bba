//! Side-effecting helpers: reading and writing scenario files.

pub mod scenario;
