//! Deterministic path-building combinators.
//!
//! Nothing in `core` performs I/O or logs. Builders are pure functions of the
//! path they are given and of whatever external state their closures read, so
//! the host can call them on every path change and expect stable answers.

pub mod builder;
pub mod conditional;
pub mod either;
pub mod path;
pub mod screen;
