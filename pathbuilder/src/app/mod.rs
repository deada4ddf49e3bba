//! Demo application wired entirely from the core combinators.

pub mod screens;
pub mod tree;
