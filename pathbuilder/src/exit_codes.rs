//! Stable exit codes for the `pathbuilder` CLI.

/// Command succeeded; for `resolve`, every path entry produced a view.
pub const OK: i32 = 0;
/// Invalid scenario, unreadable file, or any other error.
pub const INVALID: i32 = 1;
/// `pathbuilder resolve` found no builder responsible for the path.
pub const NO_MATCH: i32 = 2;
/// `pathbuilder resolve` printed a stack that stops short of the full path.
pub const PARTIAL: i32 = 3;
