//! Conditional path-construction combinators.
//!
//! A path is an ordered sequence of opaque, typed elements. A [`PathBuilder`]
//! turns a path into content or declines with `None`; combinators pick which
//! builder is responsible based on predicates, optional values, or the type of
//! the head element, merging differently-typed results through [`EitherAB`].
//!
//! - **[`core`]**: the combinator algebra. Pure, no I/O, no logging.
//! - **[`nav`]**: the host side that owns the path and recomputes content.
//! - **[`app`]**: a demo application composed from the combinators.
//! - **[`io`]**: scenario files for the CLI.
//!
//! ```
//! use pathbuilder::core::conditional::if_then_else;
//! use pathbuilder::core::screen::screen;
//! use pathbuilder::{EitherAB, Navigator};
//!
//! struct Inbox;
//! struct Welcome;
//!
//! let signed_in = || true;
//! let mut navigator = Navigator::new(if_then_else(
//!     signed_in,
//!     screen(|_: &Inbox| "inbox"),
//!     screen(|_: &Welcome| "welcome"),
//! ));
//! navigator.push(Inbox);
//! assert_eq!(navigator.recompute(), Some(EitherAB::A("inbox")));
//! ```
//!
//! [`PathBuilder`]: crate::core::builder::PathBuilder
//! [`EitherAB`]: crate::core::either::EitherAB

pub mod app;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod nav;
pub mod resolve;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::builder::{AnyPathBuilder, PathBuilder, PathBuilderExt};
pub use crate::core::either::EitherAB;
pub use crate::core::path::{Path, PathElement, ScreenId};
pub use crate::nav::navigator::Navigator;
