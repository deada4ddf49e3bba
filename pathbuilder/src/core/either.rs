//! Two-way tagged union used to merge differently-typed branch results.

use std::convert::Infallible;

use serde::{Deserialize, Serialize};

/// Content produced by a two-branch combinator.
///
/// `A` carries the primary ("then") branch, `B` the fallback. The union is
/// closed: nesting it is the only way to merge more than two branches, and
/// callers are expected to match both variants exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "branch", content = "content", rename_all = "lowercase")]
pub enum EitherAB<A, B> {
    A(A),
    B(B),
}

impl<A, B> EitherAB<A, B> {
    pub fn is_a(&self) -> bool {
        matches!(self, Self::A(_))
    }

    pub fn is_b(&self) -> bool {
        matches!(self, Self::B(_))
    }

    pub fn into_a(self) -> Option<A> {
        match self {
            Self::A(a) => Some(a),
            Self::B(_) => None,
        }
    }

    pub fn into_b(self) -> Option<B> {
        match self {
            Self::A(_) => None,
            Self::B(b) => Some(b),
        }
    }

    pub fn as_ref(&self) -> EitherAB<&A, &B> {
        match self {
            Self::A(a) => EitherAB::A(a),
            Self::B(b) => EitherAB::B(b),
        }
    }

    pub fn map_a<C>(self, f: impl FnOnce(A) -> C) -> EitherAB<C, B> {
        match self {
            Self::A(a) => EitherAB::A(f(a)),
            Self::B(b) => EitherAB::B(b),
        }
    }

    pub fn map_b<C>(self, f: impl FnOnce(B) -> C) -> EitherAB<A, C> {
        match self {
            Self::A(a) => EitherAB::A(a),
            Self::B(b) => EitherAB::B(f(b)),
        }
    }

    /// Collapse both variants into one value.
    pub fn fold<T>(self, on_a: impl FnOnce(A) -> T, on_b: impl FnOnce(B) -> T) -> T {
        match self {
            Self::A(a) => on_a(a),
            Self::B(b) => on_b(b),
        }
    }
}

impl<T> EitherAB<T, T> {
    /// Unwrap a union whose branches produce the same type.
    pub fn into_inner(self) -> T {
        match self {
            Self::A(value) | Self::B(value) => value,
        }
    }
}

impl<A> EitherAB<A, Infallible> {
    /// Unwrap a union whose fallback can never be built (see `if_screen`).
    pub fn into_primary(self) -> A {
        match self {
            Self::A(a) => a,
            Self::B(never) => match never {},
        }
    }
}
