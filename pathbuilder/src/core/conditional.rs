//! Predicate and value driven combinators.
//!
//! Conditions are plain closures. They are evaluated on every `build` call and
//! never cached, so state read through a shared handle is always current.

use crate::core::builder::PathBuilder;
use crate::core::either::EitherAB;
use crate::core::path::PathElement;

/// Single-branch gate. See [`if_then`].
#[derive(Clone)]
pub struct If<P, T> {
    condition: P,
    then: T,
}

/// Build with `then` only while `condition` holds; otherwise decline without
/// attempting `then`.
pub fn if_then<P, T>(condition: P, then: T) -> If<P, T>
where
    P: Fn() -> bool,
    T: PathBuilder,
{
    If { condition, then }
}

impl<P, T> PathBuilder for If<P, T>
where
    P: Fn() -> bool,
    T: PathBuilder,
{
    type Content = T::Content;

    fn build(&self, path: &[PathElement]) -> Option<T::Content> {
        if (self.condition)() {
            self.then.build(path)
        } else {
            None
        }
    }
}

/// Two-branch alternation. See [`if_then_else`].
#[derive(Clone)]
pub struct IfElse<P, T, E> {
    condition: P,
    then: T,
    otherwise: E,
}

/// Try `then` when `condition` holds, falling back to `otherwise`.
///
/// `otherwise` is attempted whenever `then` produced nothing, including when
/// the condition held but `then` declined internally.
pub fn if_then_else<P, T, E>(condition: P, then: T, otherwise: E) -> IfElse<P, T, E>
where
    P: Fn() -> bool,
    T: PathBuilder,
    E: PathBuilder,
{
    IfElse {
        condition,
        then,
        otherwise,
    }
}

/// Select between two complete alternatives by a boolean gate.
///
/// Same builder as [`if_then_else`], argument order reads better at call sites
/// that pick one of two screens.
pub fn conditional<P, T, E>(either: T, or: E, based_on: P) -> IfElse<P, T, E>
where
    P: Fn() -> bool,
    T: PathBuilder,
    E: PathBuilder,
{
    if_then_else(based_on, either, or)
}

impl<P, T, E> PathBuilder for IfElse<P, T, E>
where
    P: Fn() -> bool,
    T: PathBuilder,
    E: PathBuilder,
{
    type Content = EitherAB<T::Content, E::Content>;

    fn build(&self, path: &[PathElement]) -> Option<Self::Content> {
        if (self.condition)() {
            if let Some(content) = self.then.build(path) {
                return Some(EitherAB::A(content));
            }
        }
        self.otherwise.build(path).map(EitherAB::B)
    }
}

/// Optional-unwrap branch. See [`if_let`].
#[derive(Clone)]
pub struct IfLet<L, F, E> {
    value: L,
    then: F,
    otherwise: E,
}

/// Branch on the presence of a value.
///
/// `Some(v)` builds `then(v)`, `None` builds `otherwise`. Exactly one branch is
/// attempted: if it declines, so does the combinator.
pub fn if_let<L, V, F, T, E>(value: L, then: F, otherwise: E) -> IfLet<L, F, E>
where
    L: Fn() -> Option<V>,
    F: Fn(V) -> T,
    T: PathBuilder,
    E: PathBuilder,
{
    IfLet {
        value,
        then,
        otherwise,
    }
}

impl<L, V, F, T, E> PathBuilder for IfLet<L, F, E>
where
    L: Fn() -> Option<V>,
    F: Fn(V) -> T,
    T: PathBuilder,
    E: PathBuilder,
{
    type Content = EitherAB<T::Content, E::Content>;

    fn build(&self, path: &[PathElement]) -> Option<Self::Content> {
        match (self.value)() {
            Some(value) => (self.then)(value).build(path).map(EitherAB::A),
            None => self.otherwise.build(path).map(EitherAB::B),
        }
    }
}

/// First-match alternation. See [`any_of`].
#[derive(Clone)]
pub struct AnyOf<A, B> {
    first: A,
    second: B,
}

/// Use whichever builder produces content first, in argument order.
pub fn any_of<A, B>(first: A, second: B) -> AnyOf<A, B>
where
    A: PathBuilder,
    B: PathBuilder,
{
    AnyOf { first, second }
}

impl<A, B> PathBuilder for AnyOf<A, B>
where
    A: PathBuilder,
    B: PathBuilder,
{
    type Content = EitherAB<A::Content, B::Content>;

    fn build(&self, path: &[PathElement]) -> Option<Self::Content> {
        if let Some(content) = self.first.build(path) {
            return Some(EitherAB::A(content));
        }
        self.second.build(path).map(EitherAB::B)
    }
}
