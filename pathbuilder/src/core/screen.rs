//! Combinators that match the head of the path by payload type.

use std::any::Any;
use std::convert::Infallible;
use std::marker::PhantomData;

use crate::core::builder::{Empty, PathBuilder, empty};
use crate::core::either::EitherAB;
use crate::core::path::PathElement;

/// Type-matching branch. See [`if_screen_else`].
pub struct IfScreen<S, F, E> {
    then: F,
    otherwise: E,
    _screen: PhantomData<fn() -> S>,
}

/// Branch on the type of the first path element.
///
/// When the head unwraps as `S`, builds `then(&screen)` against the whole
/// path. An empty path or a head of another type builds `otherwise`. Exactly
/// one branch is attempted.
pub fn if_screen_else<S, F, T, E>(then: F, otherwise: E) -> IfScreen<S, F, E>
where
    S: Any,
    F: Fn(&S) -> T,
    T: PathBuilder,
    E: PathBuilder,
{
    IfScreen {
        then,
        otherwise,
        _screen: PhantomData,
    }
}

/// [`if_screen_else`] without a fallback: non-matching paths produce nothing.
pub fn if_screen<S, F, T>(then: F) -> IfScreen<S, F, Empty<Infallible>>
where
    S: Any,
    F: Fn(&S) -> T,
    T: PathBuilder,
{
    if_screen_else(then, empty())
}

impl<S, F, T, E> PathBuilder for IfScreen<S, F, E>
where
    S: Any,
    F: Fn(&S) -> T,
    T: PathBuilder,
    E: PathBuilder,
{
    type Content = EitherAB<T::Content, E::Content>;

    fn build(&self, path: &[PathElement]) -> Option<Self::Content> {
        match path.first().and_then(PathElement::unwrap_as::<S>) {
            Some(screen) => (self.then)(screen).build(path).map(EitherAB::A),
            None => self.otherwise.build(path).map(EitherAB::B),
        }
    }
}

impl<S, F: Clone, E: Clone> Clone for IfScreen<S, F, E> {
    fn clone(&self) -> Self {
        Self {
            then: self.then.clone(),
            otherwise: self.otherwise.clone(),
            _screen: PhantomData,
        }
    }
}

/// Leaf builder for one screen type. See [`screen`].
pub struct Screen<S, F> {
    content: F,
    _screen: PhantomData<fn() -> S>,
}

/// Produce `content(&screen)` when the head of the path is an `S`.
pub fn screen<S, F, C>(content: F) -> Screen<S, F>
where
    S: Any,
    F: Fn(&S) -> C,
{
    Screen {
        content,
        _screen: PhantomData,
    }
}

impl<S, F> Screen<S, F> {
    /// Also build `successor` against the rest of the path after this screen.
    pub fn nesting<N: PathBuilder>(self, successor: N) -> NestedScreen<S, F, N> {
        NestedScreen {
            screen: self,
            successor,
        }
    }
}

impl<S, F, C> PathBuilder for Screen<S, F>
where
    S: Any,
    F: Fn(&S) -> C,
{
    type Content = C;

    fn build(&self, path: &[PathElement]) -> Option<C> {
        path.first()?.unwrap_as::<S>().map(&self.content)
    }
}

impl<S, F: Clone> Clone for Screen<S, F> {
    fn clone(&self) -> Self {
        Self {
            content: self.content.clone(),
            _screen: PhantomData,
        }
    }
}

/// A matched screen plus whatever its successor built from the remaining path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nested<C, N> {
    pub content: C,
    pub successor: Option<N>,
}

/// See [`Screen::nesting`].
pub struct NestedScreen<S, F, N> {
    screen: Screen<S, F>,
    successor: N,
}

impl<S, F, C, N> PathBuilder for NestedScreen<S, F, N>
where
    S: Any,
    F: Fn(&S) -> C,
    N: PathBuilder,
{
    type Content = Nested<C, N::Content>;

    // A declining successor leaves the screen itself intact.
    fn build(&self, path: &[PathElement]) -> Option<Self::Content> {
        let content = self.screen.build(path)?;
        let successor = self.successor.build(&path[1..]);
        Some(Nested { content, successor })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::path::ScreenId;
    use crate::test_support::{Marker, Probe, literal, marker_path};

    #[derive(Debug, Clone, PartialEq)]
    struct TypeA(i32);

    #[derive(Debug, Clone, PartialEq)]
    struct TypeB;

    fn element<S: Any + Send + Sync>(id: u64, screen: S) -> PathElement {
        PathElement::new(ScreenId(id), screen)
    }

    #[test]
    fn if_screen_else_matches_head_type() {
        let path = [element(0, TypeA(1))];
        let builder = if_screen_else(|_: &TypeA| literal(42), literal(0));
        assert_eq!(builder.build(&path), Some(EitherAB::A(42)));
    }

    #[test]
    fn if_screen_else_falls_back_on_empty_path() {
        let builder = if_screen_else(|_: &TypeA| literal(42), literal(0));
        assert_eq!(builder.build(&[]), Some(EitherAB::B(0)));
    }

    #[test]
    fn if_screen_else_falls_back_on_other_type() {
        let path = [element(0, TypeB), element(1, TypeA(1))];
        let builder = if_screen_else(|_: &TypeA| literal(42), literal(0));
        assert_eq!(builder.build(&path), Some(EitherAB::B(0)));
    }

    #[test]
    fn if_screen_passes_unwrapped_payload_and_whole_path() {
        let path = [element(0, TypeA(5)), element(1, TypeB)];
        let builder = if_screen_else(
            |a: &TypeA| {
                let value = a.0;
                crate::core::builder::from_fn(move |path: &[PathElement]| {
                    Some(value * 100 + path.len() as i32)
                })
            },
            literal(0),
        );
        assert_eq!(builder.build(&path), Some(EitherAB::A(502)));
    }

    #[test]
    fn if_screen_does_not_retry_else_when_then_declines() {
        let (otherwise, calls) = Probe::new(Some(0));
        let path = [element(0, TypeA(1))];
        let builder = if_screen_else(|_: &TypeA| empty::<i32>(), otherwise);
        assert_eq!(builder.build(&path), None);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn if_screen_without_else_declines_on_mismatch() {
        let builder = if_screen(|a: &TypeA| literal(a.0));
        assert_eq!(builder.build(&[element(0, TypeB)]), None);
        assert_eq!(builder.build(&[]), None);
        let built = builder.build(&[element(0, TypeA(3))]);
        assert_eq!(built.map(EitherAB::into_primary), Some(3));
    }

    #[test]
    fn screen_builds_from_head_only() {
        let builder = screen(|a: &TypeA| a.0);
        assert_eq!(builder.build(&[element(0, TypeA(8))]), Some(8));
        assert_eq!(builder.build(&[element(0, TypeB), element(1, TypeA(8))]), None);
        assert_eq!(builder.build(&[]), None);
    }

    #[test]
    fn nesting_builds_successor_from_tail() {
        let builder = screen(|a: &TypeA| a.0).nesting(screen(|_: &TypeB| "b"));

        let path = [element(0, TypeA(1)), element(1, TypeB)];
        assert_eq!(
            builder.build(&path),
            Some(Nested {
                content: 1,
                successor: Some("b"),
            })
        );

        let path = [element(0, TypeA(1))];
        assert_eq!(
            builder.build(&path),
            Some(Nested {
                content: 1,
                successor: None,
            })
        );
    }

    #[test]
    fn nesting_fails_when_head_does_not_match() {
        let (successor, calls) = Probe::new(Some(1));
        let builder = screen(|_: &TypeB| ()).nesting(successor);
        assert_eq!(builder.build(&marker_path(2)), None);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn markers_are_not_mistaken_for_other_types() {
        let builder = if_screen_else(|m: &Marker| literal(m.0), literal(u32::MAX));
        assert_eq!(builder.build(&marker_path(3)), Some(EitherAB::A(0)));
        assert_eq!(builder.build(&[element(0, TypeB)]), Some(EitherAB::B(u32::MAX)));
    }
}
