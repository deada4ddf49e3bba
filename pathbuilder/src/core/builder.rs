//! The `PathBuilder` contract and the small builders every combinator leans on.

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

use crate::core::path::PathElement;

/// Attempts to construct content from a path.
///
/// `None` means "not responsible for this path under the current conditions".
/// It is the expected outcome that drives alternation, not a fault.
///
/// The host calls `build` on every path change. Implementations must not
/// mutate observable state and must return the same answer for the same path
/// and the same external state.
pub trait PathBuilder {
    type Content;

    fn build(&self, path: &[PathElement]) -> Option<Self::Content>;
}

impl<B: PathBuilder + ?Sized> PathBuilder for &B {
    type Content = B::Content;

    fn build(&self, path: &[PathElement]) -> Option<Self::Content> {
        (**self).build(path)
    }
}

impl<B: PathBuilder + ?Sized> PathBuilder for Box<B> {
    type Content = B::Content;

    fn build(&self, path: &[PathElement]) -> Option<Self::Content> {
        (**self).build(path)
    }
}

impl<B: PathBuilder + ?Sized> PathBuilder for Rc<B> {
    type Content = B::Content;

    fn build(&self, path: &[PathElement]) -> Option<Self::Content> {
        (**self).build(path)
    }
}

impl<B: PathBuilder + ?Sized> PathBuilder for Arc<B> {
    type Content = B::Content;

    fn build(&self, path: &[PathElement]) -> Option<Self::Content> {
        (**self).build(path)
    }
}

/// Type-erased builder.
pub type AnyPathBuilder<'a, C> = Box<dyn PathBuilder<Content = C> + 'a>;

/// Builder that never produces content.
pub struct Empty<C> {
    _content: PhantomData<fn() -> C>,
}

impl<C> Empty<C> {
    pub fn new() -> Self {
        Self {
            _content: PhantomData,
        }
    }
}

impl<C> Default for Empty<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for Empty<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Empty<C> {}

impl<C> fmt::Debug for Empty<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

impl<C> PathBuilder for Empty<C> {
    type Content = C;

    fn build(&self, _path: &[PathElement]) -> Option<C> {
        None
    }
}

pub fn empty<C>() -> Empty<C> {
    Empty::new()
}

/// Builder backed by a plain function of the path.
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

pub fn from_fn<F, C>(f: F) -> FromFn<F>
where
    F: Fn(&[PathElement]) -> Option<C>,
{
    FromFn { f }
}

impl<F, C> PathBuilder for FromFn<F>
where
    F: Fn(&[PathElement]) -> Option<C>,
{
    type Content = C;

    fn build(&self, path: &[PathElement]) -> Option<C> {
        (self.f)(path)
    }
}

/// See [`PathBuilderExt::map`].
#[derive(Clone)]
pub struct Map<B, F> {
    builder: B,
    f: F,
}

impl<B, F, C> PathBuilder for Map<B, F>
where
    B: PathBuilder,
    F: Fn(B::Content) -> C,
{
    type Content = C;

    fn build(&self, path: &[PathElement]) -> Option<C> {
        self.builder.build(path).map(&self.f)
    }
}

pub trait PathBuilderExt: PathBuilder + Sized {
    /// Transform produced content. Absence passes through untouched.
    fn map<F, C>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Content) -> C,
    {
        Map { builder: self, f }
    }

    fn boxed<'a>(self) -> AnyPathBuilder<'a, Self::Content>
    where
        Self: 'a,
    {
        Box::new(self)
    }
}

impl<B: PathBuilder> PathBuilderExt for B {}
