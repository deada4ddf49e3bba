//! Path elements and the owned path the host hands to builders.

use std::any::{Any, type_name};
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Host-assigned identity of a path element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScreenId(pub u64);

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One opaque, typed payload in a path.
///
/// Cloning is cheap: the payload is shared.
#[derive(Clone)]
pub struct PathElement {
    id: ScreenId,
    type_name: &'static str,
    screen: Arc<dyn Any + Send + Sync>,
}

impl PathElement {
    pub fn new<S>(id: ScreenId, screen: S) -> Self
    where
        S: Any + Send + Sync,
    {
        Self {
            id,
            type_name: type_name::<S>(),
            screen: Arc::new(screen),
        }
    }

    pub fn id(&self) -> ScreenId {
        self.id
    }

    /// Rust type name of the payload, for diagnostics only.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Borrow the payload as `S`.
    ///
    /// Returns `None` when the payload has another concrete type; a mismatch
    /// is a no-match, never an error.
    pub fn unwrap_as<S: Any>(&self) -> Option<&S> {
        self.screen.downcast_ref::<S>()
    }

    pub fn is<S: Any>(&self) -> bool {
        self.screen.is::<S>()
    }
}

impl fmt::Debug for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathElement")
            .field("id", &self.id)
            .field("type", &self.type_name)
            .finish()
    }
}

/// Ordered, possibly empty sequence of path elements owned by the host.
///
/// Dereferences to `[PathElement]`, which is what builders consume.
#[derive(Debug, Clone, Default)]
pub struct Path {
    elements: Vec<PathElement>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: PathElement) {
        self.elements.push(element);
    }

    pub fn pop(&mut self) -> Option<PathElement> {
        self.elements.pop()
    }

    /// Drop every element after `id`, keeping `id` itself.
    ///
    /// Returns `false` and leaves the path untouched if `id` is not present.
    pub fn truncate_after(&mut self, id: ScreenId) -> bool {
        match self.elements.iter().position(|element| element.id == id) {
            Some(index) => {
                self.elements.truncate(index + 1);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn ids(&self) -> Vec<ScreenId> {
        self.elements.iter().map(PathElement::id).collect()
    }
}

impl Deref for Path {
    type Target = [PathElement];

    fn deref(&self) -> &Self::Target {
        &self.elements
    }
}

impl FromIterator<PathElement> for Path {
    fn from_iter<I: IntoIterator<Item = PathElement>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}
