//! Host-side owner of the path and the composed builder.

use std::any::{Any, type_name};

use tracing::debug;

use crate::core::builder::PathBuilder;
use crate::core::path::{Path, PathElement, ScreenId};

/// Holds the current path and rebuilds content from scratch on request.
///
/// Ids are assigned sequentially from 0 and never reused within one navigator.
pub struct Navigator<B> {
    builder: B,
    path: Path,
    next_id: u64,
}

impl<B: PathBuilder> Navigator<B> {
    pub fn new(builder: B) -> Self {
        Self {
            builder,
            path: Path::new(),
            next_id: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a screen to the path and return its id.
    pub fn push<S>(&mut self, screen: S) -> ScreenId
    where
        S: Any + Send + Sync,
    {
        let id = ScreenId(self.next_id);
        self.next_id += 1;
        debug!(id = %id, screen = type_name::<S>(), depth = self.path.len() + 1, "push");
        self.path.push(PathElement::new(id, screen));
        id
    }

    pub fn pop(&mut self) -> Option<ScreenId> {
        let popped = self.path.pop().map(|element| element.id());
        debug!(popped = ?popped, depth = self.path.len(), "pop");
        popped
    }

    /// Pop every screen above `id`. Returns `false` if `id` is not on the path.
    pub fn go_back_to(&mut self, id: ScreenId) -> bool {
        let found = self.path.truncate_after(id);
        debug!(id = %id, found, depth = self.path.len(), "go back");
        found
    }

    pub fn reset(&mut self) {
        debug!(depth = self.path.len(), "reset path");
        self.path.clear();
    }

    /// Run the builder against the current path.
    ///
    /// Every call re-evaluates all conditions; nothing is cached between calls.
    pub fn recompute(&self) -> Option<B::Content> {
        let content = self.builder.build(&self.path);
        debug!(
            depth = self.path.len(),
            matched = content.is_some(),
            "recomputed content"
        );
        content
    }
}
