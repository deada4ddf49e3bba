//! Test-only builders, paths and condition handles.

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Result;

use crate::core::builder::PathBuilder;
use crate::core::path::{PathElement, ScreenId};
use crate::io::scenario::{Scenario, write_scenario};

/// Builder that returns the same canned answer for every path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixed<C>(pub Option<C>);

impl<C: Clone> PathBuilder for Fixed<C> {
    type Content = C;

    fn build(&self, _path: &[PathElement]) -> Option<C> {
        self.0.clone()
    }
}

/// Always produces `value`.
pub fn literal<C: Clone>(value: C) -> Fixed<C> {
    Fixed(Some(value))
}

/// Always declines.
pub fn declining<C: Clone>() -> Fixed<C> {
    Fixed(None)
}

/// Fixed builder that counts how often it was attempted.
pub struct Probe<C> {
    result: Option<C>,
    calls: Rc<Cell<usize>>,
}

impl<C> Probe<C> {
    pub fn new(result: Option<C>) -> (Self, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        (
            Self {
                result,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

impl<C: Clone> PathBuilder for Probe<C> {
    type Content = C;

    fn build(&self, _path: &[PathElement]) -> Option<C> {
        self.calls.set(self.calls.get() + 1);
        self.result.clone()
    }
}

/// Distinct payload type for synthetic paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker(pub u32);

/// Path of `len` markers numbered from 0, with matching ids.
pub fn marker_path(len: u32) -> Vec<PathElement> {
    (0..len)
        .map(|n| PathElement::new(ScreenId(u64::from(n)), Marker(n)))
        .collect()
}

/// Externally owned flag plus a condition closure reading it.
pub fn toggle(initial: bool) -> (Rc<Cell<bool>>, impl Fn() -> bool + Clone) {
    let flag = Rc::new(Cell::new(initial));
    let reader = flag.clone();
    (flag, move || reader.get())
}

/// Write `scenario` into a fresh temp dir; keep the guard alive while using the path.
pub fn scenario_fixture(scenario: &Scenario) -> Result<(tempfile::TempDir, PathBuf)> {
    let temp = tempfile::tempdir()?;
    let path = temp.path().join("scenario.toml");
    write_scenario(&path, scenario)?;
    Ok((temp, path))
}
