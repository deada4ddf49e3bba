//! Screens and state of the demo application.

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::core::builder::PathBuilder;
use crate::core::path::ScreenId;
use crate::nav::navigator::Navigator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Home;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detail {
    pub item: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Login;

/// State the routing conditions read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    pub logged_in: bool,
    pub premium: bool,
    /// Signed-in account, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<u32>,
    /// Detail items up to this number are viewable without premium.
    pub free_items: u32,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            logged_in: false,
            premium: false,
            account: None,
            free_items: 3,
        }
    }
}

/// Externally owned state handle captured by builder closures.
pub type SharedState = Rc<Cell<AppState>>;

pub fn shared_state(state: AppState) -> SharedState {
    Rc::new(Cell::new(state))
}

/// Serialized form of a path entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ScreenSpec {
    Home,
    Detail { item: u32 },
    Settings,
    Login,
}

impl ScreenSpec {
    pub fn push_onto<B: PathBuilder>(self, navigator: &mut Navigator<B>) -> ScreenId {
        match self {
            ScreenSpec::Home => navigator.push(Home),
            ScreenSpec::Detail { item } => navigator.push(Detail { item }),
            ScreenSpec::Settings => navigator.push(Settings),
            ScreenSpec::Login => navigator.push(Login),
        }
    }
}
