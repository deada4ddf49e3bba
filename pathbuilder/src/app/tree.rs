//! Navigation tree of the demo application.
//!
//! ```text
//! logged in  -> Home -> Detail   (premium or free item) | Paywall
//!                    -> Settings (account)              | signed-out Settings
//! logged out -> Login
//! ```
//!
//! Detail and Settings stack on each other in any order above Home. The stack
//! ends at the first entry no builder claims.

use std::fmt;

use serde::Serialize;

use crate::app::screens::{Detail, Home, Login, Settings, SharedState};
use crate::core::builder::{PathBuilder, PathBuilderExt};
use crate::core::conditional::{any_of, conditional, if_let, if_then_else};
use crate::core::either::EitherAB;
use crate::core::path::PathElement;
use crate::core::screen::{if_screen, screen};

/// What the host shows for one path element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    Home,
    Detail { item: u32 },
    Paywall { item: u32 },
    Settings { account: u32 },
    SignedOutSettings,
    Login,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Home => f.write_str("home"),
            View::Detail { item } => write!(f, "detail item={}", item),
            View::Paywall { item } => write!(f, "paywall item={}", item),
            View::Settings { account } => write!(f, "settings account={}", account),
            View::SignedOutSettings => f.write_str("settings signed-out"),
            View::Login => f.write_str("login"),
        }
    }
}

/// Build the full stack of views for a path, root first.
pub fn app_builder(state: SharedState) -> impl PathBuilder<Content = Vec<View>> {
    let logged_in = {
        let state = state.clone();
        move || state.get().logged_in
    };

    conditional(
        screen(|_: &Home| View::Home).nesting(Stack {
            screen: child_view(state),
        }),
        screen(|_: &Login| View::Login),
        logged_in,
    )
    .map(|content| match content {
        EitherAB::A(home) => {
            let mut stack = vec![home.content];
            stack.extend(home.successor.into_iter().flatten());
            stack
        }
        EitherAB::B(login) => vec![login],
    })
}

/// Repeats `screen` over the path, one view per element, root first.
struct Stack<B> {
    screen: B,
}

impl<B: PathBuilder<Content = View>> PathBuilder for Stack<B> {
    type Content = Vec<View>;

    fn build(&self, path: &[PathElement]) -> Option<Vec<View>> {
        let view = self.screen.build(path)?;
        let mut stack = vec![view];
        // A claimed view implies a non-empty path.
        stack.extend(self.build(&path[1..]).unwrap_or_default());
        Some(stack)
    }
}

fn child_view(state: SharedState) -> impl PathBuilder<Content = View> {
    let detail = {
        let state = state.clone();
        if_screen(move |detail: &Detail| {
            let item = detail.item;
            let state = state.clone();
            if_then_else(
                move || {
                    let current = state.get();
                    current.premium || item <= current.free_items
                },
                screen(move |_: &Detail| View::Detail { item }),
                screen(move |_: &Detail| View::Paywall { item }),
            )
        })
    };

    let settings = if_let(
        move || state.get().account,
        |account: u32| screen(move |_: &Settings| View::Settings { account }),
        screen(|_: &Settings| View::SignedOutSettings),
    );

    any_of(detail, settings).map(|content| match content {
        EitherAB::A(detail) => detail.into_primary().into_inner(),
        EitherAB::B(settings) => settings.into_inner(),
    })
}
