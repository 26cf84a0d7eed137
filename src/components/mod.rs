//! UI components for the Experts Land client.
//!
//! This module contains all Dioxus components that make up the user
//! interface:
//!
//! - `app_shell`: AppBar, Footer, and the `View` navigation enum
//! - `auth`: login screen
//! - `dashboard`: landing view with permission-filtered feature cards
//! - `sheet_search`: the sheet-archive scan view
//! - `admin`: user roster for administrators
//!
//! # Context Providers
//!
//! The signed-in session is shared through Dioxus context:
//!
//! ```ignore
//! let session = use_session();
//! match session.read().clone() {
//!     SessionStatus::SignedIn(user) => { /* ... */ }
//!     SessionStatus::SignedOut => { /* show login */ }
//!     SessionStatus::Unknown => { /* still probing */ }
//! }
//! ```

mod admin;
mod app_shell;
mod auth;
mod dashboard;
pub mod sheet_search;

pub use admin::AdminView;
pub use app_shell::{AppBar, Footer, View};
pub use auth::LoginView;
pub use dashboard::DashboardView;
pub use sheet_search::SheetSearchView;

use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;

use crate::api;
use crate::api::auth::SessionUser;

/// Authentication state for the whole app.
///
/// `Unknown` covers the startup window while the session probe is in
/// flight, so a reload of a signed-in page does not flash the login form.
#[derive(Clone, PartialEq)]
pub enum SessionStatus {
    Unknown,
    SignedOut,
    SignedIn(SessionUser),
}

/// Session context accessor for child components.
pub fn use_session() -> Signal<SessionStatus> {
    use_context::<Signal<SessionStatus>>()
}

#[component]
pub fn App() -> Element {
    let session = use_signal(|| SessionStatus::Unknown);
    use_context_provider(|| session);

    // Probe the backend once for an ambient session cookie. The guard keeps
    // the effect from re-probing when the session changes later.
    let mut session_signal = session;
    use_effect(move || {
        if matches!(*session_signal.read(), SessionStatus::Unknown) {
            spawn(async move {
                match api::auth::current_user().await {
                    Ok(user) => {
                        info!("restored session for {}", user.username);
                        session_signal.set(SessionStatus::SignedIn(user));
                    }
                    Err(err) => {
                        info!("no active session: {}", err);
                        session_signal.set(SessionStatus::SignedOut);
                    }
                }
            });
        }
    });

    let status = session.read().clone();
    rsx! {
        div { class: "el-app",
            {match status {
                SessionStatus::Unknown => rsx! {
                    div { class: "el-splash",
                        span { class: "el-spinner" }
                    }
                },
                SessionStatus::SignedOut => rsx! { LoginView {} },
                SessionStatus::SignedIn(user) => rsx! { AuthenticatedShell { user } },
            }}
        }
    }
}

/// Everything behind the login gate: app bar, active view, footer.
#[component]
fn AuthenticatedShell(user: SessionUser) -> Element {
    let mut current_view = use_signal(|| View::Dashboard);
    let mut session = use_session();

    // A view the user's role does not permit falls back to the dashboard,
    // mirroring the backend's own permission redirects.
    let requested = current_view();
    let view = if requested.is_allowed(&user) {
        requested
    } else {
        View::Dashboard
    };

    let handle_sign_out = move |_| {
        spawn(async move {
            // Sign out locally even when the request fails; the cookie may
            // already be gone.
            if let Err(err) = api::auth::logout().await {
                error!("sign-out request failed: {}", err);
            }
            session.set(SessionStatus::SignedOut);
        });
    };

    rsx! {
        AppBar {
            user: user.clone(),
            current_view,
            on_view_change: move |v| current_view.set(v),
            on_sign_out: handle_sign_out,
        }

        main { class: "el-main",
            if view == View::Dashboard {
                DashboardView {
                    user: user.clone(),
                    on_navigate: move |v| current_view.set(v),
                }
            } else if view == View::SheetSearch {
                SheetSearchView {}
            } else {
                AdminView {}
            }
        }

        Footer {}
    }
}
