use dioxus::prelude::*;

use crate::api::auth::{SessionUser, PERM_MANAGE_USERS, PERM_SHEET_SEARCH};

/// The views reachable from the app bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    SheetSearch,
    Admin,
}

impl View {
    /// All views, in nav order.
    pub const ALL: [View; 3] = [View::Dashboard, View::SheetSearch, View::Admin];

    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::SheetSearch => "Sheet search",
            View::Admin => "User management",
        }
    }

    /// Whether the signed-in user's permissions admit this view.
    pub fn is_allowed(&self, user: &SessionUser) -> bool {
        match self {
            View::Dashboard => true,
            View::SheetSearch => user.has_permission(PERM_SHEET_SEARCH),
            View::Admin => user.has_permission(PERM_MANAGE_USERS),
        }
    }
}

/// Top navigation bar: brand, permitted views, signed-in identity.
#[component]
pub fn AppBar(
    user: SessionUser,
    current_view: ReadSignal<View>,
    on_view_change: EventHandler<View>,
    on_sign_out: EventHandler<()>,
) -> Element {
    let nav_items: Vec<View> = View::ALL
        .into_iter()
        .filter(|view| view.is_allowed(&user))
        .collect();
    let display_name = user.display_name().to_string();

    rsx! {
        header { class: "el-appbar",
            div { class: "el-appbar-brand", "Experts Land" }

            nav { class: "el-appbar-nav",
                for view in nav_items {
                    NavItem {
                        view,
                        active: current_view() == view,
                        on_select: move |_| on_view_change.call(view),
                    }
                }
            }

            div { class: "el-appbar-session",
                span { class: "el-appbar-user", "{display_name}" }
                button {
                    class: "el-btn el-btn--ghost",
                    onclick: move |_| on_sign_out.call(()),
                    "Sign out"
                }
            }
        }
    }
}

#[component]
fn NavItem(view: View, active: bool, on_select: EventHandler<()>) -> Element {
    let class = if active {
        "el-nav-item el-nav-item--active"
    } else {
        "el-nav-item"
    };
    let label = view.label();

    rsx! {
        button {
            class: class,
            onclick: move |_| on_select.call(()),
            "{label}"
        }
    }
}
