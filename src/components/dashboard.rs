use dioxus::prelude::*;

use crate::api::auth::{SessionUser, PERM_MANAGE_USERS, PERM_SHEET_SEARCH};
use crate::components::View;

/// Landing view: greeting plus one card per feature the role permits.
#[component]
pub fn DashboardView(user: SessionUser, on_navigate: EventHandler<View>) -> Element {
    let welcome = format!("Welcome back, {}", user.display_name());
    let role_line = format!("Signed in as {} ({})", user.username, user.role);

    rsx! {
        section { class: "el-view el-view--dashboard",
            h1 { class: "el-page-title", "{welcome}" }
            p { class: "el-page-subtitle", "{role_line}" }

            div { class: "el-card-grid",
                if user.has_permission(PERM_SHEET_SEARCH) {
                    FeatureCard {
                        title: "Google Sheets Archive Search",
                        text: "Scan the survey archive and review file counts and dates.",
                        action: "Open sheet search",
                        on_open: move |_| on_navigate.call(View::SheetSearch),
                    }
                }
                if user.has_permission(PERM_MANAGE_USERS) {
                    FeatureCard {
                        title: "User management",
                        text: "Review the user roster, roles, and account status.",
                        action: "Open user management",
                        on_open: move |_| on_navigate.call(View::Admin),
                    }
                }
            }
        }
    }
}

#[component]
fn FeatureCard(
    title: &'static str,
    text: &'static str,
    action: &'static str,
    on_open: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "el-feature-card",
            h2 { class: "el-feature-title", "{title}" }
            p { class: "el-feature-text", "{text}" }
            button {
                class: "el-btn el-btn--primary",
                onclick: move |_| on_open.call(()),
                "{action}"
            }
        }
    }
}
