use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;

use crate::api;
use crate::api::users::UserRecord;
use crate::utils::format_long_date;

const ROSTER_FAILED_MESSAGE: &str = "Failed to load users. Please try again.";

#[derive(Clone, PartialEq)]
enum RosterState {
    Loading,
    Loaded(Vec<UserRecord>),
    Failed(String),
}

/// Admin-only roster of all accounts, fetched once when the view mounts.
#[component]
pub fn AdminView() -> Element {
    let mut roster = use_signal(|| RosterState::Loading);

    use_effect(move || {
        spawn(async move {
            match api::users::list_users().await {
                Ok(users) => {
                    info!("loaded {} users", users.len());
                    roster.set(RosterState::Loaded(users));
                }
                Err(err) => {
                    error!("user roster fetch failed: {}", err);
                    roster.set(RosterState::Failed(ROSTER_FAILED_MESSAGE.to_string()));
                }
            }
        });
    });

    let state = roster.read().clone();

    rsx! {
        section { class: "el-view el-view--admin",
            h1 { class: "el-page-title", "User management" }

            {match state {
                RosterState::Loading => rsx! {
                    div { class: "el-progress-row",
                        span { class: "el-spinner" }
                        span { class: "el-progress-text", "Loading users…" }
                    }
                },
                RosterState::Failed(message) => rsx! {
                    p { class: "el-error-text", "{message}" }
                },
                RosterState::Loaded(users) => rsx! {
                    table { class: "el-table",
                        thead {
                            tr {
                                th { "User" }
                                th { "Role" }
                                th { "Status" }
                                th { "Created" }
                            }
                        }
                        tbody {
                            for (idx, user) in users.iter().enumerate() {
                                UserRow { key: "{idx}", user: user.clone() }
                            }
                        }
                    }
                },
            }}
        }
    }
}

#[component]
fn UserRow(user: UserRecord) -> Element {
    let name = user
        .full_name
        .clone()
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| user.username.clone());
    let created = format_long_date(Some(&user.created_at));
    let (status_class, status_label) = if user.is_active {
        ("el-badge el-badge--active", "Active")
    } else {
        ("el-badge el-badge--inactive", "Inactive")
    };

    rsx! {
        tr {
            td { "{name}" }
            td { "{user.role}" }
            td {
                span { class: status_class, "{status_label}" }
            }
            td { "{created}" }
        }
    }
}
