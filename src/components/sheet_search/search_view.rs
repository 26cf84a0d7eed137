use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;

use crate::api;
use crate::scan::{ScanFlow, ScanState};

use super::summary_card::ScanSummaryCard;

// Messages for the scan coroutine
enum ScanMessage {
    RunScan,
}

/// Sheet-archive search view: one button, one request, one summary.
///
/// Each button press spawns its own scan invocation, so a press racing a
/// slow request is possible; [`ScanFlow`]'s token keeps only the newest
/// invocation's outcome.
#[component]
pub fn SheetSearchView() -> Element {
    let flow = use_signal(ScanFlow::new);

    let scan_task = use_coroutine({
        let flow = flow;

        move |mut rx: UnboundedReceiver<ScanMessage>| async move {
            while let Some(msg) = rx.next().await {
                match msg {
                    ScanMessage::RunScan => {
                        let mut flow = flow;
                        let token = flow.write().begin();
                        info!("sheet scan started (invocation {})", token);

                        spawn(async move {
                            let outcome = api::sheets::fetch_sheet_scan().await;
                            if let Err(err) = &outcome {
                                error!("sheet scan failed: {}", err);
                            }

                            if flow.write().settle(token, outcome) {
                                info!("sheet scan settled (invocation {})", token);
                            } else {
                                info!("dropping superseded scan outcome (invocation {})", token);
                            }
                        });
                    }
                }
            }
        }
    });

    let state = flow.read().state().clone();
    let pending = matches!(state, ScanState::Pending);
    let (error_line, summary) = match state {
        ScanState::Idle | ScanState::Pending => (None, None),
        ScanState::Success(summary) => (None, Some(summary)),
        ScanState::Failed { message, stale } => (Some(message), stale),
    };

    rsx! {
        section { class: "el-view el-view--sheet-search",
            h1 { class: "el-page-title", "Google Sheets Archive Search" }

            button {
                class: "el-btn el-btn--primary",
                disabled: pending,
                onclick: move |_| scan_task.send(ScanMessage::RunScan),
                "Run Sheets Search"
            }

            if pending {
                div { class: "el-progress-row",
                    span { class: "el-spinner" }
                    span { class: "el-progress-text", "Scanning in progress..." }
                }
            }

            {error_line.map(|message| rsx! {
                p { class: "el-error-text", "{message}" }
            })}

            // After a failure the last good summary stays visible beneath
            // the error line.
            {summary.map(|summary| rsx! {
                ScanSummaryCard { summary }
            })}
        }
    }
}
