use dioxus::prelude::*;

/// Footer shown beneath every view.
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "el-footer",
            span { class: "el-footer-text",
                "Experts Land • internal tools"
            }
        }
    }
}
