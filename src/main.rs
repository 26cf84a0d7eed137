use dioxus::prelude::*;
use experts_land::components::App as ExpertsLandApp;

const MAIN_CSS: Asset = asset!("/assets/experts-land.css");

fn main() {
    // Initialize cross-platform logger (web console + desktop stdout)
    // Use DEBUG level for development builds, INFO for release builds
    #[cfg(debug_assertions)]
    dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("logger failed to init");
    #[cfg(not(debug_assertions))]
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("logger failed to init");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Experts Land" }
        document::Stylesheet { href: MAIN_CSS }

        body { class: "el-body",
            ExpertsLandApp {}
        }
    }
}
