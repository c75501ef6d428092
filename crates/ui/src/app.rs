use dioxus::prelude::*;

use crate::views::SurveyView;

#[component]
pub fn App() -> Element {
    rsx! {
        // Stable OS/window title.
        document::Title { "Pulse" }

        // A single root container for global layout CSS hooks.
        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                SurveyView {}
            }
        }
    }
}
