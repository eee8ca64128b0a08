use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant};

use crate::routes::Route;

/// Catch-all for unknown paths.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "not-found",
            h1 { "404" }
            p { "There is nothing at /{path}." }
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| { navigator().push(Route::Home {}); },
                "Back to the home page"
            }
        }
    }
}
