use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};

/// Page-number pagination with Previous/Next buttons.
///
/// The buttons mutate the `page` signal in place; whatever resource
/// depends on it re-fetches, leaving prior results rendered until the
/// new page resolves.
#[component]
pub fn Pagination(page: Signal<i64>, total_pages: i64) -> Element {
    let current = *page.read();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "pagination",
            Button {
                variant: ButtonVariant::Outline,
                disabled: current <= 1,
                onclick: move |_| {
                    let current = *page.read();
                    page.set((current - 1).max(1));
                },
                "Previous"
            }
            span { class: "pagination-info",
                "Page {current} of {total_pages}"
            }
            Button {
                variant: ButtonVariant::Outline,
                disabled: current >= total_pages,
                onclick: move |_| {
                    let current = *page.read();
                    page.set((current + 1).min(total_pages));
                },
                "Next"
            }
        }
    }
}
