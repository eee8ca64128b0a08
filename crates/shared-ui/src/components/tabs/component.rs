use dioxus::prelude::*;

/// Active tab value shared between triggers and content panels.
#[derive(Clone, Copy)]
struct TabsState {
    active: Signal<String>,
}

/// Signal-driven tab group. `default_value` selects the initially
/// visible panel; triggers switch it by value.
#[component]
pub fn Tabs(default_value: String, children: Element) -> Element {
    use_context_provider(|| TabsState {
        active: Signal::new(default_value.clone()),
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "tabs", {children} }
    }
}

#[component]
pub fn TabList(children: Element) -> Element {
    rsx! {
        div { class: "tab-list", role: "tablist", {children} }
    }
}

#[component]
pub fn TabTrigger(value: String, children: Element) -> Element {
    let mut state = use_context::<TabsState>();
    let is_active = *state.active.read() == value;

    rsx! {
        button {
            class: "tab-trigger",
            role: "tab",
            "data-active": is_active,
            onclick: move |_| state.active.set(value.clone()),
            {children}
        }
    }
}

#[component]
pub fn TabContent(value: String, children: Element) -> Element {
    let state = use_context::<TabsState>();

    rsx! {
        if *state.active.read() == value {
            div { class: "tab-content", role: "tabpanel", {children} }
        }
    }
}
