use dioxus::prelude::*;

/// Open/closed state shared between trigger and content.
#[derive(Clone, Copy)]
struct DropdownState {
    open: Signal<bool>,
}

/// Click-toggled dropdown. The trigger flips the open flag; the content
/// panel renders only while open.
#[component]
pub fn DropdownMenu(children: Element) -> Element {
    use_context_provider(|| DropdownState {
        open: Signal::new(false),
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "dropdown", {children} }
    }
}

/// Button that toggles the menu. `on_open` fires only on the
/// closed-to-open transition.
#[component]
pub fn DropdownMenuTrigger(
    #[props(default)] on_open: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    let mut state = use_context::<DropdownState>();

    rsx! {
        button {
            class: "dropdown-trigger",
            onclick: move |_| {
                let next = !*state.open.read();
                state.open.set(next);
                if next {
                    if let Some(handler) = &on_open {
                        handler.call(());
                    }
                }
            },
            {children}
        }
    }
}

#[component]
pub fn DropdownMenuContent(children: Element) -> Element {
    let state = use_context::<DropdownState>();

    rsx! {
        if *state.open.read() {
            div { class: "dropdown-content", {children} }
        }
    }
}

#[component]
pub fn DropdownMenuItem(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "dropdown-item",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
