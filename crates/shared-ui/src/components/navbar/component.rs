use dioxus::prelude::*;

/// Top navigation bar for the public site.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "navbar",
            div { class: "navbar-inner", {children} }
        }
    }
}

/// Brand block at the left edge of the navbar.
#[component]
pub fn NavbarBrand(children: Element) -> Element {
    rsx! {
        div { class: "navbar-brand", {children} }
    }
}

/// Horizontal list of navigation links.
#[component]
pub fn NavbarNav(children: Element) -> Element {
    rsx! {
        div { class: "navbar-nav", {children} }
    }
}

/// Right-aligned actions (login links, bell widget).
#[component]
pub fn NavbarActions(children: Element) -> Element {
    rsx! {
        div { class: "navbar-actions", {children} }
    }
}
