use dioxus::prelude::*;

/// Two-column shell: fixed sidebar on the left, scrollable inset on
/// the right.
#[component]
pub fn SidebarShell(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "sidebar-shell", {children} }
    }
}

/// The dark navigation column.
#[component]
pub fn Sidebar(children: Element) -> Element {
    rsx! {
        aside { class: "sidebar", {children} }
    }
}

/// Brand block at the top of the sidebar.
#[component]
pub fn SidebarHeader(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-header", {children} }
    }
}

/// Vertical link list; grows to push the footer down.
#[component]
pub fn SidebarNav(children: Element) -> Element {
    rsx! {
        nav { class: "sidebar-nav", {children} }
    }
}

/// Bottom area of the sidebar, typically the logout button.
#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-footer", {children} }
    }
}

/// Content area next to the sidebar.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        main { class: "sidebar-inset", {children} }
    }
}
