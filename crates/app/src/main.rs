use dioxus::prelude::*;

mod components;
mod data;
mod net;
mod notifications;
mod routes;
mod session;
mod time;

use notifications::NotificationStore;
use routes::Route;
use shared_ui::theme::ThemeSeed;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Notification store lives at the root so every page and the
    // navbar bell observe the same list.
    use_context_provider(NotificationStore::new);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        ThemeSeed {}
        Router::<Route> {}
    }
}
