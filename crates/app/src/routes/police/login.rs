use dioxus::prelude::*;

use crate::routes::console_login::ConsoleLoginCard;
use crate::routes::Route;
use crate::session::Realm;

#[component]
pub fn PoliceLogin() -> Element {
    rsx! {
        ConsoleLoginCard {
            realm: Realm::Police,
            title: "Police Console",
            description: "Restricted access for beat officers and station staff.",
            destination: Route::PoliceDashboard {},
        }
    }
}
