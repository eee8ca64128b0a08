use dioxus::prelude::*;

use crate::routes::console_login::ConsoleLoginCard;
use crate::routes::Route;
use crate::session::Realm;

#[component]
pub fn AdminLogin() -> Element {
    rsx! {
        ConsoleLoginCard {
            realm: Realm::Admin,
            title: "Admin Console",
            description: "Analytics and oversight for authorised municipal staff.",
            destination: Route::AdminDashboard {},
        }
    }
}
