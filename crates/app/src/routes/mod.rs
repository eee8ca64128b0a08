pub mod about;
pub mod admin;
pub mod community;
pub mod console_login;
pub mod home;
pub mod login;
pub mod news;
pub mod not_found;
pub mod police;
pub mod report_incident;
pub mod safety_alerts;
pub mod signup;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMoon, LdShield, LdSun};
use dioxus_free_icons::Icon;
use shared_types::UserRecord;
use shared_ui::theme::{set_theme, stored_theme, ThemeMode};
use shared_ui::{
    DropdownMenu, DropdownMenuContent, DropdownMenuItem, DropdownMenuTrigger, Navbar, NavbarActions,
    NavbarBrand, NavbarNav,
};

use crate::components::NotificationBell;
use crate::session::{self, Realm};

use about::About;
use admin::analysis::AdminAnalysis;
use admin::dashboard::AdminDashboard;
use admin::detection::AdminDetection;
use admin::forecast::AdminForecast;
use admin::login::AdminLogin;
use admin::prediction::AdminPrediction;
use admin::AdminLayout;
use community::Community;
use home::Home;
use login::Login;
use news::News;
use not_found::NotFound;
use police::dashboard::PoliceDashboard;
use police::login::PoliceLogin;
use report_incident::ReportIncident;
use safety_alerts::SafetyAlerts;
use signup::Signup;

/// Application routes. Public pages share the navbar layout; the
/// police and admin consoles sit behind their session guards.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(PublicLayout)]
    #[route("/")]
    Home {},
    #[route("/news")]
    News {},
    #[route("/community")]
    Community {},
    #[route("/report-incident")]
    ReportIncident {},
    #[route("/safety-alerts")]
    SafetyAlerts {},
    #[route("/about")]
    About {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[end_layout]
    #[route("/police/login")]
    PoliceLogin {},
    #[layout(PoliceGuard)]
    #[route("/police/dashboard")]
    PoliceDashboard {},
    #[end_layout]
    #[route("/admin/login")]
    AdminLogin {},
    #[layout(AdminGuard)]
    #[layout(AdminLayout)]
    #[route("/admin/dashboard")]
    AdminDashboard {},
    #[route("/admin/detection")]
    AdminDetection {},
    #[route("/admin/prediction")]
    AdminPrediction {},
    #[route("/admin/analysis")]
    AdminAnalysis {},
    #[route("/admin/forecast")]
    AdminForecast {},
    #[end_layout]
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Gate on a realm's session flag. The flag read is async (it goes
/// through the browser), so render a placeholder until it resolves and
/// bounce to the realm's login page when it comes back false.
#[component]
fn RealmGuard(realm: Realm, login: Route) -> Element {
    let flag = use_resource(move || session::realm_flag(realm));

    let state: Option<bool> = *flag.read();
    match state {
        Some(true) => rsx! { Outlet::<Route> {} },
        Some(false) => {
            navigator().push(login);
            rsx! {
                div { class: "guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        None => rsx! {
            div { class: "guard-loading",
                p { "Checking session..." }
            }
        },
    }
}

#[component]
fn PoliceGuard() -> Element {
    rsx! {
        RealmGuard { realm: Realm::Police, login: Route::PoliceLogin {} }
    }
}

#[component]
fn AdminGuard() -> Element {
    rsx! {
        RealmGuard { realm: Realm::Admin, login: Route::AdminLogin {} }
    }
}

/// Navbar plus footer wrapped around every public page. The signed-in
/// citizen (if any) is shared with the login and signup pages through
/// context so the navbar follows their changes.
#[component]
fn PublicLayout() -> Element {
    let mut theme = use_signal(ThemeMode::default);
    let mut citizen = use_context_provider(|| Signal::new(Option::<UserRecord>::None));

    // Start the toggle in the persisted mode and pick up the account
    // from the last visit.
    use_future(move || async move {
        theme.set(stored_theme().await);
        citizen.set(session::current_user().await);
    });

    rsx! {
        Navbar {
            NavbarBrand {
                Icon { icon: LdShield, width: 22, height: 22 }
                Link { to: Route::Home {}, "Surat Crime Connect" }
            }
            NavbarNav {
                Link { to: Route::Home {}, "Home" }
                Link { to: Route::News {}, "News" }
                Link { to: Route::Community {}, "Community" }
                Link { to: Route::ReportIncident {}, "Report" }
                Link { to: Route::SafetyAlerts {}, "Alerts" }
                Link { to: Route::About {}, "About" }
            }
            NavbarActions {
                button {
                    class: "theme-toggle",
                    onclick: move |_| {
                        let next = theme.read().toggled();
                        theme.set(next);
                        set_theme(next);
                    },
                    if *theme.read() == ThemeMode::Light {
                        Icon { icon: LdMoon, width: 16, height: 16 }
                    } else {
                        Icon { icon: LdSun, width: 16, height: 16 }
                    }
                }
                NotificationBell {}
                if let Some(user) = citizen() {
                    span { class: "navbar-user", "{user.name}" }
                    button {
                        class: "navbar-signout",
                        onclick: move |_| {
                            session::clear_current_user();
                            citizen.set(None);
                        },
                        "Sign out"
                    }
                } else {
                    Link { class: "navbar-link", to: Route::Login {}, "Login" }
                }
                DropdownMenu {
                    DropdownMenuTrigger { "Consoles" }
                    DropdownMenuContent {
                        DropdownMenuItem {
                            onclick: move |_| { navigator().push(Route::PoliceLogin {}); },
                            "Police"
                        }
                        DropdownMenuItem {
                            onclick: move |_| { navigator().push(Route::AdminLogin {}); },
                            "Admin"
                        }
                    }
                }
            }
        }
        div { class: "page-body",
            Outlet::<Route> {}
        }
        footer { class: "site-footer",
            p { "Surat Crime Connect — a community safety initiative for Surat city." }
            p { "Emergency? Dial 100 (police), 1930 (cyber fraud), 108 (ambulance)." }
        }
    }
}
