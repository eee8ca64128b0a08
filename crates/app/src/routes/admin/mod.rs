pub mod analysis;
pub mod dashboard;
pub mod detection;
pub mod forecast;
pub mod login;
pub mod prediction;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdCalendar, LdLayoutDashboard, LdMapPin, LdShield, LdTrendingUp,
};
use dioxus_free_icons::Icon;
use shared_ui::{
    Button, ButtonVariant, Sidebar, SidebarFooter, SidebarHeader, SidebarInset, SidebarNav,
    SidebarShell,
};

use crate::routes::Route;
use crate::session::{self, Realm};

/// Sidebar chrome around every admin analytics page.
#[component]
pub fn AdminLayout() -> Element {
    let current: Route = use_route();

    let nav_link = |route: Route, icon: Element, label: &'static str| {
        let class = if current == route {
            "sidebar-link active"
        } else {
            "sidebar-link"
        };
        rsx! {
            Link { to: route, class: class,
                {icon}
                span { "{label}" }
            }
        }
    };

    rsx! {
        SidebarShell {
            Sidebar {
                SidebarHeader {
                    Icon { icon: LdShield, width: 22, height: 22 }
                    span { "Crime Connect Admin" }
                }
                SidebarNav {
                    {nav_link(
                        Route::AdminDashboard {},
                        rsx! { Icon { icon: LdLayoutDashboard, width: 16, height: 16 } },
                        "Dashboard",
                    )}
                    {nav_link(
                        Route::AdminDetection {},
                        rsx! { Icon { icon: LdMapPin, width: 16, height: 16 } },
                        "Detection",
                    )}
                    {nav_link(
                        Route::AdminPrediction {},
                        rsx! { Icon { icon: LdTrendingUp, width: 16, height: 16 } },
                        "Prediction",
                    )}
                    {nav_link(
                        Route::AdminAnalysis {},
                        rsx! { Icon { icon: LdActivity, width: 16, height: 16 } },
                        "Analysis",
                    )}
                    {nav_link(
                        Route::AdminForecast {},
                        rsx! { Icon { icon: LdCalendar, width: 16, height: 16 } },
                        "Forecast",
                    )}
                }
                SidebarFooter {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            session::sign_out(Realm::Admin);
                            navigator().push(Route::AdminLogin {});
                        },
                        "Sign out"
                    }
                }
            }
            SidebarInset {
                Outlet::<Route> {}
            }
        }
    }
}
