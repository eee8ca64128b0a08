use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdShield;
use dioxus_free_icons::Icon;
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input,
};

use crate::notifications::use_notifications;
use crate::routes::Route;
use crate::session::{self, Realm};
use crate::time;

/// Credential form shared by the police and admin consoles. Verifies
/// against the realm's fixed demo credentials and sets the session
/// flag on success.
#[component]
pub fn ConsoleLoginCard(
    realm: Realm,
    title: String,
    description: String,
    destination: Route,
) -> Element {
    let store = use_notifications();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        let destination = destination.clone();

        spawn(async move {
            // Stand-in for a credential check round trip.
            time::sleep_ms(time::DEBOUNCE_MS).await;
            let mut store = store;
            if session::verify_realm_credentials(realm, &username.peek(), &password.peek()) {
                session::sign_in(realm);
                store.success(
                    "Signed in",
                    format!("{} session started.", realm.login_route_name()),
                );
                navigator().push(destination);
            } else {
                error_msg.set(Some("Invalid username or password.".to_string()));
                store.error("Login failed", "The credentials did not match.");
            }
            loading.set(false);
        });
    };

    rsx! {
        div { class: "auth-page",
            Card {
                CardHeader {
                    Icon { icon: LdShield, width: 28, height: 28 }
                    CardTitle { "{title}" }
                    CardDescription { "{description}" }
                }
                CardContent {
                    form { onsubmit: submit,
                        Input {
                            label: "Username",
                            value: username(),
                            required: true,
                            on_input: move |evt: FormEvent| username.set(evt.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            value: password(),
                            required: true,
                            on_input: move |evt: FormEvent| password.set(evt.value()),
                        }
                        if let Some(message) = error_msg() {
                            p { class: "form-error", "{message}" }
                        }
                        Button {
                            button_type: "submit",
                            disabled: loading(),
                            if loading() { "Checking..." } else { "Sign in" }
                        }
                    }
                }
                CardFooter {
                    Link { to: Route::Home {}, "Back to the public site" }
                }
            }
        }
    }
}
