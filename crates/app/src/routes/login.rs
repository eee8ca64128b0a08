use dioxus::prelude::*;
use shared_types::user::match_credentials;
use shared_types::UserRecord;
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input,
};

use crate::notifications::use_notifications;
use crate::routes::Route;
use crate::session;

/// Citizen login against the locally-registered account list.
#[component]
pub fn Login() -> Element {
    let store = use_notifications();
    let citizen = use_context::<Signal<Option<UserRecord>>>();
    let mut user_id = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);

        spawn(async move {
            let users = session::load_users().await;
            match match_credentials(&users, &user_id.peek(), &password.peek()) {
                Some(user) => {
                    let name = user.name.clone();
                    if let Err(err) = session::store_current_user(user) {
                        tracing::warn!("could not persist session: {err}");
                    }
                    let mut citizen = citizen;
                    citizen.set(Some(user.clone()));
                    let mut store = store;
                    store.success("Welcome back", format!("Signed in as {name}."));
                    navigator().push(Route::Home {});
                }
                None => {
                    error_msg.set(Some("Invalid user ID or password.".to_string()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div { class: "auth-page",
            Card {
                CardHeader {
                    CardTitle { "Login" }
                    CardDescription { "Sign in with the account you created on this device." }
                }
                CardContent {
                    form { onsubmit: submit,
                        Input {
                            label: "User ID",
                            value: user_id(),
                            required: true,
                            on_input: move |evt: FormEvent| user_id.set(evt.value()),
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
                            if loading() { "Signing in..." } else { "Sign in" }
                        }
                    }
                }
                CardFooter {
                    span { "New here? " }
                    Link { to: Route::Signup {}, "Create an account" }
                }
            }
        }
    }
}
