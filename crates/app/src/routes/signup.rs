use dioxus::prelude::*;
use shared_types::{SignupForm, UserRecord};
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input,
};

use crate::notifications::use_notifications;
use crate::routes::Route;
use crate::session;

/// Account creation. The record lands in browser storage alongside any
/// accounts created earlier on this device.
#[component]
pub fn Signup() -> Element {
    let store = use_notifications();
    let citizen = use_context::<Signal<Option<UserRecord>>>();
    let mut form = use_signal(SignupForm::default);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);

        spawn(async move {
            let mut users = session::load_users().await;
            match form.peek().validate(&users) {
                Ok(record) => {
                    users.push(record.clone());
                    let saved = session::save_users(&users)
                        .and_then(|_| session::store_current_user(&record));
                    match saved {
                        Ok(()) => {
                            let mut citizen = citizen;
                            citizen.set(Some(record.clone()));
                            let mut store = store;
                            store.success(
                                "Account created",
                                format!("Welcome to Surat Crime Connect, {}.", record.name),
                            );
                            navigator().push(Route::Home {});
                        }
                        Err(err) => {
                            tracing::warn!("could not persist account: {err}");
                            error_msg.set(Some("Could not save the account on this device.".to_string()));
                        }
                    }
                }
                Err(message) => error_msg.set(Some(message)),
            }
            loading.set(false);
        });
    };

    rsx! {
        div { class: "auth-page",
            Card {
                CardHeader {
                    CardTitle { "Create an account" }
                    CardDescription { "Accounts live in this browser only." }
                }
                CardContent {
                    form { onsubmit: submit,
                        Input {
                            label: "User ID",
                            value: form.read().id.clone(),
                            required: true,
                            on_input: move |evt: FormEvent| form.with_mut(|f| f.id = evt.value()),
                        }
                        Input {
                            label: "Full name",
                            value: form.read().name.clone(),
                            required: true,
                            on_input: move |evt: FormEvent| form.with_mut(|f| f.name = evt.value()),
                        }
                        Input {
                            label: "Email",
                            input_type: "email",
                            value: form.read().email.clone(),
                            required: true,
                            on_input: move |evt: FormEvent| form.with_mut(|f| f.email = evt.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            value: form.read().password.clone(),
                            required: true,
                            on_input: move |evt: FormEvent| form.with_mut(|f| f.password = evt.value()),
                        }
                        Input {
                            label: "Confirm password",
                            input_type: "password",
                            value: form.read().confirm_password.clone(),
                            required: true,
                            on_input: move |evt: FormEvent| {
                                form.with_mut(|f| f.confirm_password = evt.value())
                            },
                        }
                        if let Some(message) = error_msg() {
                            p { class: "form-error", "{message}" }
                        }
                        Button {
                            button_type: "submit",
                            disabled: loading(),
                            if loading() { "Creating..." } else { "Create account" }
                        }
                    }
                }
                CardFooter {
                    span { "Already registered? " }
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
