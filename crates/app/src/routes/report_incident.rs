use dioxus::prelude::*;
use shared_types::ALL_INCIDENT_KINDS;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, FormSelect,
    Input, PageHeader, PageSubtitle, PageTitle, Textarea,
};

use crate::net;
use crate::notifications::use_notifications;
use crate::time;

/// Ask the browser for the device position. Resolves to (lat, lon).
async fn device_position() -> Result<(f64, f64), String> {
    let js = r#"
        return await new Promise((resolve, reject) => {
            navigator.geolocation.getCurrentPosition(
                (pos) => resolve([pos.coords.latitude, pos.coords.longitude]),
                (err) => reject(err.message),
            );
        });
    "#;
    let value = document::eval(js)
        .await
        .map_err(|err| format!("{err:?}"))?;
    serde_json::from_value(value).map_err(|err| err.to_string())
}

fn kind_label(key: &str) -> &'static str {
    ALL_INCIDENT_KINDS
        .iter()
        .find(|k| k.as_str() == key)
        .map(|k| k.display_name())
        .unwrap_or("Incident")
}

/// Incident report form. Submission is simulated: after a fixed delay
/// the report is acknowledged with a reference number, nothing is sent
/// anywhere.
#[component]
pub fn ReportIncident() -> Element {
    let store = use_notifications();
    let mut kind = use_signal(|| "theft".to_string());
    let mut location = use_signal(String::new);
    let mut date = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);
    let mut locating = use_signal(|| false);
    // Attachments are counted for the confirmation text, never uploaded.
    let mut attachment_count = use_signal(|| 0usize);

    let use_my_location = move |_| {
        locating.set(true);
        spawn(async move {
            match device_position().await {
                Ok((lat, lon)) => match net::reverse_geocode(lat, lon).await {
                    Ok(address) => location.set(address),
                    Err(_) => location.set(format!("{lat:.5}, {lon:.5}")),
                },
                Err(err) => {
                    tracing::warn!("geolocation unavailable: {err}");
                    let mut store = store;
                    store.warning(
                        "Location unavailable",
                        "Could not read your position. Enter the location manually.",
                    );
                }
            }
            locating.set(false);
        });
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if location.peek().trim().is_empty()
            || date.peek().trim().is_empty()
            || description.peek().trim().is_empty()
        {
            form_error.set(Some(
                "Location, date/time and description are required.".to_string(),
            ));
            return;
        }
        form_error.set(None);
        submitting.set(true);

        spawn(async move {
            time::sleep_ms(time::SUBMIT_LATENCY_MS).await;
            let reference = uuid::Uuid::new_v4().simple().to_string();
            let reference = format!("SCC-{}", reference[..8].to_uppercase());
            let attachments = *attachment_count.peek();
            let mut store = store;
            store.success(
                "Report submitted",
                match attachments {
                    0 => format!("Reference {reference}."),
                    n => format!("Reference {reference}, {n} attachment(s) noted."),
                },
            );
            // Mirror into the shared feed the consoles watch.
            store.warning(
                "New incident report",
                format!(
                    "{} reported near {}.",
                    kind_label(kind.peek().as_str()),
                    location.peek().as_str(),
                ),
            );
            location.set(String::new());
            date.set(String::new());
            description.set(String::new());
            kind.set("theft".to_string());
            attachment_count.set(0);
            submitting.set(false);
        });
    };

    rsx! {
        PageHeader {
            PageTitle { "Report an Incident" }
            PageSubtitle { "Your report helps the city respond faster. Dial 100 for emergencies." }
        }

        Card {
            CardHeader {
                CardTitle { "Incident details" }
                CardDescription { "Fields marked required must be filled before submitting." }
            }
            CardContent {
                form { onsubmit: submit,
                    FormSelect {
                        label: "Incident type",
                        value: kind(),
                        onchange: move |evt: FormEvent| kind.set(evt.value()),
                        for item in ALL_INCIDENT_KINDS {
                            option { value: item.as_str(), {item.display_name()} }
                        }
                    }
                    div { class: "field-row",
                        Input {
                            label: "Location",
                            value: location(),
                            placeholder: "Street, landmark or area",
                            required: true,
                            on_input: move |evt: FormEvent| location.set(evt.value()),
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            disabled: locating(),
                            onclick: use_my_location,
                            if locating() { "Locating..." } else { "Use my location" }
                        }
                    }
                    Input {
                        label: "Date and time",
                        input_type: "datetime-local",
                        value: date(),
                        on_input: move |evt: FormEvent| date.set(evt.value()),
                    }
                    div { class: "field-stack",
                        label { class: "input-label", "Photos or videos (optional)" }
                        input {
                            r#type: "file",
                            multiple: true,
                            accept: "image/*,video/*",
                            onchange: move |evt: FormEvent| {
                                attachment_count.set(evt.files().len());
                            },
                        }
                        if *attachment_count.read() > 0 {
                            span { class: "field-hint", "{attachment_count} file(s) attached" }
                        }
                    }
                    Textarea {
                        label: "Description",
                        value: description(),
                        placeholder: "What happened, who was involved, anything distinctive...",
                        required: true,
                        on_input: move |evt: FormEvent| description.set(evt.value()),
                    }
                    if let Some(message) = form_error() {
                        p { class: "form-error", "{message}" }
                    }
                    Button {
                        button_type: "submit",
                        disabled: submitting(),
                        if submitting() { "Submitting..." } else { "Submit report" }
                    }
                }
            }
        }
    }
}
