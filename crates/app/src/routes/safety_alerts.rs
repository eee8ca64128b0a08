use dioxus::prelude::*;
use shared_types::{filter_alerts, AlertType, Severity};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, FormSelect,
    PageHeader, PageSubtitle, PageTitle,
};

use crate::data;

fn severity_variant(severity: Severity) -> BadgeVariant {
    match severity {
        Severity::Low => BadgeVariant::Secondary,
        Severity::Medium => BadgeVariant::Warning,
        Severity::High => BadgeVariant::Destructive,
    }
}

fn type_variant(alert_type: AlertType) -> BadgeVariant {
    match alert_type {
        AlertType::Emergency => BadgeVariant::Destructive,
        AlertType::Crime => BadgeVariant::Primary,
        AlertType::Traffic => BadgeVariant::Secondary,
    }
}

/// Safety alerts with type, area and severity filters. An empty filter
/// value means "show everything".
#[component]
pub fn SafetyAlerts() -> Element {
    let mut type_filter = use_signal(String::new);
    let mut area_filter = use_signal(String::new);
    let mut severity_filter = use_signal(String::new);

    let alerts = data::sample_alerts();
    let visible = filter_alerts(&alerts, &type_filter(), &area_filter(), &severity_filter());

    rsx! {
        PageHeader {
            PageTitle { "Safety Alerts" }
            PageSubtitle { "Emergency, crime and traffic advisories across Surat." }
        }

        div { class: "filter-row",
            FormSelect {
                label: "Type",
                value: type_filter(),
                onchange: move |evt: FormEvent| type_filter.set(evt.value()),
                option { value: "", "All types" }
                option { value: "emergency", "Emergency" }
                option { value: "crime", "Crime" }
                option { value: "traffic", "Traffic" }
            }
            FormSelect {
                label: "Area",
                value: area_filter(),
                onchange: move |evt: FormEvent| area_filter.set(evt.value()),
                option { value: "", "All areas" }
                for (key, name) in data::AREA_OPTIONS {
                    option { value: *key, "{name}" }
                }
            }
            FormSelect {
                label: "Severity",
                value: severity_filter(),
                onchange: move |evt: FormEvent| severity_filter.set(evt.value()),
                option { value: "", "All severities" }
                option { value: "low", "Low" }
                option { value: "medium", "Medium" }
                option { value: "high", "High" }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Emergency contacts" }
            }
            CardContent {
                ul { class: "helpline-list",
                    li { strong { "100" } " — Police control room" }
                    li { strong { "1930" } " — Cyber fraud helpline" }
                    li { strong { "108" } " — Ambulance" }
                    li { strong { "101" } " — Fire brigade" }
                }
            }
        }

        if visible.is_empty() {
            p { class: "feed-empty", "No alerts match the selected filters." }
        }
        div { class: "alert-list",
            for alert in visible.iter() {
                Card { key: "{alert.id}",
                    CardHeader {
                        div { class: "alert-badges",
                            Badge { variant: type_variant(alert.alert_type), {alert.alert_type.display_name()} }
                            Badge { variant: severity_variant(alert.severity), {alert.severity.display_name()} }
                        }
                        CardTitle { "{alert.title}" }
                        CardDescription { "{alert.location} · {alert.date} {alert.time}" }
                    }
                    CardContent {
                        p { "{alert.description}" }
                    }
                }
            }
        }
    }
}
