use dioxus::prelude::*;
use shared_types::analytics::bar_percent;
use shared_types::{filter_cases, CaseStatus, Priority};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow,
    FormSelect, PageActions, PageHeader, PageSubtitle, PageTitle,
};

use crate::components::StatCard;
use crate::data;
use crate::notifications::use_notifications;
use crate::routes::Route;
use crate::session::{self, Realm};

fn priority_variant(priority: Priority) -> BadgeVariant {
    match priority {
        Priority::Low => BadgeVariant::Secondary,
        Priority::Medium => BadgeVariant::Warning,
        Priority::High => BadgeVariant::Destructive,
    }
}

fn parse_status(key: &str) -> Option<CaseStatus> {
    match key {
        "pending" => Some(CaseStatus::Pending),
        "investigating" => Some(CaseStatus::Investigating),
        "resolved" => Some(CaseStatus::Resolved),
        "rejected" => Some(CaseStatus::Rejected),
        _ => None,
    }
}

/// Case worklist for the police console. Status edits live in memory
/// for the session.
#[component]
pub fn PoliceDashboard() -> Element {
    let store = use_notifications();
    let mut cases = use_signal(data::sample_cases);
    let mut status_filter = use_signal(String::new);
    let mut priority_filter = use_signal(String::new);

    let all = cases.read();
    let total = all.len();
    let pending = all.iter().filter(|c| c.status == CaseStatus::Pending).count();
    let investigating = all
        .iter()
        .filter(|c| c.status == CaseStatus::Investigating)
        .count();
    let resolved = all.iter().filter(|c| c.status == CaseStatus::Resolved).count();
    let visible: Vec<_> = filter_cases(&all, &status_filter(), &priority_filter())
        .into_iter()
        .cloned()
        .collect();
    drop(all);

    let monthly: Vec<(String, u32)> = data::pattern_series()
        .into_iter()
        .map(|p| (p.month, p.theft + p.assault + p.fraud))
        .collect();
    let series_max = monthly.iter().map(|(_, count)| *count).max().unwrap_or(0);

    let mut set_status = move |id: i64, key: String| {
        let Some(status) = parse_status(&key) else {
            return;
        };
        cases.with_mut(|list| {
            if let Some(record) = list.iter_mut().find(|c| c.id == id) {
                record.status = status;
            }
        });
        let mut store = store;
        store.info(
            "Case updated",
            format!("Case #{id} moved to {}.", status.display_name()),
        );
    };

    rsx! {
        PageHeader {
            PageTitle { "Police Console" }
            PageSubtitle { "Reported cases across the city's police stations." }
            PageActions {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        session::sign_out(Realm::Police);
                        navigator().push(Route::PoliceLogin {});
                    },
                    "Sign out"
                }
            }
        }

        div { class: "stat-row",
            StatCard { label: "Total cases", value: "{total}" }
            StatCard { label: "Pending", value: "{pending}" }
            StatCard { label: "Investigating", value: "{investigating}" }
            StatCard { label: "Resolved", value: "{resolved}" }
        }

        Card {
            CardHeader {
                CardTitle { "Incidents by month" }
            }
            CardContent {
                div { class: "bar-chart",
                    for (month, count) in monthly.iter() {
                        div { key: "{month}", class: "bar-group",
                            span { class: "bar-label", "{month}" }
                            div {
                                class: "bar",
                                style: "width: {bar_percent(*count, series_max)}%",
                                span { "{count}" }
                            }
                        }
                    }
                }
            }
        }

        div { class: "filter-row",
            FormSelect {
                label: "Status",
                value: status_filter(),
                onchange: move |evt: FormEvent| status_filter.set(evt.value()),
                option { value: "", "All statuses" }
                option { value: "pending", "Pending" }
                option { value: "investigating", "Investigating" }
                option { value: "resolved", "Resolved" }
                option { value: "rejected", "Rejected" }
            }
            FormSelect {
                label: "Priority",
                value: priority_filter(),
                onchange: move |evt: FormEvent| priority_filter.set(evt.value()),
                option { value: "", "All priorities" }
                option { value: "low", "Low" }
                option { value: "medium", "Medium" }
                option { value: "high", "High" }
            }
        }

        DataTable {
            DataTableHeader {
                DataTableColumn { "Case" }
                DataTableColumn { "Type" }
                DataTableColumn { "Location" }
                DataTableColumn { "Reported" }
                DataTableColumn { "Priority" }
                DataTableColumn { "Status" }
            }
            DataTableBody {
                for case in visible.iter().cloned() {
                    DataTableRow { key: "{case.id}",
                        DataTableCell { "#{case.id}" }
                        DataTableCell { {case.kind.display_name()} }
                        DataTableCell { "{case.location}" }
                        DataTableCell { "{case.reported_at}" }
                        DataTableCell {
                            Badge { variant: priority_variant(case.priority), {case.priority.display_name()} }
                        }
                        DataTableCell {
                            FormSelect {
                                value: case.status.as_str().to_string(),
                                onchange: {
                                    let id = case.id;
                                    move |evt: FormEvent| set_status(id, evt.value())
                                },
                                option { value: "pending", "Pending" }
                                option { value: "investigating", "Investigating" }
                                option { value: "resolved", "Resolved" }
                                option { value: "rejected", "Rejected" }
                            }
                        }
                    }
                }
            }
        }
        if visible.is_empty() {
            p { class: "feed-empty", "No cases match the selected filters." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn status_keys_round_trip() {
        for status in [
            CaseStatus::Pending,
            CaseStatus::Investigating,
            CaseStatus::Resolved,
            CaseStatus::Rejected,
        ] {
            assert_eq!(parse_status(status.as_str()), Some(status));
        }
    }

    #[test]
    fn unknown_status_key_is_rejected() {
        assert_eq!(parse_status("archived"), None);
    }
}
