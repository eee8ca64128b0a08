use dioxus::prelude::*;
use shared_types::analytics::bar_percent;
use shared_types::{filter_cases, CaseRecord, CaseStatus, Priority};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, FormSelect, PageHeader,
    PageSubtitle, PageTitle,
};

use crate::components::StatCard;
use crate::data;
use crate::notifications::use_notifications;

fn newest_first(cases: &mut [CaseRecord]) {
    cases.sort_by(|a, b| b.reported_at.cmp(&a.reported_at));
}

/// Admin overview: headline numbers, the six-month pattern chart and a
/// triage table. Resolve/reject actions only touch the in-memory list.
#[component]
pub fn AdminDashboard() -> Element {
    let store = use_notifications();
    let mut cases = use_signal(data::sample_cases);
    let mut status_filter = use_signal(String::new);
    let mut priority_filter = use_signal(String::new);

    let all = cases.read();
    let total = all.len();
    let high_priority = all.iter().filter(|c| c.priority == Priority::High).count();
    let resolved = all.iter().filter(|c| c.status == CaseStatus::Resolved).count();
    let mut recent: Vec<CaseRecord> = filter_cases(&all, &status_filter(), &priority_filter())
        .into_iter()
        .cloned()
        .collect();
    drop(all);
    newest_first(&mut recent);

    let hotspot_count = data::hotspots().len();
    let series = data::pattern_series();
    let series_max = series
        .iter()
        .map(|p| p.theft.max(p.assault).max(p.fraud))
        .max()
        .unwrap_or(0);

    let mut close_case = move |id: i64, status: CaseStatus| {
        cases.with_mut(|list| {
            if let Some(record) = list.iter_mut().find(|c| c.id == id) {
                record.status = status;
            }
        });
        let mut store = store;
        store.info(
            "Case updated",
            format!("Case #{id} marked {}.", status.display_name()),
        );
    };

    rsx! {
        PageHeader {
            PageTitle { "City Overview" }
            PageSubtitle { "Incident activity across Surat at a glance." }
        }

        div { class: "stat-row",
            StatCard { label: "Open cases", value: "{total}" }
            StatCard { label: "High priority", value: "{high_priority}" }
            StatCard { label: "Resolved", value: "{resolved}" }
            StatCard { label: "Active hotspots", value: "{hotspot_count}" }
        }

        Card {
            CardHeader {
                CardTitle { "Six-month pattern" }
            }
            CardContent {
                div { class: "bar-chart",
                    for point in series.iter() {
                        div { key: "{point.month}", class: "bar-group",
                            span { class: "bar-label", "{point.month}" }
                            div { class: "bar theft", style: "width: {bar_percent(point.theft, series_max)}%",
                                span { "{point.theft}" }
                            }
                            div { class: "bar assault", style: "width: {bar_percent(point.assault, series_max)}%",
                                span { "{point.assault}" }
                            }
                            div { class: "bar fraud", style: "width: {bar_percent(point.fraud, series_max)}%",
                                span { "{point.fraud}" }
                            }
                        }
                    }
                }
                div { class: "chart-legend",
                    span { class: "legend theft", "Theft" }
                    span { class: "legend assault", "Assault" }
                    span { class: "legend fraud", "Fraud" }
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Recent reports" }
            }
            CardContent {
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
                        DataTableColumn { "Status" }
                        DataTableColumn { "Actions" }
                    }
                    DataTableBody {
                        for case in recent.iter().cloned() {
                            DataTableRow { key: "{case.id}",
                                DataTableCell { "#{case.id}" }
                                DataTableCell { {case.kind.display_name()} }
                                DataTableCell { "{case.location}" }
                                DataTableCell { "{case.reported_at}" }
                                DataTableCell { {case.status.display_name()} }
                                DataTableCell {
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        onclick: {
                                            let id = case.id;
                                            move |_| close_case(id, CaseStatus::Resolved)
                                        },
                                        "Resolve"
                                    }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        onclick: {
                                            let id = case.id;
                                            move |_| close_case(id, CaseStatus::Rejected)
                                        },
                                        "Reject"
                                    }
                                }
                            }
                        }
                    }
                }
                if recent.is_empty() {
                    p { class: "feed-empty", "No cases match the selected filters." }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::IncidentKind;

    fn case(id: i64, reported_at: &str) -> CaseRecord {
        CaseRecord {
            id,
            kind: IncidentKind::Theft,
            location: "x".into(),
            status: CaseStatus::Pending,
            priority: Priority::Low,
            reported_at: reported_at.into(),
            description: String::new(),
        }
    }

    #[test]
    fn newest_first_orders_by_report_date() {
        let mut cases = vec![case(1, "2025-03-10"), case(2, "2025-03-16"), case(3, "2025-03-12")];
        newest_first(&mut cases);
        let ids: Vec<i64> = cases.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
