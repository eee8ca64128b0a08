use dioxus::prelude::*;
use shared_types::analytics::bar_percent;
use shared_types::RiskLevel;
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, PageHeader, PageSubtitle,
    PageTitle,
};

use crate::data;

pub(super) fn risk_variant(risk: RiskLevel) -> BadgeVariant {
    match risk {
        RiskLevel::Low => BadgeVariant::Secondary,
        RiskLevel::Medium => BadgeVariant::Warning,
        RiskLevel::High => BadgeVariant::Destructive,
    }
}

/// Hotspot detection: monthly pattern, flagged areas and the
/// time-of-day profile.
#[component]
pub fn AdminDetection() -> Element {
    let hotspots = data::hotspots();
    let buckets = data::time_buckets();
    let bucket_max = buckets.iter().map(|b| b.count).max().unwrap_or(0);
    let series = data::pattern_series();
    let series_max = series
        .iter()
        .map(|p| p.theft.max(p.assault).max(p.fraud))
        .max()
        .unwrap_or(0);
    let anomalies: Vec<_> = hotspots
        .iter()
        .filter(|spot| spot.risk_level == RiskLevel::High)
        .cloned()
        .collect();

    rsx! {
        PageHeader {
            PageTitle { "Crime Detection" }
            PageSubtitle { "Areas flagged by incident clustering, with when incidents happen." }
        }

        Card {
            CardHeader {
                CardTitle { "Monthly pattern by category" }
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
            }
        }

        if !anomalies.is_empty() {
            div { class: "card-grid",
                for spot in anomalies.iter() {
                    Card { key: "{spot.id}",
                        CardHeader {
                            Badge { variant: risk_variant(spot.risk_level), "Anomaly" }
                            CardTitle { "{spot.area}" }
                        }
                        CardContent {
                            p {
                                "{spot.incidents} incidents in 30 days, dominated by "
                                "{spot.crime_type.display_name()}. Outside the usual range "
                                "for this area."
                            }
                        }
                    }
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Current hotspots" }
            }
            CardContent {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Area" }
                        DataTableColumn { "Dominant type" }
                        DataTableColumn { "Incidents (30d)" }
                        DataTableColumn { "Risk" }
                    }
                    DataTableBody {
                        for spot in hotspots.iter() {
                            DataTableRow { key: "{spot.id}",
                                DataTableCell { "{spot.area}" }
                                DataTableCell { {spot.crime_type.display_name()} }
                                DataTableCell { "{spot.incidents}" }
                                DataTableCell {
                                    Badge { variant: risk_variant(spot.risk_level), {spot.risk_level.display_name()} }
                                }
                            }
                        }
                    }
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Incidents by time of day" }
            }
            CardContent {
                div { class: "bar-chart",
                    for bucket in buckets.iter() {
                        div { key: "{bucket.window}", class: "bar-group",
                            span { class: "bar-label", "{bucket.window}" }
                            div { class: "bar", style: "width: {bar_percent(bucket.count, bucket_max)}%",
                                span { "{bucket.count}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
