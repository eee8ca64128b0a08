use dioxus::prelude::*;
use shared_ui::{
    Badge, Card, CardContent, CardDescription, CardHeader, CardTitle, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, PageHeader, PageSubtitle,
    PageTitle,
};

use super::detection::risk_variant;
use crate::data;

/// Long-term outlook: the yearly series, per-area narratives and the
/// seasonal playbook.
#[component]
pub fn AdminForecast() -> Element {
    let years = data::yearly_forecast();
    let areas = data::area_forecasts();
    let seasons = data::seasonal_patterns();

    rsx! {
        PageHeader {
            PageTitle { "Crime Forecast" }
            PageSubtitle { "Where the numbers are heading over the next two years." }
        }

        Card {
            CardHeader {
                CardTitle { "Yearly trend" }
                CardDescription { "Recorded incidents with a model projection from 2025 onward." }
            }
            CardContent {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Year" }
                        DataTableColumn { "Recorded" }
                        DataTableColumn { "Forecast" }
                    }
                    DataTableBody {
                        for row in years.iter() {
                            DataTableRow { key: "{row.year}",
                                DataTableCell { "{row.year}" }
                                DataTableCell {
                                    if let Some(actual) = row.actual {
                                        "{actual}"
                                    } else {
                                        "—"
                                    }
                                }
                                DataTableCell {
                                    if let Some(forecast) = row.forecast {
                                        "{forecast}"
                                    } else {
                                        "—"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        div { class: "card-grid",
            for area in areas.iter() {
                Card { key: "{area.id}",
                    CardHeader {
                        Badge { variant: risk_variant(area.confidence), "Confidence: {area.confidence.display_name()}" }
                        CardTitle { "{area.area}" }
                        CardDescription { "{area.current_trend}" }
                    }
                    CardContent {
                        p { "{area.forecast}" }
                        ul { class: "factor-list",
                            for factor in area.factors.iter() {
                                li { "{factor}" }
                            }
                        }
                    }
                }
            }
        }

        PageHeader {
            PageTitle { "Seasonal patterns" }
        }
        div { class: "card-grid",
            for season in seasons.iter() {
                Card { key: "{season.season}",
                    CardHeader {
                        Badge { variant: risk_variant(season.risk_level), {season.risk_level.display_name()} }
                        CardTitle { "{season.season}" }
                        CardDescription { "{season.description}" }
                    }
                    CardContent {
                        ul { class: "factor-list",
                            for item in season.recommendations.iter() {
                                li { "{item}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
