use dioxus::prelude::*;
use shared_types::analytics::bar_percent;
use shared_ui::{
    Badge, Card, CardContent, CardDescription, CardHeader, CardTitle, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, PageHeader, PageSubtitle,
    PageTitle,
};

use super::detection::risk_variant;
use crate::data;

/// Next-month projections and the narrative risk assessments behind
/// them.
#[component]
pub fn AdminPrediction() -> Element {
    let predictions = data::area_predictions();
    let assessments = data::risk_assessments();
    let scale_max = predictions
        .iter()
        .map(|row| row.current.max(row.predicted))
        .max()
        .unwrap_or(0);

    rsx! {
        PageHeader {
            PageTitle { "Crime Prediction" }
            PageSubtitle { "Projected incident counts for the coming month." }
        }

        Card {
            CardHeader {
                CardTitle { "Projected change by area" }
            }
            CardContent {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Area" }
                        DataTableColumn { "This month" }
                        DataTableColumn { "Projected" }
                        DataTableColumn { "Change" }
                    }
                    DataTableBody {
                        for row in predictions.iter() {
                            DataTableRow { key: "{row.area}",
                                DataTableCell { "{row.area}" }
                                DataTableCell {
                                    div { class: "bar", style: "width: {bar_percent(row.current, scale_max)}%",
                                        span { "{row.current}" }
                                    }
                                }
                                DataTableCell {
                                    div { class: "bar fraud", style: "width: {bar_percent(row.predicted, scale_max)}%",
                                        span { "{row.predicted}" }
                                    }
                                }
                                DataTableCell {
                                    if row.predicted >= row.current {
                                        span { class: "delta up", "+{row.predicted - row.current}" }
                                    } else {
                                        span { class: "delta down", "-{row.current - row.predicted}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        div { class: "card-grid",
            for assessment in assessments.iter() {
                Card { key: "{assessment.id}",
                    CardHeader {
                        Badge {
                            variant: risk_variant(assessment.risk_level),
                            {assessment.risk_level.display_name()}
                        }
                        CardTitle { "{assessment.area}" }
                        CardDescription { "{assessment.prediction}" }
                    }
                    CardContent {
                        ul { class: "factor-list",
                            for factor in assessment.factors.iter() {
                                li { "{factor}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
