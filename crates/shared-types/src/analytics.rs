use serde::{Deserialize, Serialize};

use crate::incident::IncidentKind;

/// Risk classification used across detection, prediction and forecast pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn display_name(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

/// One month of the crime pattern series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternPoint {
    pub month: String,
    pub theft: u32,
    pub assault: u32,
    pub fraud: u32,
}

/// An area flagged as a crime hotspot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub id: i64,
    pub area: String,
    pub crime_type: IncidentKind,
    pub incidents: u32,
    pub risk_level: RiskLevel,
}

/// Current vs. predicted incident counts for an area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaPrediction {
    pub area: String,
    pub current: u32,
    pub predicted: u32,
}

/// Narrative risk assessment for an area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub id: i64,
    pub area: String,
    pub risk_level: RiskLevel,
    pub factors: Vec<String>,
    pub prediction: String,
}

/// One slice of the crime type distribution pie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSlice {
    pub name: String,
    pub value: u32,
}

/// Incident count for a four-hour window of the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBucket {
    pub window: String,
    pub count: u32,
}

/// A demographic breakdown (age groups, gender, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicGroup {
    pub category: String,
    pub entries: Vec<DemographicEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicEntry {
    pub group: String,
    pub percentage: u32,
}

/// One year of the long-term forecast; past years carry `actual`,
/// future years carry `forecast`, the pivot year carries both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyForecast {
    pub year: String,
    pub actual: Option<u32>,
    pub forecast: Option<u32>,
}

/// Forecast narrative for a single area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaForecast {
    pub id: i64,
    pub area: String,
    pub current_trend: String,
    pub forecast: String,
    pub confidence: RiskLevel,
    pub factors: Vec<String>,
}

/// Seasonal crime pattern with recommended countermeasures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalPattern {
    pub season: String,
    pub risk_level: RiskLevel,
    pub description: String,
    pub recommendations: Vec<String>,
}

/// Scale a value to a percentage of the series maximum, for CSS bar widths.
pub fn bar_percent(value: u32, series_max: u32) -> u32 {
    if series_max == 0 {
        0
    } else {
        value * 100 / series_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bar_percent_scales_to_series_max() {
        assert_eq!(bar_percent(50, 100), 50);
        assert_eq!(bar_percent(100, 100), 100);
        assert_eq!(bar_percent(1, 3), 33);
    }

    #[test]
    fn bar_percent_handles_empty_series() {
        assert_eq!(bar_percent(5, 0), 0);
    }

    #[test]
    fn yearly_forecast_pivot_year_carries_both() {
        let json = r#"{"year":"2024","actual":380,"forecast":380}"#;
        let row: YearlyForecast = serde_json::from_str(json).unwrap();
        assert_eq!(row.actual, Some(380));
        assert_eq!(row.forecast, Some(380));
    }
}
