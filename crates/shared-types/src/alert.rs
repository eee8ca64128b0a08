use serde::{Deserialize, Serialize};

/// Category of a safety alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Emergency,
    Crime,
    Traffic,
}

impl AlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::Emergency => "emergency",
            AlertType::Crime => "crime",
            AlertType::Traffic => "traffic",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AlertType::Emergency => "Emergency",
            AlertType::Crime => "Crime",
            AlertType::Traffic => "Traffic",
        }
    }
}

/// Severity of a safety alert, mapped to badge styling in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

/// A public safety alert shown on the alerts page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyAlert {
    pub id: i64,
    pub alert_type: AlertType,
    pub title: String,
    pub description: String,
    pub location: String,
    pub area_key: String,
    pub date: String,
    pub time: String,
    pub severity: Severity,
}

/// Apply the alerts page filters. Empty filter strings match everything.
pub fn filter_alerts<'a>(
    alerts: &'a [SafetyAlert],
    alert_type: &str,
    area: &str,
    severity: &str,
) -> Vec<&'a SafetyAlert> {
    alerts
        .iter()
        .filter(|a| alert_type.is_empty() || a.alert_type.as_str() == alert_type)
        .filter(|a| area.is_empty() || a.area_key == area)
        .filter(|a| severity.is_empty() || a.severity.as_str() == severity)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn alert(id: i64, alert_type: AlertType, area: &str, severity: Severity) -> SafetyAlert {
        SafetyAlert {
            id,
            alert_type,
            title: "t".into(),
            description: "d".into(),
            location: area.into(),
            area_key: area.into(),
            date: "2024-03-20".into(),
            time: "15:30".into(),
            severity,
        }
    }

    #[test]
    fn empty_filters_match_everything() {
        let alerts = vec![
            alert(1, AlertType::Emergency, "city-center", Severity::High),
            alert(2, AlertType::Crime, "adajan", Severity::Medium),
        ];
        assert_eq!(filter_alerts(&alerts, "", "", "").len(), 2);
    }

    #[test]
    fn filters_compose() {
        let alerts = vec![
            alert(1, AlertType::Emergency, "city-center", Severity::High),
            alert(2, AlertType::Crime, "adajan", Severity::Medium),
            alert(3, AlertType::Crime, "adajan", Severity::Low),
        ];
        let hits = filter_alerts(&alerts, "crime", "adajan", "low");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 3);
    }

    #[test]
    fn severity_filter_alone() {
        let alerts = vec![
            alert(1, AlertType::Emergency, "city-center", Severity::High),
            alert(2, AlertType::Traffic, "ring-road", Severity::High),
            alert(3, AlertType::Crime, "adajan", Severity::Low),
        ];
        assert_eq!(filter_alerts(&alerts, "", "", "high").len(), 2);
    }
}
