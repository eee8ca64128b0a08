use serde::{Deserialize, Serialize};

/// Incident categories offered in the report form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentKind {
    Theft,
    Assault,
    Vandalism,
    SuspiciousActivity,
    TrafficViolation,
    Cybercrime,
    DrugRelated,
    Other,
}

/// All incident kinds in display order.
pub const ALL_INCIDENT_KINDS: &[IncidentKind] = &[
    IncidentKind::Theft,
    IncidentKind::Assault,
    IncidentKind::Vandalism,
    IncidentKind::SuspiciousActivity,
    IncidentKind::TrafficViolation,
    IncidentKind::Cybercrime,
    IncidentKind::DrugRelated,
    IncidentKind::Other,
];

impl IncidentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentKind::Theft => "theft",
            IncidentKind::Assault => "assault",
            IncidentKind::Vandalism => "vandalism",
            IncidentKind::SuspiciousActivity => "suspicious_activity",
            IncidentKind::TrafficViolation => "traffic_violation",
            IncidentKind::Cybercrime => "cybercrime",
            IncidentKind::DrugRelated => "drug_related",
            IncidentKind::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            IncidentKind::Theft => "Theft",
            IncidentKind::Assault => "Assault",
            IncidentKind::Vandalism => "Vandalism",
            IncidentKind::SuspiciousActivity => "Suspicious Activity",
            IncidentKind::TrafficViolation => "Traffic Violation",
            IncidentKind::Cybercrime => "Cybercrime",
            IncidentKind::DrugRelated => "Drug-related",
            IncidentKind::Other => "Other",
        }
    }
}

/// Workflow state of a reported case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Pending,
    Investigating,
    Resolved,
    Rejected,
}

impl CaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Pending => "pending",
            CaseStatus::Investigating => "investigating",
            CaseStatus::Resolved => "resolved",
            CaseStatus::Rejected => "rejected",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CaseStatus::Pending => "Pending",
            CaseStatus::Investigating => "Investigating",
            CaseStatus::Resolved => "Resolved",
            CaseStatus::Rejected => "Rejected",
        }
    }
}

/// Triage priority of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

/// A reported case as shown in the police and admin dashboards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub id: i64,
    pub kind: IncidentKind,
    pub location: String,
    pub status: CaseStatus,
    pub priority: Priority,
    pub reported_at: String,
    pub description: String,
}

/// Apply the dashboard status/priority filters. An empty filter string
/// matches everything.
pub fn filter_cases<'a>(
    cases: &'a [CaseRecord],
    status: &str,
    priority: &str,
) -> Vec<&'a CaseRecord> {
    cases
        .iter()
        .filter(|c| status.is_empty() || c.status.as_str() == status)
        .filter(|c| priority.is_empty() || c.priority.as_str() == priority)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_cases() -> Vec<CaseRecord> {
        vec![
            CaseRecord {
                id: 1,
                kind: IncidentKind::Theft,
                location: "Adajan".into(),
                status: CaseStatus::Pending,
                priority: Priority::High,
                reported_at: "2024-03-20T10:30:00".into(),
                description: "Mobile phone theft near Adajan market".into(),
            },
            CaseRecord {
                id: 2,
                kind: IncidentKind::Vandalism,
                location: "Vesu".into(),
                status: CaseStatus::Investigating,
                priority: Priority::Medium,
                reported_at: "2024-03-19T18:45:00".into(),
                description: "Property damage at a residential complex".into(),
            },
            CaseRecord {
                id: 3,
                kind: IncidentKind::Assault,
                location: "City Light".into(),
                status: CaseStatus::Resolved,
                priority: Priority::High,
                reported_at: "2024-03-18T09:15:00".into(),
                description: "Altercation between two individuals".into(),
            },
        ]
    }

    #[test]
    fn empty_filters_match_everything() {
        let cases = sample_cases();
        assert_eq!(filter_cases(&cases, "", "").len(), 3);
    }

    #[test]
    fn status_filter_returns_exact_subset() {
        let cases = sample_cases();
        let filtered = filter_cases(&cases, "pending", "");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn combined_filters_intersect() {
        let cases = sample_cases();
        let filtered = filter_cases(&cases, "resolved", "high");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 3);

        // Pending + low matches nothing in the sample set
        assert!(filter_cases(&cases, "pending", "low").is_empty());
    }

    #[test]
    fn incident_kind_keys_are_stable() {
        for kind in ALL_INCIDENT_KINDS {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }
}
