//! Built-in sample datasets.
//!
//! The dashboards and public pages render from these fixed records;
//! nothing here is fetched or persisted.

use shared_types::{
    AlertType, AreaForecast, AreaPrediction, CaseRecord, CaseStatus, CommunityPost,
    DemographicEntry, DemographicGroup, DistributionSlice, Hotspot, IncidentKind, PatternPoint,
    Priority, RiskAssessment, RiskLevel, SafetyAlert, SeasonalPattern, Severity, TimeBucket,
    TrendingTag, YearlyForecast,
};

/// Areas offered in the alert and analytics filters, as
/// (key, display name) pairs.
pub const AREA_OPTIONS: &[(&str, &str)] = &[
    ("adajan", "Adajan"),
    ("athwa", "Athwa"),
    ("katargam", "Katargam"),
    ("rander", "Rander"),
    ("udhna", "Udhna"),
    ("varachha", "Varachha"),
    ("vesu", "Vesu"),
];

fn case(
    id: i64,
    kind: IncidentKind,
    location: &str,
    status: CaseStatus,
    priority: Priority,
    reported_at: &str,
    description: &str,
) -> CaseRecord {
    CaseRecord {
        id,
        kind,
        location: location.to_string(),
        status,
        priority,
        reported_at: reported_at.to_string(),
        description: description.to_string(),
    }
}

/// Cases listed in the police console.
pub fn sample_cases() -> Vec<CaseRecord> {
    vec![
        case(
            4821,
            IncidentKind::Theft,
            "Adajan Patiya, near bus stand",
            CaseStatus::Investigating,
            Priority::High,
            "2025-03-14",
            "Two-wheeler stolen from the parking row outside the vegetable market.",
        ),
        case(
            4822,
            IncidentKind::Cybercrime,
            "Vesu, VIP Road",
            CaseStatus::Pending,
            Priority::Medium,
            "2025-03-15",
            "Complainant transferred money after a fake electricity-bill SMS.",
        ),
        case(
            4823,
            IncidentKind::Assault,
            "Varachha, Mini Bazar",
            CaseStatus::Investigating,
            Priority::High,
            "2025-03-15",
            "Altercation between shopkeepers escalated; one person injured.",
        ),
        case(
            4824,
            IncidentKind::Vandalism,
            "Katargam, Gajera Circle",
            CaseStatus::Resolved,
            Priority::Low,
            "2025-03-12",
            "Parked rickshaw windshield smashed overnight.",
        ),
        case(
            4825,
            IncidentKind::SuspiciousActivity,
            "Rander, Tadwadi",
            CaseStatus::Pending,
            Priority::Medium,
            "2025-03-16",
            "Unknown persons loitering near a closed jewellery shop after midnight.",
        ),
        case(
            4826,
            IncidentKind::TrafficViolation,
            "Athwa, Parle Point",
            CaseStatus::Rejected,
            Priority::Low,
            "2025-03-11",
            "Report of racing; patrol found no activity at the stated time.",
        ),
        case(
            4827,
            IncidentKind::Theft,
            "Udhna, Magdalla Road",
            CaseStatus::Investigating,
            Priority::Medium,
            "2025-03-16",
            "Chain snatching near the textile market gate during evening rush.",
        ),
        case(
            4828,
            IncidentKind::DrugRelated,
            "Varachha, Hirabaug",
            CaseStatus::Pending,
            Priority::High,
            "2025-03-17",
            "Residents report repeated late-night exchanges in the society parking lot.",
        ),
    ]
}

fn post(
    id: &str,
    author_name: &str,
    author_initials: &str,
    title: &str,
    content: &str,
    date: &str,
    likes: u32,
    comments: u32,
    tags: &[&str],
) -> CommunityPost {
    CommunityPost {
        id: id.to_string(),
        author_name: author_name.to_string(),
        author_initials: author_initials.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        date: date.to_string(),
        likes,
        comments,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// Seed posts for the community forum.
pub fn sample_posts() -> Vec<CommunityPost> {
    vec![
        post(
            "post-1",
            "Ramesh Patel",
            "RP",
            "Chain snatching near Adajan garden",
            "Two incidents this week on the lane behind the garden, both around 7pm. \
             Please avoid walking alone with visible jewellery until patrolling improves.",
            "2025-03-16",
            42,
            13,
            &["alert", "adajan", "theft"],
        ),
        post(
            "post-2",
            "Priya Shah",
            "PS",
            "Fake KYC call claiming to be from the bank",
            "Got a call asking for an OTP to 'update KYC'. The number looked local. \
             Banks never ask for OTPs. Reported to the cybercrime helpline 1930.",
            "2025-03-15",
            67,
            21,
            &["scamalert", "cybercrime"],
        ),
        post(
            "post-3",
            "Amit Desai",
            "AD",
            "Street lights out on Rander Road service lane",
            "The stretch between Tadwadi and Palanpur Patiya has been dark for a week. \
             Raised a complaint with SMC, posting here so people take the main road at night.",
            "2025-03-14",
            28,
            9,
            &["warning", "rander", "infrastructure"],
        ),
        post(
            "post-4",
            "Neha Joshi",
            "NJ",
            "Thanks to the Vesu beat marshals",
            "Quick response to a prowler call in our society last night. Appreciation post.",
            "2025-03-13",
            54,
            7,
            &["vesu", "police"],
        ),
        post(
            "post-5",
            "Kiran Mehta",
            "KM",
            "Parking tout overcharging outside textile market",
            "Unofficial 'attendant' demanding double the board rate near gate 3. \
             Keep the receipt and note the board rate before paying.",
            "2025-03-12",
            19,
            5,
            &["udhna", "warning"],
        ),
    ]
}

/// Tag cloud for the community sidebar.
pub fn trending_tags() -> Vec<TrendingTag> {
    [
        ("scamalert", 34),
        ("theft", 28),
        ("adajan", 22),
        ("cybercrime", 19),
        ("warning", 17),
        ("vesu", 12),
    ]
    .into_iter()
    .map(|(name, count)| TrendingTag {
        name: name.to_string(),
        count,
    })
    .collect()
}

fn alert(
    id: i64,
    alert_type: AlertType,
    title: &str,
    description: &str,
    location: &str,
    area_key: &str,
    date: &str,
    time: &str,
    severity: Severity,
) -> SafetyAlert {
    SafetyAlert {
        id,
        alert_type,
        title: title.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        area_key: area_key.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        severity,
    }
}

/// Alerts shown on the safety alerts page.
pub fn sample_alerts() -> Vec<SafetyAlert> {
    vec![
        alert(
            1,
            AlertType::Emergency,
            "Gas leak reported near Katargam GIDC",
            "Fire brigade on site. Avoid the industrial lane between gate 2 and the water tower.",
            "Katargam GIDC, Gate 2",
            "katargam",
            "2025-03-17",
            "09:40",
            Severity::High,
        ),
        alert(
            2,
            AlertType::Crime,
            "Vehicle theft spike in Adajan",
            "Six two-wheelers reported stolen this week. Use steering locks and covered parking.",
            "Adajan Patiya",
            "adajan",
            "2025-03-16",
            "18:15",
            Severity::Medium,
        ),
        alert(
            3,
            AlertType::Traffic,
            "Bridge repair closing one lane on Rander Road",
            "Expect evening congestion for the next ten days. Use Causeway Road as an alternate.",
            "Rander Road, near Tadwadi",
            "rander",
            "2025-03-15",
            "07:00",
            Severity::Low,
        ),
        alert(
            4,
            AlertType::Crime,
            "ATM skimming device found in Vesu",
            "A skimmer was removed from a kiosk on VIP Road. Check card statements for the month.",
            "VIP Road, Vesu",
            "vesu",
            "2025-03-14",
            "21:30",
            Severity::High,
        ),
        alert(
            5,
            AlertType::Traffic,
            "Procession route closures in Varachha",
            "Rolling closures along Mini Bazar between 4pm and 8pm on Sunday.",
            "Mini Bazar, Varachha",
            "varachha",
            "2025-03-13",
            "16:00",
            Severity::Low,
        ),
        alert(
            6,
            AlertType::Emergency,
            "Waterlogging under Udhna flyover",
            "Pumps deployed after a main burst. Two-wheelers advised to avoid the underpass.",
            "Udhna flyover underpass",
            "udhna",
            "2025-03-12",
            "06:20",
            Severity::Medium,
        ),
    ]
}

/// Six-month incident series for the pattern charts.
pub fn pattern_series() -> Vec<PatternPoint> {
    [
        ("Oct", 42, 17, 25),
        ("Nov", 38, 14, 31),
        ("Dec", 51, 19, 29),
        ("Jan", 47, 15, 36),
        ("Feb", 44, 12, 41),
        ("Mar", 49, 16, 45),
    ]
    .into_iter()
    .map(|(month, theft, assault, fraud)| PatternPoint {
        month: month.to_string(),
        theft,
        assault,
        fraud,
    })
    .collect()
}

/// Areas currently flagged by the detection view.
pub fn hotspots() -> Vec<Hotspot> {
    [
        (1, "Adajan", IncidentKind::Theft, 23, RiskLevel::High),
        (2, "Varachha", IncidentKind::Assault, 14, RiskLevel::Medium),
        (3, "Vesu", IncidentKind::Cybercrime, 19, RiskLevel::High),
        (4, "Katargam", IncidentKind::Vandalism, 9, RiskLevel::Low),
        (5, "Udhna", IncidentKind::Theft, 16, RiskLevel::Medium),
    ]
    .into_iter()
    .map(|(id, area, crime_type, incidents, risk_level)| Hotspot {
        id,
        area: area.to_string(),
        crime_type,
        incidents,
        risk_level,
    })
    .collect()
}

/// Next-month incident projections per area.
pub fn area_predictions() -> Vec<AreaPrediction> {
    [
        ("Adajan", 23, 27),
        ("Varachha", 14, 13),
        ("Vesu", 19, 24),
        ("Katargam", 9, 8),
        ("Udhna", 16, 18),
        ("Rander", 11, 12),
    ]
    .into_iter()
    .map(|(area, current, predicted)| AreaPrediction {
        area: area.to_string(),
        current,
        predicted,
    })
    .collect()
}

fn assessment(
    id: i64,
    area: &str,
    risk_level: RiskLevel,
    factors: &[&str],
    prediction: &str,
) -> RiskAssessment {
    RiskAssessment {
        id,
        area: area.to_string(),
        risk_level,
        factors: factors.iter().map(|f| f.to_string()).collect(),
        prediction: prediction.to_string(),
    }
}

/// Narrative risk assessments for the prediction view.
pub fn risk_assessments() -> Vec<RiskAssessment> {
    vec![
        assessment(
            1,
            "Adajan",
            RiskLevel::High,
            &[
                "Dense market footfall after 6pm",
                "Unlit service lanes behind the garden",
                "Repeat vehicle theft reports",
            ],
            "Theft incidents likely to rise through the festival season without added patrols.",
        ),
        assessment(
            2,
            "Vesu",
            RiskLevel::High,
            &[
                "High concentration of banking customers",
                "Recent skimming device recovery",
            ],
            "Card and OTP fraud expected to keep climbing as new residents move in.",
        ),
        assessment(
            3,
            "Varachha",
            RiskLevel::Medium,
            &["Late-closing commercial strip", "Past scuffles near eateries"],
            "Assault numbers steady; weekend evenings remain the peak window.",
        ),
        assessment(
            4,
            "Katargam",
            RiskLevel::Low,
            &["Active society watch groups", "Improved street lighting"],
            "Incident counts should stay flat or decline slightly.",
        ),
    ]
}

/// Share of incidents by crime type.
pub fn crime_distribution() -> Vec<DistributionSlice> {
    [
        ("Theft", 38),
        ("Fraud", 27),
        ("Assault", 14),
        ("Vandalism", 9),
        ("Traffic", 7),
        ("Other", 5),
    ]
    .into_iter()
    .map(|(name, value)| DistributionSlice {
        name: name.to_string(),
        value,
    })
    .collect()
}

/// Incidents by four-hour window of the day.
pub fn time_buckets() -> Vec<TimeBucket> {
    [
        ("00-04", 11),
        ("04-08", 6),
        ("08-12", 18),
        ("12-16", 22),
        ("16-20", 35),
        ("20-24", 28),
    ]
    .into_iter()
    .map(|(window, count)| TimeBucket {
        window: window.to_string(),
        count,
    })
    .collect()
}

fn demographic(category: &str, entries: &[(&str, u32)]) -> DemographicGroup {
    DemographicGroup {
        category: category.to_string(),
        entries: entries
            .iter()
            .map(|(group, percentage)| DemographicEntry {
                group: group.to_string(),
                percentage: *percentage,
            })
            .collect(),
    }
}

/// Victim demographics for the analysis view.
pub fn demographics() -> Vec<DemographicGroup> {
    vec![
        demographic(
            "Age group",
            &[
                ("Under 18", 8),
                ("18-30", 34),
                ("31-45", 29),
                ("46-60", 19),
                ("Over 60", 10),
            ],
        ),
        demographic("Gender", &[("Male", 58), ("Female", 41), ("Other", 1)]),
    ]
}

/// Five-year incident history with a two-year projection. 2025 is the
/// pivot year and carries both series.
pub fn yearly_forecast() -> Vec<YearlyForecast> {
    [
        ("2021", Some(412), None),
        ("2022", Some(389), None),
        ("2023", Some(401), None),
        ("2024", Some(376), None),
        ("2025", Some(364), Some(364)),
        ("2026", None, Some(351)),
        ("2027", None, Some(340)),
    ]
    .into_iter()
    .map(|(year, actual, forecast)| YearlyForecast {
        year: year.to_string(),
        actual,
        forecast,
    })
    .collect()
}

fn forecast(
    id: i64,
    area: &str,
    current_trend: &str,
    forecast: &str,
    confidence: RiskLevel,
    factors: &[&str],
) -> AreaForecast {
    AreaForecast {
        id,
        area: area.to_string(),
        current_trend: current_trend.to_string(),
        forecast: forecast.to_string(),
        confidence,
        factors: factors.iter().map(|f| f.to_string()).collect(),
    }
}

/// Per-area outlooks for the forecast view.
pub fn area_forecasts() -> Vec<AreaForecast> {
    vec![
        forecast(
            1,
            "Adajan",
            "Theft trending up for three consecutive months",
            "Expect a 10-15% rise unless market-area patrols are extended past 9pm.",
            RiskLevel::High,
            &["Festival season footfall", "New commercial complex opening"],
        ),
        forecast(
            2,
            "Vesu",
            "Fraud complaints doubling year on year",
            "Digital fraud will overtake street crime as the area's top category by 2026.",
            RiskLevel::High,
            &["Rapid residential growth", "High smartphone penetration"],
        ),
        forecast(
            3,
            "Rander",
            "Stable with seasonal traffic spikes",
            "No significant change expected; monitor the bridge-repair diversion period.",
            RiskLevel::Medium,
            &["Ongoing roadwork", "Stable population"],
        ),
        forecast(
            4,
            "Katargam",
            "Declining for four quarters",
            "Continued decline likely as society watch coverage expands.",
            RiskLevel::Low,
            &["Active neighbourhood watch", "CCTV expansion completed"],
        ),
    ]
}

fn seasonal(
    season: &str,
    risk_level: RiskLevel,
    description: &str,
    recommendations: &[&str],
) -> SeasonalPattern {
    SeasonalPattern {
        season: season.to_string(),
        risk_level,
        description: description.to_string(),
        recommendations: recommendations.iter().map(|r| r.to_string()).collect(),
    }
}

/// Seasonal risk windows with countermeasures.
pub fn seasonal_patterns() -> Vec<SeasonalPattern> {
    vec![
        seasonal(
            "Festival season (Oct-Nov)",
            RiskLevel::High,
            "Crowded markets and cash-heavy shopping drive pickpocketing and chain snatching.",
            &[
                "Extend market-area patrols to 11pm",
                "Deploy plain-clothes teams near jewellery rows",
            ],
        ),
        seasonal(
            "Summer (Apr-Jun)",
            RiskLevel::Medium,
            "Longer evenings push petty crime later; vacant homes during vacations invite burglary.",
            &[
                "Society-level vacant home registry",
                "Night patrol focus on residential lanes",
            ],
        ),
        seasonal(
            "Monsoon (Jul-Sep)",
            RiskLevel::Low,
            "Street crime dips with footfall, but waterlogging raises traffic incidents.",
            &[
                "Pre-position traffic marshals at known flooding points",
                "Publish alternate route advisories early",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn alert_area_keys_all_have_filter_options() {
        let keys: Vec<&str> = AREA_OPTIONS.iter().map(|(key, _)| *key).collect();
        for alert in sample_alerts() {
            assert!(
                keys.contains(&alert.area_key.as_str()),
                "alert {} uses unknown area key {}",
                alert.id,
                alert.area_key
            );
        }
    }

    #[test]
    fn distribution_shares_sum_to_one_hundred() {
        let total: u32 = crime_distribution().iter().map(|s| s.value).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn yearly_forecast_pivot_carries_both_series() {
        let rows = yearly_forecast();
        let pivot = rows
            .iter()
            .find(|r| r.actual.is_some() && r.forecast.is_some())
            .unwrap();
        assert_eq!(pivot.year, "2025");
        // Past rows have only actuals, future rows only forecasts.
        assert!(rows.first().unwrap().forecast.is_none());
        assert!(rows.last().unwrap().actual.is_none());
    }

    #[test]
    fn sample_case_ids_are_unique() {
        let mut ids: Vec<i64> = sample_cases().iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), sample_cases().len());
    }
}
