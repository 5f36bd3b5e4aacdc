use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncidentType {
    Accident,
    WrongWay,
    Breakdown,
    Pedestrian,
    LaneViolation,
}

impl IncidentType {
    pub fn label(&self) -> &'static str {
        match self {
            IncidentType::Accident => "Accident",
            IncidentType::WrongWay => "Wrong-Way Driving",
            IncidentType::Breakdown => "Vehicle Breakdown",
            IncidentType::Pedestrian => "Pedestrian",
            IncidentType::LaneViolation => "Lane Violation",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentStatus {
    Active,
    Resolved,
}

impl IncidentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            IncidentStatus::Active => "Active",
            IncidentStatus::Resolved => "Resolved",
        }
    }
}

/// A single detected traffic incident. Records are immutable: the full set
/// is fixed at startup and nothing inserts, mutates, or removes one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    pub id: String,
    #[serde(rename = "type")]
    pub incident_type: IncidentType,
    pub severity: Severity,
    pub location: String,
    pub camera: String,
    pub timestamp: String,
    pub description: String,
    pub status: IncidentStatus,
}

/// The fixed demo incident set shown on the dashboard.
pub fn mock_incidents() -> Vec<Incident> {
    vec![
        Incident {
            id: "INC001".into(),
            incident_type: IncidentType::Accident,
            severity: Severity::Critical,
            location: "Highway 101, Mile Marker 42".into(),
            camera: "CAM-101-42".into(),
            timestamp: "2 minutes ago".into(),
            description: "Multi-vehicle collision detected".into(),
            status: IncidentStatus::Active,
        },
        Incident {
            id: "INC002".into(),
            incident_type: IncidentType::WrongWay,
            severity: Severity::High,
            location: "Interstate 280, Exit 35B".into(),
            camera: "CAM-280-35B".into(),
            timestamp: "8 minutes ago".into(),
            description: "Vehicle traveling northbound in southbound lane".into(),
            status: IncidentStatus::Active,
        },
        Incident {
            id: "INC003".into(),
            incident_type: IncidentType::Pedestrian,
            severity: Severity::High,
            location: "Downtown Street, 5th & Main".into(),
            camera: "CAM-DT-05M".into(),
            timestamp: "15 minutes ago".into(),
            description: "Pedestrian on elevated highway".into(),
            status: IncidentStatus::Resolved,
        },
        Incident {
            id: "INC004".into(),
            incident_type: IncidentType::Breakdown,
            severity: Severity::Medium,
            location: "Highway 101, Mile Marker 38".into(),
            camera: "CAM-101-38".into(),
            timestamp: "22 minutes ago".into(),
            description: "Vehicle stopped in travel lane".into(),
            status: IncidentStatus::Resolved,
        },
        Incident {
            id: "INC005".into(),
            incident_type: IncidentType::LaneViolation,
            severity: Severity::Medium,
            location: "Route 9, Mile Marker 15".into(),
            camera: "CAM-9-15".into(),
            timestamp: "35 minutes ago".into(),
            description: "Illegal lane change pattern detected".into(),
            status: IncidentStatus::Resolved,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_set_is_fixed_and_exhaustive() {
        let incidents = mock_incidents();
        assert_eq!(incidents.len(), 5);

        let active = incidents
            .iter()
            .filter(|i| i.status == IncidentStatus::Active)
            .count();
        let resolved = incidents
            .iter()
            .filter(|i| i.status == IncidentStatus::Resolved)
            .count();
        assert_eq!(active, 2);
        assert_eq!(resolved, 3);
        assert_eq!(active + resolved, incidents.len());
    }

    #[test]
    fn first_incident_is_the_critical_accident() {
        let incidents = mock_incidents();
        assert_eq!(incidents[0].id, "INC001");
        assert_eq!(incidents[0].severity, Severity::Critical);
        assert_eq!(incidents[0].status, IncidentStatus::Active);
    }

    #[test]
    fn type_labels_match_display_names() {
        assert_eq!(IncidentType::WrongWay.label(), "Wrong-Way Driving");
        assert_eq!(IncidentType::Breakdown.label(), "Vehicle Breakdown");
        assert_eq!(IncidentType::LaneViolation.label(), "Lane Violation");
    }

    #[test]
    fn enums_serialize_to_kebab_case_vocabulary() {
        let ty = serde_json::to_value(IncidentType::WrongWay).expect("type json");
        assert_eq!(ty, serde_json::json!("wrong-way"));

        let sev = serde_json::to_value(Severity::Critical).expect("severity json");
        assert_eq!(sev, serde_json::json!("critical"));

        let status = serde_json::to_value(IncidentStatus::Resolved).expect("status json");
        assert_eq!(status, serde_json::json!("resolved"));
    }
}
