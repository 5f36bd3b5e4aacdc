//! Presentational building blocks for the dashboard route.

pub mod details_panel;
pub mod icon;
pub mod incident_list;
pub mod metrics;

use traffic_core::{IncidentType, Severity};

pub(crate) fn severity_border_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "border-red-500",
        Severity::High => "border-orange-500",
        Severity::Medium => "border-yellow-500",
        Severity::Low => "border-blue-500",
    }
}

pub(crate) fn severity_accent_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "bg-red-500",
        Severity::High => "bg-orange-500",
        Severity::Medium => "bg-yellow-500",
        Severity::Low => "bg-blue-500",
    }
}

pub(crate) fn severity_badge_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "bg-red-100 text-red-700",
        Severity::High => "bg-orange-100 text-orange-700",
        Severity::Medium => "bg-yellow-100 text-yellow-700",
        Severity::Low => "bg-blue-100 text-blue-700",
    }
}

/// Icon name and tint class for an incident type.
pub(crate) fn type_icon(incident_type: IncidentType) -> (&'static str, &'static str) {
    match incident_type {
        IncidentType::Accident => ("alert-circle", "text-red-600"),
        IncidentType::WrongWay => ("trending-up", "text-orange-600"),
        IncidentType::Breakdown => ("activity", "text-yellow-600"),
        IncidentType::Pedestrian => ("alert-circle", "text-blue-600"),
        IncidentType::LaneViolation => ("alert-circle", "text-purple-600"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_classes_are_consistent_per_level() {
        for severity in [
            Severity::Critical,
            Severity::High,
            Severity::Medium,
            Severity::Low,
        ] {
            let border = severity_border_class(severity);
            let accent = severity_accent_class(severity);
            let hue = border.trim_start_matches("border-");
            assert_eq!(accent.trim_start_matches("bg-"), hue);

            let badge = severity_badge_class(severity);
            let color = hue.trim_end_matches("-500");
            assert!(badge.contains(color));
        }
    }

    #[test]
    fn every_type_has_an_icon() {
        for incident_type in [
            IncidentType::Accident,
            IncidentType::WrongWay,
            IncidentType::Breakdown,
            IncidentType::Pedestrian,
            IncidentType::LaneViolation,
        ] {
            let (name, tint) = type_icon(incident_type);
            assert!(!name.is_empty());
            assert!(tint.starts_with("text-"));
        }
    }
}
