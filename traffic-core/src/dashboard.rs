//! Dashboard interaction state, kept free of any view-layer types so the
//! filter and selection rules can be exercised without a browser.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::incident::{mock_incidents, Incident, IncidentStatus};

/// The status subset the incident list is narrowed to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterStatus {
    #[default]
    All,
    Active,
    Resolved,
}

impl FilterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterStatus::All => "all",
            FilterStatus::Active => "active",
            FilterStatus::Resolved => "resolved",
        }
    }

    pub fn matches(&self, status: IncidentStatus) -> bool {
        match self {
            FilterStatus::All => true,
            FilterStatus::Active => status == IncidentStatus::Active,
            FilterStatus::Resolved => status == IncidentStatus::Resolved,
        }
    }
}

impl FromStr for FilterStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(FilterStatus::All),
            "active" => Ok(FilterStatus::Active),
            "resolved" => Ok(FilterStatus::Resolved),
            other => Err(format!("invalid filter status '{other}'")),
        }
    }
}

/// Pure derivation behind [`Dashboard::visible`]: the full set for
/// [`FilterStatus::All`], otherwise the records whose status matches.
pub fn filter_by_status(incidents: &[Incident], filter: FilterStatus) -> Vec<Incident> {
    incidents
        .iter()
        .filter(|i| filter.matches(i.status))
        .cloned()
        .collect()
}

/// Owned state for the incidents view: the fixed record set plus the two
/// pieces of derived state (active filter, current selection).
///
/// Changing the filter never clears the selection; an incident stays
/// selected even while hidden from the visible list.
#[derive(Clone, Debug)]
pub struct Dashboard {
    incidents: Vec<Incident>,
    filter: FilterStatus,
    selected: Option<Incident>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::with_incidents(mock_incidents())
    }

    pub fn with_incidents(incidents: Vec<Incident>) -> Self {
        Self {
            incidents,
            filter: FilterStatus::default(),
            selected: None,
        }
    }

    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    pub fn filter(&self) -> FilterStatus {
        self.filter
    }

    pub fn set_filter(&mut self, filter: FilterStatus) {
        self.filter = filter;
    }

    /// Replace the current selection unconditionally, last write wins.
    pub fn select(&mut self, incident: Incident) {
        self.selected = Some(incident);
    }

    pub fn selected(&self) -> Option<&Incident> {
        self.selected.as_ref()
    }

    pub fn visible(&self) -> Vec<Incident> {
        filter_by_status(&self.incidents, self.filter)
    }

    pub fn active_count(&self) -> usize {
        self.incidents
            .iter()
            .filter(|i| i.status == IncidentStatus::Active)
            .count()
    }

    pub fn resolved_count(&self) -> usize {
        self.incidents
            .iter()
            .filter(|i| i.status == IncidentStatus::Resolved)
            .count()
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_all_returns_full_set() {
        let incidents = mock_incidents();
        let visible = filter_by_status(&incidents, FilterStatus::All);
        assert_eq!(visible, incidents);
    }

    #[test]
    fn filter_narrows_to_matching_status() {
        let incidents = mock_incidents();

        let active = filter_by_status(&incidents, FilterStatus::Active);
        assert_eq!(active.len(), 2);
        assert!(active.iter().all(|i| i.status == IncidentStatus::Active));

        let resolved = filter_by_status(&incidents, FilterStatus::Resolved);
        assert_eq!(resolved.len(), 3);
        assert!(resolved.iter().all(|i| i.status == IncidentStatus::Resolved));
    }

    #[test]
    fn selection_is_last_write_wins() {
        let mut dash = Dashboard::new();
        let first = dash.incidents()[0].clone();
        let second = dash.incidents()[1].clone();

        assert!(dash.selected().is_none());

        dash.select(first.clone());
        assert_eq!(dash.selected(), Some(&first));

        dash.select(second.clone());
        assert_eq!(dash.selected(), Some(&second));
    }

    #[test]
    fn counts_partition_the_fixed_set() {
        let dash = Dashboard::new();
        assert_eq!(dash.active_count(), 2);
        assert_eq!(dash.resolved_count(), 3);
        assert_eq!(
            dash.active_count() + dash.resolved_count(),
            dash.incidents().len()
        );
    }

    #[test]
    fn filter_change_leaves_selection_in_place() {
        let mut dash = Dashboard::new();
        assert_eq!(dash.visible().len(), 5);

        dash.set_filter(FilterStatus::Active);
        assert_eq!(dash.visible().len(), 2);

        let inc001 = dash.visible()[0].clone();
        assert_eq!(inc001.id, "INC001");
        dash.select(inc001.clone());

        // INC001 is active, so switching to the resolved subset hides it
        // from the list. The selection is deliberately not cleared.
        dash.set_filter(FilterStatus::Resolved);
        assert_eq!(dash.visible().len(), 3);
        assert!(dash.visible().iter().all(|i| i.id != "INC001"));
        assert_eq!(dash.selected(), Some(&inc001));
    }

    #[test]
    fn filter_status_parses_control_values() {
        assert_eq!("all".parse::<FilterStatus>(), Ok(FilterStatus::All));
        assert_eq!("active".parse::<FilterStatus>(), Ok(FilterStatus::Active));
        assert_eq!(
            "resolved".parse::<FilterStatus>(),
            Ok(FilterStatus::Resolved)
        );
        assert!("open".parse::<FilterStatus>().is_err());
    }

    #[test]
    fn filter_status_round_trips_as_str() {
        for filter in [FilterStatus::All, FilterStatus::Active, FilterStatus::Resolved] {
            assert_eq!(filter.as_str().parse::<FilterStatus>(), Ok(filter));
        }
    }

    #[test]
    fn default_filter_is_all() {
        assert_eq!(FilterStatus::default(), FilterStatus::All);
        assert_eq!(Dashboard::new().filter(), FilterStatus::All);
    }
}
