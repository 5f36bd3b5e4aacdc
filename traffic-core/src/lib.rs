pub mod dashboard;
pub mod incident;

pub use dashboard::{filter_by_status, Dashboard, FilterStatus};
pub use incident::{mock_incidents, Incident, IncidentStatus, IncidentType, Severity};
