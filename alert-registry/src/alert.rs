use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertId(pub u32);

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Lifecycle of an alert. The only transition is `Active` to `Resolved`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertStatus {
    Active,
    Resolved,
}

impl AlertStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertStatus::Active => "Active",
            AlertStatus::Resolved => "Resolved",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, AlertStatus::Active)
    }
}

/// An emergency or incident reported to the traffic operators.
///
/// Everything except `status` is fixed at seed time. `time` and `eta` are
/// display strings ("3 mins ago", "Arrived") and are never recomputed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: AlertId,
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: Severity,
    pub location: String,
    pub time: String,
    pub description: String,
    pub status: AlertStatus,
    pub responders: String,
    pub eta: String,
}

impl Alert {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_type_field_into_kind() {
        let alert: Alert = serde_json::from_value(serde_json::json!({
            "id": 7,
            "type": "Accident",
            "severity": "High",
            "location": "Highway 101 & Oak St",
            "time": "3 mins ago",
            "description": "Multi-vehicle collision blocking 2 lanes",
            "status": "Active",
            "responders": "Police, Ambulance en route",
            "eta": "5 mins"
        }))
        .expect("alert json");

        assert_eq!(alert.id, AlertId(7));
        assert_eq!(alert.kind, "Accident");
        assert_eq!(alert.severity, Severity::High);
        assert!(alert.is_active());
    }

    #[test]
    fn rejects_unknown_status() {
        let result = serde_json::from_value::<AlertStatus>(serde_json::json!("Escalated"));
        assert!(result.is_err());
    }
}
