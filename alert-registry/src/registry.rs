use crate::alert::{Alert, AlertId, AlertStatus};
use crate::error::RegistryError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Counts shown on the alert statistics card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertSummary {
    pub total: usize,
    pub active: usize,
    pub resolved: usize,
}

/// Working set of alerts for one dashboard session.
///
/// Insertion order is display order. Lookups are linear; the set is a handful
/// of alerts and is only touched from click handlers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Alert>", into = "Vec<Alert>")]
pub struct AlertRegistry {
    alerts: Vec<Alert>,
}

impl TryFrom<Vec<Alert>> for AlertRegistry {
    type Error = RegistryError;

    fn try_from(alerts: Vec<Alert>) -> Result<Self, Self::Error> {
        Self::new(alerts)
    }
}

impl From<AlertRegistry> for Vec<Alert> {
    fn from(registry: AlertRegistry) -> Self {
        registry.alerts
    }
}

impl AlertRegistry {
    /// Builds a registry from seed alerts, keeping their order.
    pub fn new(alerts: Vec<Alert>) -> Result<Self, RegistryError> {
        let mut seen = BTreeSet::new();
        for alert in &alerts {
            if !seen.insert(alert.id) {
                return Err(RegistryError::DuplicateId(alert.id));
            }
        }
        tracing::debug!(count = alerts.len(), "alert registry seeded");
        Ok(Self { alerts })
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter()
    }

    pub fn get(&self, id: AlertId) -> Option<&Alert> {
        self.alerts.iter().find(|a| a.id == id)
    }

    pub fn contains(&self, id: AlertId) -> bool {
        self.get(id).is_some()
    }

    /// Marks an alert resolved. Unknown ids and already-resolved alerts are
    /// left as they are.
    pub fn resolve(&mut self, id: AlertId) {
        if let Err(err) = self.try_resolve(id) {
            tracing::trace!(%id, %err, "resolve ignored");
        }
    }

    /// Like [`resolve`](Self::resolve) but reports a missing id. On success
    /// returns the status the alert had before the call.
    pub fn try_resolve(&mut self, id: AlertId) -> Result<AlertStatus, RegistryError> {
        let alert = self
            .alerts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(RegistryError::NotFound(id))?;

        let previous = alert.status;
        alert.status = AlertStatus::Resolved;
        tracing::debug!(%id, previous = previous.as_str(), "alert resolved");
        Ok(previous)
    }

    /// Removes an alert whatever its status. Unknown ids are ignored.
    ///
    /// An active alert can be dismissed without ever being resolved; it then
    /// simply drops out of every count.
    pub fn dismiss(&mut self, id: AlertId) {
        if let Err(err) = self.try_dismiss(id) {
            tracing::trace!(%id, %err, "dismiss ignored");
        }
    }

    /// Like [`dismiss`](Self::dismiss) but reports a missing id. On success
    /// returns the removed alert.
    pub fn try_dismiss(&mut self, id: AlertId) -> Result<Alert, RegistryError> {
        let idx = self
            .alerts
            .iter()
            .position(|a| a.id == id)
            .ok_or(RegistryError::NotFound(id))?;

        let removed = self.alerts.remove(idx);
        if removed.is_active() {
            tracing::warn!(
                %id,
                severity = removed.severity.as_str(),
                "active alert dismissed without resolution"
            );
        } else {
            tracing::debug!(%id, "alert dismissed");
        }
        Ok(removed)
    }

    /// Alerts still needing attention, in display order.
    pub fn active_alerts(&self) -> Vec<&Alert> {
        self.alerts.iter().filter(|a| a.is_active()).collect()
    }

    pub fn count_by_status(&self, status: AlertStatus) -> usize {
        self.alerts.iter().filter(|a| a.status == status).count()
    }

    pub fn summary(&self) -> AlertSummary {
        AlertSummary {
            total: self.alerts.len(),
            active: self.count_by_status(AlertStatus::Active),
            resolved: self.count_by_status(AlertStatus::Resolved),
        }
    }

    /// Text for the attention banner, if anything is still active.
    pub fn banner_message(&self) -> Option<String> {
        let active = self.count_by_status(AlertStatus::Active);
        (active > 0).then(|| format!("{active} active emergency alert(s) requiring attention"))
    }
}
