use crate::model::{
    CongestionShare, CongestionZone, EfficiencyPoint, HourlyVolume, Insight, Junction,
    JunctionPrediction, ModelPerformance, PerformanceMetric, Recommendation, SignalSystemStatus,
    StatTile, TrafficSignal, WeeklyVolume,
};
use alert_registry::{Alert, AlertRegistry, RegistryError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

const EMBEDDED_FIXTURE: &str = include_str!("../fixtures/dashboard.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("dashboard fixture is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("dashboard alert seed rejected: {0}")]
    Registry(#[from] RegistryError),
    #[error("dashboard fixture is inconsistent: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CongestionPanel {
    pub zones: Vec<CongestionZone>,
    pub stats: Vec<StatTile>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignalPanel {
    pub signals: Vec<TrafficSignal>,
    pub system_status: SignalSystemStatus,
    pub quick_actions: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JunctionPanel {
    pub junctions: Vec<Junction>,
    pub stats: Vec<StatTile>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsPanel {
    pub hourly_traffic: Vec<HourlyVolume>,
    pub congestion_distribution: Vec<CongestionShare>,
    pub weekly_traffic: Vec<WeeklyVolume>,
    pub hourly_efficiency: Vec<EfficiencyPoint>,
    pub junction_predictions: Vec<JunctionPrediction>,
    pub performance_metrics: Vec<PerformanceMetric>,
    pub stats: Vec<StatTile>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InsightsPanel {
    pub insights: Vec<Insight>,
    pub recommendations: Vec<Recommendation>,
    pub model_performance: Vec<ModelPerformance>,
    pub stats: Vec<StatTile>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlertsPanel {
    pub seed: Vec<Alert>,
    pub todays_alerts: u32,
    pub avg_response_time: String,
    pub protocols: Vec<String>,
}

/// Everything the dashboard shows, as loaded from the seed fixture.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub title: String,
    pub subtitle: String,
    pub congestion: CongestionPanel,
    pub signals: SignalPanel,
    pub junctions: JunctionPanel,
    pub analytics: AnalyticsPanel,
    pub insights: InsightsPanel,
    pub alerts: AlertsPanel,
}

impl DashboardConfig {
    /// The fixture compiled into the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json_str(EMBEDDED_FIXTURE)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig = serde_json::from_str(raw)?;
        config.validate()?;
        tracing::debug!(
            signals = config.signals.signals.len(),
            junctions = config.junctions.junctions.len(),
            insights = config.insights.insights.len(),
            alerts = config.alerts.seed.len(),
            "dashboard config loaded"
        );
        Ok(config)
    }

    /// A fresh registry holding the seed alerts. Each call starts over from
    /// the seed, the way a page reload does.
    pub fn alert_registry(&self) -> Result<AlertRegistry, ConfigError> {
        Ok(AlertRegistry::new(self.alerts.seed.clone())?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Invalid("title is required".into()));
        }

        self.alert_registry()?;

        unique_ids("signal", self.signals.signals.iter().map(|s| s.id))?;
        unique_ids("junction", self.junctions.junctions.iter().map(|j| j.id))?;
        unique_ids("insight", self.insights.insights.iter().map(|i| i.id))?;

        if let Some(j) = self
            .junctions
            .junctions
            .iter()
            .find(|j| j.active_feeds > j.cameras)
        {
            return Err(ConfigError::Invalid(format!(
                "junction {} has {} active feeds but only {} cameras",
                j.id, j.active_feeds, j.cameras
            )));
        }

        if let Some(i) = self
            .insights
            .insights
            .iter()
            .find(|i| i.title.trim().is_empty())
        {
            return Err(ConfigError::Invalid(format!("insight {} has no title", i.id)));
        }

        if let Some(pos) = self
            .insights
            .recommendations
            .iter()
            .position(|r| r.title.trim().is_empty())
        {
            return Err(ConfigError::Invalid(format!(
                "recommendation #{} has no title",
                pos + 1
            )));
        }

        if let Some(e) = self
            .analytics
            .hourly_efficiency
            .iter()
            .find(|e| e.efficiency > 100)
        {
            return Err(ConfigError::Invalid(format!(
                "efficiency at hour {} is {} above 100",
                e.hour, e.efficiency
            )));
        }

        if let Some(i) = self
            .insights
            .insights
            .iter()
            .find(|i| i.confidence > 100)
        {
            return Err(ConfigError::Invalid(format!(
                "insight {} has confidence {} above 100",
                i.id, i.confidence
            )));
        }

        if let Some(m) = self
            .insights
            .model_performance
            .iter()
            .find(|m| !(0.0..=100.0).contains(&m.accuracy))
        {
            return Err(ConfigError::Invalid(format!(
                "model '{}' has accuracy {} outside 0-100",
                m.model, m.accuracy
            )));
        }

        Ok(())
    }
}

fn unique_ids(what: &str, ids: impl Iterator<Item = u32>) -> Result<(), ConfigError> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ConfigError::Invalid(format!("duplicate {what} id {id}")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alert_registry::{AlertId, AlertStatus};

    fn embedded_json() -> serde_json::Value {
        serde_json::from_str(EMBEDDED_FIXTURE).expect("fixture json")
    }

    #[test]
    fn embedded_fixture_loads() {
        let config = DashboardConfig::embedded().expect("embedded");
        assert_eq!(config.title, "ASAR");
        assert_eq!(config.congestion.zones.len(), 4);
        assert_eq!(config.signals.signals.len(), 4);
        assert_eq!(config.junctions.junctions.len(), 4);
        assert_eq!(config.analytics.junction_predictions.len(), 3);
        assert_eq!(config.insights.insights.len(), 4);
        assert_eq!(config.alerts.todays_alerts, 12);
    }

    #[test]
    fn seed_registry_has_two_active_alerts() {
        let config = DashboardConfig::embedded().expect("embedded");
        let reg = config.alert_registry().expect("registry");
        assert_eq!(reg.len(), 3);
        assert_eq!(reg.count_by_status(AlertStatus::Active), 2);
        assert_eq!(
            reg.get(AlertId(3)).map(|a| a.status),
            Some(AlertStatus::Resolved)
        );
    }

    #[test]
    fn each_registry_starts_from_the_seed() {
        let config = DashboardConfig::embedded().expect("embedded");
        let mut first = config.alert_registry().expect("registry");
        first.dismiss(AlertId(1));

        let second = config.alert_registry().expect("registry");
        assert!(second.contains(AlertId(1)));
    }

    #[test]
    fn duplicate_alert_ids_are_rejected() {
        let mut json = embedded_json();
        json["alerts"]["seed"][1]["id"] = serde_json::json!(1);

        let err = DashboardConfig::from_json_str(&json.to_string()).expect_err("duplicate");
        assert!(matches!(
            err,
            ConfigError::Registry(RegistryError::DuplicateId(AlertId(1)))
        ));
    }

    #[test]
    fn feeds_above_cameras_are_rejected() {
        let mut json = embedded_json();
        json["junctions"]["junctions"][0]["active_feeds"] = serde_json::json!(9);

        let err = DashboardConfig::from_json_str(&json.to_string()).expect_err("feeds");
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("junction 1")));
    }

    #[test]
    fn confidence_above_100_is_rejected() {
        let mut json = embedded_json();
        json["insights"]["insights"][2]["confidence"] = serde_json::json!(140);

        let err = DashboardConfig::from_json_str(&json.to_string()).expect_err("confidence");
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn efficiency_above_100_is_rejected() {
        let mut json = embedded_json();
        json["analytics"]["hourly_efficiency"][1]["efficiency"] = serde_json::json!(130);

        let err = DashboardConfig::from_json_str(&json.to_string()).expect_err("efficiency");
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("hour 08")));
    }

    #[test]
    fn blank_insight_title_is_rejected() {
        let mut json = embedded_json();
        json["insights"]["insights"][0]["title"] = serde_json::json!("  ");

        let err = DashboardConfig::from_json_str(&json.to_string()).expect_err("title");
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("insight 1")));
    }

    #[test]
    fn blank_recommendation_title_is_rejected() {
        let mut json = embedded_json();
        json["insights"]["recommendations"][2]["title"] = serde_json::json!("");

        let err = DashboardConfig::from_json_str(&json.to_string()).expect_err("title");
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("recommendation #3")));
    }

    #[test]
    fn large_weekly_volumes_are_accepted() {
        let mut json = embedded_json();
        json["analytics"]["weekly_traffic"][0]["vehicles"] = serde_json::json!(50_000_000);

        let config = DashboardConfig::from_json_str(&json.to_string()).expect("config");
        assert_eq!(config.analytics.weekly_traffic[0].vehicles, 50_000_000);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = DashboardConfig::from_json_str("{ \"title\": ").expect_err("parse");
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
