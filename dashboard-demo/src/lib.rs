//! Headless walk-through of an alert session against the seed fixture.
//!
//! Each step is applied to a freshly seeded registry in order and the
//! registry is printed as JSON after every step.

use alert_registry::{Alert, AlertId, AlertRegistry, AlertSummary};
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use traffic_data::{ConfigError, DashboardConfig};

#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("cannot encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("bad step '{0}', expected resolve:<id> or dismiss:<id>")]
    BadStep(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Resolve(AlertId),
    Dismiss(AlertId),
}

impl Step {
    pub fn parse(raw: &str) -> Result<Self, DemoError> {
        let bad = || DemoError::BadStep(raw.to_string());
        let (op, id) = raw.split_once(':').ok_or_else(bad)?;
        let id = AlertId(id.trim().parse().map_err(|_| bad())?);
        match op.trim() {
            "resolve" => Ok(Step::Resolve(id)),
            "dismiss" => Ok(Step::Dismiss(id)),
            _ => Err(bad()),
        }
    }

    pub fn apply(&self, registry: &mut AlertRegistry) {
        match *self {
            Step::Resolve(id) => registry.resolve(id),
            Step::Dismiss(id) => registry.dismiss(id),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Resolve(id) => write!(f, "resolve:{id}"),
            Step::Dismiss(id) => write!(f, "dismiss:{id}"),
        }
    }
}

/// Resolve the accident, then dismiss the fire truck request unresolved.
pub fn default_script() -> Vec<Step> {
    vec![Step::Resolve(AlertId(1)), Step::Dismiss(AlertId(2))]
}

#[derive(Clone, Debug, Serialize)]
pub struct Snapshot {
    pub step: String,
    pub summary: AlertSummary,
    pub banner: Option<String>,
    pub alerts: Vec<Alert>,
}

impl Snapshot {
    fn capture(step: impl Into<String>, registry: &AlertRegistry) -> Self {
        Self {
            step: step.into(),
            summary: registry.summary(),
            banner: registry.banner_message(),
            alerts: registry.iter().cloned().collect(),
        }
    }
}

/// Seeds a registry and replays `steps`, returning one snapshot for the seed
/// and one per step.
pub fn replay(config: &DashboardConfig, steps: &[Step]) -> Result<Vec<Snapshot>, DemoError> {
    let mut registry = config.alert_registry()?;
    let mut snapshots = vec![Snapshot::capture("seed", &registry)];

    for step in steps {
        step.apply(&mut registry);
        tracing::info!(%step, active = registry.summary().active, "step applied");
        snapshots.push(Snapshot::capture(step.to_string(), &registry));
    }

    Ok(snapshots)
}

pub fn run(args: &[String]) -> Result<(), DemoError> {
    let steps = if args.is_empty() {
        default_script()
    } else {
        args.iter()
            .map(|a| Step::parse(a))
            .collect::<Result<Vec<_>, _>>()?
    };

    let config = DashboardConfig::embedded()?;
    tracing::info!(
        title = %config.title,
        signals = config.signals.signals.len(),
        junctions = config.junctions.junctions.len(),
        "dashboard loaded"
    );

    for snapshot in replay(&config, &steps)? {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
    Ok(())
}
