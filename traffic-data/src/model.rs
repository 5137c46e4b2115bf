use serde::{Deserialize, Serialize};

/// A labelled headline number ("Active Signals: 127").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatTile {
    pub label: String,
    pub value: String,
}

// Congestion map

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CongestionLevel {
    Low,
    Medium,
    High,
}

impl CongestionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CongestionLevel::Low => "Low",
            CongestionLevel::Medium => "Medium",
            CongestionLevel::High => "High",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CongestionZone {
    pub location: String,
    pub level: CongestionLevel,
    pub vehicles: u32,
}

// Signal control

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalStatus {
    Active,
    Maintenance,
    Offline,
}

impl SignalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalStatus::Active => "Active",
            SignalStatus::Maintenance => "Maintenance",
            SignalStatus::Offline => "Offline",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalMode {
    Auto,
    Manual,
    Off,
}

impl SignalMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalMode::Auto => "Auto",
            SignalMode::Manual => "Manual",
            SignalMode::Off => "Off",
        }
    }

    /// Flips the operator-facing mode label. Anything that isn't `Auto`
    /// goes back to `Auto`.
    pub fn toggled(self) -> Self {
        match self {
            SignalMode::Auto => SignalMode::Manual,
            SignalMode::Manual | SignalMode::Off => SignalMode::Auto,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalPhase {
    Green,
    Yellow,
    Red,
}

impl SignalPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalPhase::Green => "Green",
            SignalPhase::Yellow => "Yellow",
            SignalPhase::Red => "Red",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficSignal {
    pub id: u32,
    pub name: String,
    pub status: SignalStatus,
    pub mode: SignalMode,
    pub timing: String,
    pub phase: SignalPhase,
}

impl TrafficSignal {
    /// Play/pause/reset and the mode button are only offered on live signals.
    pub fn controls_enabled(&self) -> bool {
        self.status == SignalStatus::Active
    }

    pub fn needs_repair(&self) -> bool {
        self.status == SignalStatus::Maintenance
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSystemStatus {
    pub total: u32,
    pub active: u32,
    pub maintenance: u32,
    pub offline: u32,
}

// Junctions and cameras

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JunctionStatus {
    Online,
    Maintenance,
    Offline,
}

impl JunctionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JunctionStatus::Online => "Online",
            JunctionStatus::Maintenance => "Maintenance",
            JunctionStatus::Offline => "Offline",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrafficFlow {
    Light,
    Normal,
    Heavy,
}

impl TrafficFlow {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrafficFlow::Light => "Light",
            TrafficFlow::Normal => "Normal",
            TrafficFlow::Heavy => "Heavy",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Junction {
    pub id: u32,
    pub name: String,
    pub cameras: u32,
    pub active_feeds: u32,
    pub status: JunctionStatus,
    pub last_activity: String,
    pub incidents: u32,
    pub traffic_flow: TrafficFlow,
}

impl Junction {
    pub fn feeds_label(&self) -> String {
        format!("{}/{}", self.active_feeds, self.cameras)
    }

    pub fn has_incidents(&self) -> bool {
        self.incidents > 0
    }
}

// Analytics and prediction

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyVolume {
    pub time: String,
    pub volume: u32,
    pub prediction: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CongestionShare {
    pub name: String,
    pub value: u32,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyVolume {
    pub day: String,
    pub vehicles: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EfficiencyPoint {
    pub hour: String,
    pub efficiency: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    pub fn recommended_action(&self) -> &'static str {
        match self {
            RiskLevel::High => "Signal Adjust",
            RiskLevel::Medium => "Monitor",
            RiskLevel::Low => "Normal",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JunctionPrediction {
    pub name: String,
    pub current: u32,
    pub predicted: u32,
    pub change: String,
    pub risk: RiskLevel,
}

impl JunctionPrediction {
    pub fn is_increase(&self) -> bool {
        self.change.starts_with('+')
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceMetric {
    pub metric: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
}

// AI insights

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsightKind {
    Optimization,
    Prediction,
    Alert,
    Efficiency,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::Optimization => "Optimization",
            InsightKind::Prediction => "Prediction",
            InsightKind::Alert => "Alert",
            InsightKind::Efficiency => "Efficiency",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsightStatus {
    New,
    Pending,
    ActionRequired,
    Implemented,
}

impl InsightStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightStatus::New => "New",
            InsightStatus::Pending => "Pending",
            InsightStatus::ActionRequired => "Action Required",
            InsightStatus::Implemented => "Implemented",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub id: u32,
    pub kind: InsightKind,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub impact: String,
    /// Percentage, 0 to 100.
    pub confidence: u8,
    pub implementation: String,
    pub status: InsightStatus,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub expected_benefit: String,
    pub effort: String,
    pub timeline: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelPerformance {
    pub model: String,
    pub accuracy: f32,
    pub status: String,
}

impl ModelPerformance {
    pub fn band(&self) -> AccuracyBand {
        AccuracyBand::from_accuracy(self.accuracy)
    }
}

/// Colour band for a model accuracy figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccuracyBand {
    Good,
    Fair,
    Poor,
}

impl AccuracyBand {
    pub fn from_accuracy(accuracy: f32) -> Self {
        if accuracy >= 90.0 {
            AccuracyBand::Good
        } else if accuracy >= 80.0 {
            AccuracyBand::Fair
        } else {
            AccuracyBand::Poor
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_toggle_returns_to_auto() {
        assert_eq!(SignalMode::Auto.toggled(), SignalMode::Manual);
        assert_eq!(SignalMode::Manual.toggled(), SignalMode::Auto);
        assert_eq!(SignalMode::Off.toggled(), SignalMode::Auto);
    }

    #[test]
    fn toggling_mode_leaves_timing_and_phase() {
        let mut signal = TrafficSignal {
            id: 1,
            name: "Main St & 1st Ave".into(),
            status: SignalStatus::Active,
            mode: SignalMode::Auto,
            timing: "45s".into(),
            phase: SignalPhase::Green,
        };
        signal.toggle_mode();
        assert_eq!(signal.mode, SignalMode::Manual);
        assert_eq!(signal.timing, "45s");
        assert_eq!(signal.phase, SignalPhase::Green);
    }

    #[test]
    fn risk_maps_to_action() {
        assert_eq!(RiskLevel::High.recommended_action(), "Signal Adjust");
        assert_eq!(RiskLevel::Medium.recommended_action(), "Monitor");
        assert_eq!(RiskLevel::Low.recommended_action(), "Normal");
    }

    #[test]
    fn accuracy_band_edges() {
        assert_eq!(AccuracyBand::from_accuracy(90.0), AccuracyBand::Good);
        assert_eq!(AccuracyBand::from_accuracy(89.9), AccuracyBand::Fair);
        assert_eq!(AccuracyBand::from_accuracy(80.0), AccuracyBand::Fair);
        assert_eq!(AccuracyBand::from_accuracy(79.5), AccuracyBand::Poor);
    }

    #[test]
    fn prediction_direction_follows_sign() {
        let mut p = JunctionPrediction {
            name: "Downtown Plaza".into(),
            current: 203,
            predicted: 187,
            change: "-8%".into(),
            risk: RiskLevel::Low,
        };
        assert!(!p.is_increase());
        p.change = "+27%".into();
        assert!(p.is_increase());
    }
}
