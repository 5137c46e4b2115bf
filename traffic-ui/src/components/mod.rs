pub mod ai_insights;
pub mod analytics;
pub mod badges;
pub mod congestion_map;
pub mod emergency_alerts;
pub mod junction_list;
pub mod navigation;
pub mod signal_control;
pub mod stats;

pub use ai_insights::AiInsights;
pub use analytics::AnalyticsAndPrediction;
pub use congestion_map::CongestionMap;
pub use emergency_alerts::EmergencyAlerts;
pub use junction_list::JunctionList;
pub use navigation::Navigation;
pub use signal_control::SignalControl;
