use serde::{Deserialize, Serialize};

/// Top-level dashboard panel picked from the navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    #[default]
    Congestion,
    Signals,
    Junctions,
    Analytics,
    Insights,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Congestion,
        Section::Signals,
        Section::Junctions,
        Section::Analytics,
        Section::Insights,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Congestion => "congestion",
            Section::Signals => "signals",
            Section::Junctions => "junctions",
            Section::Analytics => "analytics",
            Section::Insights => "ai",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Congestion => "Congestion Map",
            Section::Signals => "Signal Control",
            Section::Junctions => "Junction List",
            Section::Analytics => "Analytics & Prediction",
            Section::Insights => "AI Insights",
        }
    }

    /// Unknown ids land on the congestion map.
    pub fn from_id(id: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.id() == id)
            .unwrap_or_default()
    }
}

/// Window shown in the analytics range selector. Display only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    Last24h,
    #[default]
    Last7d,
    Last30d,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [TimeRange::Last24h, TimeRange::Last7d, TimeRange::Last30d];

    pub fn id(&self) -> &'static str {
        match self {
            TimeRange::Last24h => "24h",
            TimeRange::Last7d => "7d",
            TimeRange::Last30d => "30d",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Last24h => "Last 24h",
            TimeRange::Last7d => "Last 7 days",
            TimeRange::Last30d => "Last 30 days",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), section);
        }
    }

    #[test]
    fn unknown_section_falls_back_to_congestion() {
        assert_eq!(Section::from_id("settings"), Section::Congestion);
        assert_eq!(Section::default(), Section::Congestion);
    }

    #[test]
    fn insights_use_short_id() {
        assert_eq!(Section::Insights.id(), "ai");
    }

    #[test]
    fn time_range_defaults_to_a_week() {
        assert_eq!(TimeRange::default(), TimeRange::Last7d);
        assert_eq!(TimeRange::from_id("30d"), Some(TimeRange::Last30d));
        assert_eq!(TimeRange::from_id("1y"), None);
    }
}
