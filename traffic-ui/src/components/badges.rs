use alert_registry::{AlertStatus, Severity};
use traffic_data::model::{
    AccuracyBand, CongestionLevel, InsightStatus, JunctionStatus, Priority, RiskLevel,
    SignalPhase, SignalStatus, TrafficFlow,
};

pub fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "badge red",
        Severity::Medium => "badge yellow",
        Severity::Low => "badge green",
    }
}

pub fn alert_status_class(status: AlertStatus) -> &'static str {
    match status {
        AlertStatus::Active => "badge red",
        AlertStatus::Resolved => "badge",
    }
}

pub fn alert_card_class(status: AlertStatus) -> &'static str {
    if status.is_active() {
        "card attention"
    } else {
        "card"
    }
}

pub fn congestion_class(level: CongestionLevel) -> &'static str {
    match level {
        CongestionLevel::High => "badge red",
        CongestionLevel::Medium => "badge yellow",
        CongestionLevel::Low => "badge green",
    }
}

pub fn congestion_dot(level: CongestionLevel) -> &'static str {
    match level {
        CongestionLevel::High => "dot red",
        CongestionLevel::Medium => "dot yellow",
        CongestionLevel::Low => "dot green",
    }
}

pub fn signal_status_class(status: SignalStatus) -> &'static str {
    match status {
        SignalStatus::Active => "badge blue",
        SignalStatus::Maintenance => "badge yellow",
        SignalStatus::Offline => "badge",
    }
}

pub fn phase_dot(phase: SignalPhase) -> &'static str {
    match phase {
        SignalPhase::Green => "dot green",
        SignalPhase::Red => "dot red",
        SignalPhase::Yellow => "dot yellow",
    }
}

pub fn junction_dot(status: JunctionStatus) -> &'static str {
    match status {
        JunctionStatus::Online => "dot green",
        JunctionStatus::Maintenance => "dot yellow",
        JunctionStatus::Offline => "dot red",
    }
}

pub fn flow_class(flow: TrafficFlow) -> &'static str {
    match flow {
        TrafficFlow::Light => "text-green",
        TrafficFlow::Normal => "text-blue",
        TrafficFlow::Heavy => "text-orange",
    }
}

pub fn risk_class(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => "badge green",
        RiskLevel::Medium => "badge yellow",
        RiskLevel::High => "badge red",
    }
}

pub fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "badge destructive",
        Priority::Medium => "badge",
        Priority::Low => "badge blue",
    }
}

pub fn insight_status_class(status: InsightStatus) -> &'static str {
    match status {
        InsightStatus::ActionRequired => "badge red",
        InsightStatus::Pending => "badge yellow",
        InsightStatus::New => "badge blue",
        InsightStatus::Implemented => "badge green",
    }
}

pub fn accuracy_class(band: AccuracyBand) -> &'static str {
    match band {
        AccuracyBand::Good => "text-green",
        AccuracyBand::Fair => "text-yellow",
        AccuracyBand::Poor => "text-red",
    }
}

/// Red for growth, green for decline. Used for both predictions and metrics.
pub fn change_class(increase: bool) -> &'static str {
    if increase {
        "text-red"
    } else {
        "text-green"
    }
}

pub fn nav_class(selected: bool) -> &'static str {
    if selected {
        "nav-active"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_alerts_are_highlighted() {
        assert_eq!(alert_card_class(AlertStatus::Active), "card attention");
        assert_eq!(alert_card_class(AlertStatus::Resolved), "card");
        assert_eq!(alert_status_class(AlertStatus::Active), "badge red");
    }

    #[test]
    fn severity_colours() {
        assert_eq!(severity_class(Severity::High), "badge red");
        assert_eq!(severity_class(Severity::Medium), "badge yellow");
        assert_eq!(severity_class(Severity::Low), "badge green");
    }

    #[test]
    fn accuracy_uses_band() {
        assert_eq!(accuracy_class(AccuracyBand::from_accuracy(94.2)), "text-green");
        assert_eq!(accuracy_class(AccuracyBand::from_accuracy(87.5)), "text-yellow");
    }

    #[test]
    fn insight_status_colours() {
        assert_eq!(insight_status_class(InsightStatus::ActionRequired), "badge red");
        assert_eq!(insight_status_class(InsightStatus::Implemented), "badge green");
    }
}
