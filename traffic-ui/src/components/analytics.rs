use super::badges::{change_class, risk_class};
use super::stats::StatGrid;
use leptos::*;
use traffic_data::config::AnalyticsPanel;
use traffic_data::model::Trend;
use traffic_data::TimeRange;

/// Bar width as a share of the largest value in the series, capped at 100%.
fn bar_width(value: u32, max: u32) -> String {
    let pct = if max == 0 {
        0
    } else {
        (u64::from(value) * 100 / u64::from(max)).min(100)
    };
    format!("width: {pct}%")
}

#[component]
pub fn AnalyticsAndPrediction(panel: AnalyticsPanel) -> impl IntoView {
    let AnalyticsPanel {
        hourly_traffic,
        congestion_distribution,
        weekly_traffic,
        hourly_efficiency,
        junction_predictions,
        performance_metrics,
        stats,
    } = panel;

    let time_range = create_rw_signal(TimeRange::default());
    let weekly_max = weekly_traffic.iter().map(|w| w.vehicles).max().unwrap_or(0);

    view! {
      <section class="panel row">
        <h2>"Traffic Analytics & Prediction"</h2>
        <select
          prop:value=move || time_range.get().id()
          on:change=move |ev| {
            if let Some(range) = TimeRange::from_id(&event_target_value(&ev)) {
              time_range.set(range);
            }
          }
        >
          {TimeRange::ALL
              .into_iter()
              .map(|r| view! { <option value=r.id()>{r.label()}</option> })
              .collect_view()}
        </select>
        <button>"Export"</button>
      </section>

      <div class="grid">
        <section class="panel">
          <h3>"24-Hour Traffic Prediction"</h3>
          <table>
            <tr><th>"Time"</th><th>"Volume"</th><th>"Prediction"</th></tr>
            {hourly_traffic
                .into_iter()
                .map(|h| view! {
                  <tr><td>{h.time}</td><td>{h.volume}</td><td>{h.prediction}</td></tr>
                })
                .collect_view()}
          </table>
        </section>
        <section class="panel">
          <h3>"Congestion Distribution"</h3>
          {congestion_distribution
              .into_iter()
              .map(|share| view! {
                <div class="row">
                  <span class="dot" style=format!("background: {}", share.color)></span>
                  <span>{share.name}</span>
                  <b>{format!("{}%", share.value)}</b>
                </div>
              })
              .collect_view()}
        </section>
      </div>

      <section class="panel">
        <h3>"Junction Predictions (Next 2 Hours)"</h3>
        {junction_predictions
            .into_iter()
            .map(|p| {
                let change = change_class(p.is_increase());
                view! {
                  <div class="card">
                    <div class="row">
                      <b>{p.name.clone()}</b>
                      <span class=risk_class(p.risk)>{format!("{} Risk", p.risk.as_str())}</span>
                    </div>
                    <div class="row">
                      <span>{format!("Current: {}", p.current)}</span>
                      <span>{format!("Predicted: {}", p.predicted)}</span>
                      <span class=change>{format!("Change: {}", p.change)}</span>
                      <span>{format!("Action: {}", p.risk.recommended_action())}</span>
                    </div>
                  </div>
                }
            })
            .collect_view()}
      </section>

      <div class="grid">
        <section class="panel">
          <h3>"Weekly Traffic Volume"</h3>
          {weekly_traffic
              .into_iter()
              .map(|w| view! {
                <div>
                  <div class="row"><span>{w.day}</span><span class="meta">{w.vehicles}</span></div>
                  <div class="bar" style=bar_width(w.vehicles, weekly_max)></div>
                </div>
              })
              .collect_view()}
        </section>
        <section class="panel">
          <h3>"System Efficiency"</h3>
          {hourly_efficiency
              .into_iter()
              .map(|e| view! {
                <div>
                  <div class="row"><span>{format!("{}:00", e.hour)}</span><span class="meta">{format!("{}%", e.efficiency)}</span></div>
                  <div class="bar" style=bar_width(e.efficiency, 100)></div>
                </div>
              })
              .collect_view()}
        </section>
      </div>

      <section class="panel">
        {performance_metrics
            .into_iter()
            .map(|m| {
                let arrow = match m.trend {
                    Trend::Up => "\u{25b2}",
                    Trend::Down => "\u{25bc}",
                };
                view! {
                  <div class="row">
                    <span>{m.metric}</span>
                    <b>{m.value}</b>
                    <span class="meta">{format!("{arrow} {}", m.change)}</span>
                  </div>
                }
            })
            .collect_view()}
      </section>

      <StatGrid tiles=stats/>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_width_is_relative_to_max() {
        assert_eq!(bar_width(15670, 15670), "width: 100%");
        assert_eq!(bar_width(9800, 15670), "width: 62%");
        assert_eq!(bar_width(5, 0), "width: 0%");
    }

    #[test]
    fn bar_width_handles_large_and_oversized_values() {
        assert_eq!(bar_width(u32::MAX, u32::MAX), "width: 100%");
        assert_eq!(bar_width(50_000_000, 100_000_000), "width: 50%");
        assert_eq!(bar_width(120, 100), "width: 100%");
    }
}
