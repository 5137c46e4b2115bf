use super::badges::{congestion_class, congestion_dot};
use super::stats::StatGrid;
use leptos::*;
use traffic_data::config::CongestionPanel;

#[component]
pub fn CongestionMap(panel: CongestionPanel) -> impl IntoView {
    let CongestionPanel { zones, stats } = panel;

    view! {
      <section class="panel">
        <h2>"Real-Time Traffic Map"</h2>
        <div class="card">
          <p>"Interactive Traffic Map"</p>
          <p class="meta">"Real-time congestion data visualization"</p>
        </div>
        <div class="grid">
          {zones
              .into_iter()
              .map(|zone| view! {
                <div class="card row">
                  <span class=congestion_dot(zone.level)></span>
                  <div>
                    <div><b>{zone.location}</b></div>
                    <div class="meta">{format!("{} vehicles", zone.vehicles)}</div>
                  </div>
                  <span class=congestion_class(zone.level)>{zone.level.as_str()}</span>
                </div>
              })
              .collect_view()}
        </div>
      </section>
      <StatGrid tiles=stats/>
    }
}
