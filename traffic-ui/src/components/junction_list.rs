use super::badges::{flow_class, junction_dot};
use super::stats::StatGrid;
use leptos::*;
use traffic_data::config::JunctionPanel;
use traffic_data::model::JunctionStatus;

#[component]
pub fn JunctionList(panel: JunctionPanel) -> impl IntoView {
    let JunctionPanel { junctions, stats } = panel;

    view! {
      <section class="panel">
        <h2>"Junction Monitoring & Camera Feeds"</h2>
        {junctions
            .into_iter()
            .map(|j| {
                let status_badge = if j.status == JunctionStatus::Online { "badge blue" } else { "badge" };
                let incidents_badge = if j.has_incidents() { "badge destructive" } else { "badge" };
                view! {
                  <div class="card">
                    <div class="row">
                      <div>
                        <b>{j.name.clone()}</b>
                        <div class="meta">{format!("Junction ID: {}", j.id)}</div>
                      </div>
                      <span class=junction_dot(j.status)></span>
                      <span class=status_badge>{j.status.as_str()}</span>
                    </div>
                    <div class="grid">
                      <div><div class="meta">"Cameras"</div><b>{j.cameras}</b></div>
                      <div><div class="meta">"Active Feeds"</div><b>{j.feeds_label()}</b></div>
                      <div>
                        <div class="meta">"Traffic Flow"</div>
                        <b class=flow_class(j.traffic_flow)>{j.traffic_flow.as_str()}</b>
                      </div>
                      <div><span class=incidents_badge>{format!("{} Incidents", j.incidents)}</span></div>
                    </div>
                    <div class="row">
                      <span class="meta">{format!("Last activity: {}", j.last_activity)}</span>
                      <button>"View Feeds"</button>
                      <button>"Camera Settings"</button>
                      <button>"Details"</button>
                    </div>
                  </div>
                }
            })
            .collect_view()}
      </section>
      <StatGrid tiles=stats/>
    }
}
