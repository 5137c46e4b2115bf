use super::badges::{accuracy_class, insight_status_class, priority_class};
use super::stats::StatGrid;
use leptos::*;
use traffic_data::config::InsightsPanel;
use traffic_data::model::InsightStatus;

#[component]
pub fn AiInsights(panel: InsightsPanel) -> impl IntoView {
    let InsightsPanel {
        insights,
        recommendations,
        model_performance,
        stats,
    } = panel;

    view! {
      <section class="panel">
        <h2>"AI-Powered Traffic Insights"</h2>
        {insights
            .into_iter()
            .map(|i| {
                let action = match i.status {
                    InsightStatus::ActionRequired => Some("Implement"),
                    InsightStatus::Pending => Some("Review"),
                    InsightStatus::New | InsightStatus::Implemented => None,
                };
                view! {
                  <div class="card">
                    <div class="row">
                      <b>{i.title.clone()}</b>
                      <span class=priority_class(i.priority)>{i.priority.as_str()}</span>
                      <span class=insight_status_class(i.status)>{i.status.as_str()}</span>
                    </div>
                    <p class="meta">{i.description.clone()}</p>
                    <div class="grid">
                      <div><div class="meta">"Impact"</div><b>{i.impact.clone()}</b></div>
                      <div>
                        <div class="meta">"Confidence"</div>
                        <progress max="100" value=i.confidence.to_string()></progress>
                        " "
                        <b>{format!("{}%", i.confidence)}</b>
                      </div>
                      <div><div class="meta">"Implementation"</div><b>{i.implementation.clone()}</b></div>
                      <div><div class="meta">"Type"</div><b>{i.kind.as_str()}</b></div>
                    </div>
                    <div class="row">
                      {action.map(|label| view! { <button>{label}</button> })}
                      <button>"Details"</button>
                    </div>
                  </div>
                }
            })
            .collect_view()}
      </section>

      <div class="grid">
        <section class="panel">
          <h3>"AI Recommendations"</h3>
          {recommendations
              .into_iter()
              .map(|r| view! {
                <div class="card">
                  <b>{r.title}</b>
                  <p class="meta">{r.description}</p>
                  <div class="grid">
                    <div><div class="meta">"Benefit"</div><b class="text-green">{r.expected_benefit}</b></div>
                    <div><div class="meta">"Effort"</div><b>{r.effort}</b></div>
                    <div><div class="meta">"Timeline"</div><b>{r.timeline}</b></div>
                  </div>
                </div>
              })
              .collect_view()}
        </section>
        <section class="panel">
          <h3>"AI Model Performance"</h3>
          {model_performance
              .into_iter()
              .map(|m| {
                  let class = accuracy_class(m.band());
                  view! {
                    <div class="card row">
                      <div>
                        <b>{m.model.clone()}</b>
                        <div class="meta">{m.status.clone()}</div>
                      </div>
                      <b class=class>{format!("{}%", m.accuracy)}</b>
                      <progress max="100" value=m.accuracy.to_string()></progress>
                    </div>
                  }
              })
              .collect_view()}
        </section>
      </div>

      <StatGrid tiles=stats/>
    }
}
