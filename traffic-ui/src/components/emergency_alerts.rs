use super::badges::{alert_card_class, alert_status_class, severity_class};
use alert_registry::{Alert, AlertId, AlertRegistry};
use leptos::*;
use traffic_data::config::AlertsPanel;

/// Alert list, protocols and statistics. Reads and mutates the shared
/// registry so the navigation badge follows along.
#[component]
pub fn EmergencyAlerts(registry: RwSignal<AlertRegistry>, panel: AlertsPanel) -> impl IntoView {
    let AlertsPanel {
        todays_alerts,
        avg_response_time,
        protocols,
        ..
    } = panel;

    let banner = move || registry.with(|r| r.banner_message());
    let summary = move || registry.with(|r| r.summary());

    let resolve = move |id: AlertId| {
        registry.update(|r| r.resolve(id));
        logging::log!("alert {id} resolved");
    };
    let dismiss = move |id: AlertId| {
        let was_active = registry.with_untracked(|r| r.get(id).map(Alert::is_active));
        registry.update(|r| r.dismiss(id));
        if was_active == Some(true) {
            logging::warn!("alert {id} dismissed while still active");
        }
    };

    view! {
      <div class="stack">
        <Show when=move || banner().is_some() fallback=|| ()>
          <div class="banner">{move || banner().unwrap_or_default()}</div>
        </Show>

        <section class="panel">
          <div class="row">
            <h3>"Emergency Alerts & Responses"</h3>
            <button>"New Alert"</button>
          </div>
          <For
            each=move || registry.with(|r| r.iter().cloned().collect::<Vec<_>>())
            key=|a| (a.id, a.status)
            children=move |a: Alert| {
              let id = a.id;
              let resolve_button = a.is_active().then(|| view! {
                <button on:click=move |_| resolve(id)>"Resolve"</button>
              });
              view! {
                <div class=alert_card_class(a.status)>
                  <div class="row">
                    <b>{a.kind.clone()}</b>
                    <span class=severity_class(a.severity)>{a.severity.as_str()}</span>
                    <span class=alert_status_class(a.status)>{a.status.as_str()}</span>
                    {resolve_button}
                    <button title="Dismiss" on:click=move |_| dismiss(id)>"\u{00d7}"</button>
                  </div>
                  <p class="meta">{a.description.clone()}</p>
                  <div class="row meta">
                    <span>{a.location.clone()}</span>
                    <span>{a.time.clone()}</span>
                  </div>
                  <div class="grid">
                    <div><div class="meta">"Response Team"</div><b>{a.responders.clone()}</b></div>
                    <div><div class="meta">"ETA"</div><b>{a.eta.clone()}</b></div>
                  </div>
                </div>
              }
            }
          />
        </section>

        <div class="grid">
          <section class="panel">
            <h3>"Emergency Protocols"</h3>
            {protocols
                .into_iter()
                .map(|label| view! { <div><button>{label}</button></div> })
                .collect_view()}
          </section>
          <section class="panel">
            <h3>"Alert Statistics"</h3>
            <table>
              <tr><td>"Today's Alerts"</td><td>{todays_alerts}</td></tr>
              <tr><td>"Active"</td><td class="text-red">{move || summary().active}</td></tr>
              <tr><td>"Resolved"</td><td class="text-green">{move || summary().resolved}</td></tr>
              <tr><td>"Avg Response Time"</td><td>{avg_response_time}</td></tr>
            </table>
          </section>
        </div>
      </div>
    }
}
