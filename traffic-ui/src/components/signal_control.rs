use super::badges::{phase_dot, signal_status_class};
use leptos::*;
use traffic_data::config::SignalPanel;
use traffic_data::model::TrafficSignal;

#[component]
pub fn SignalControl(panel: SignalPanel) -> impl IntoView {
    let SignalPanel {
        signals,
        system_status,
        quick_actions,
    } = panel;

    // Local copy: the mode toggle only relabels the row.
    let signals = create_rw_signal(signals);
    let auto_mode = create_rw_signal(true);

    let toggle_mode = move |id: u32| {
        signals.update(|list| {
            if let Some(signal) = list.iter_mut().find(|s| s.id == id) {
                signal.toggle_mode();
                logging::log!("signal {id} mode set to {}", signal.mode.as_str());
            }
        });
    };

    view! {
      <section class="panel">
        <div class="row">
          <h2>"Signal Control Panel"</h2>
          <label class="row">
            "Auto Mode"
            <input
              type="checkbox"
              prop:checked=move || auto_mode.get()
              on:change=move |ev| auto_mode.set(event_target_checked(&ev))
            />
          </label>
        </div>
        <For
          each=move || signals.get()
          key=|s| (s.id, s.mode)
          children=move |s: TrafficSignal| {
            let id = s.id;
            let controls = s.controls_enabled().then(|| view! {
              <button>"Play"</button>
              <button>"Pause"</button>
              <button>"Reset"</button>
              <button on:click=move |_| toggle_mode(id)>{s.mode.toggled().as_str()}</button>
            });
            let repair = s.needs_repair().then(|| view! { <button>"Repair"</button> });
            view! {
              <div class="card">
                <div class="row">
                  <div>
                    <b>{s.name.clone()}</b>
                    <div class="meta">{format!("Signal ID: {}", s.id)}</div>
                  </div>
                  <span class=signal_status_class(s.status)>{s.status.as_str()}</span>
                  <span class="badge">{s.mode.as_str()}</span>
                </div>
                <div class="row">
                  <span class=phase_dot(s.phase)></span>
                  <span>{s.phase.as_str()}</span>
                  <span class="meta">{format!("Timer: {}", s.timing)}</span>
                  {controls}
                  {repair}
                </div>
              </div>
            }
          }
        />
      </section>

      <div class="grid">
        <section class="panel">
          <h3>"System Status"</h3>
          <table>
            <tr><td>"Total Signals"</td><td>{system_status.total}</td></tr>
            <tr><td>"Active"</td><td class="text-green">{system_status.active}</td></tr>
            <tr><td>"Maintenance"</td><td class="text-yellow">{system_status.maintenance}</td></tr>
            <tr><td>"Offline"</td><td class="text-red">{system_status.offline}</td></tr>
          </table>
        </section>
        <section class="panel">
          <h3>"Quick Actions"</h3>
          {quick_actions
              .into_iter()
              .map(|label| view! { <div><button>{label}</button></div> })
              .collect_view()}
        </section>
      </div>
    }
}
