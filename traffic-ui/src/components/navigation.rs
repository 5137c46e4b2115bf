use super::badges::nav_class;
use leptos::*;
use traffic_data::Section;

#[component]
pub fn Navigation(
    title: String,
    subtitle: String,
    active: RwSignal<Section>,
    #[prop(into)] active_alerts: Signal<usize>,
    on_emergency: Callback<()>,
) -> impl IntoView {
    view! {
      <nav class="topbar">
        <div class="brand">
          <h1>{title}</h1>
          <span class="meta">{subtitle}</span>
        </div>

        <div class="row">
          {Section::ALL
              .into_iter()
              .map(|section| view! {
                <button
                  class=move || nav_class(active.get() == section)
                  on:click=move |_| active.set(section)
                >
                  {section.label()}
                </button>
              })
              .collect_view()}
        </div>

        <div class="row">
          <button class="emergency" on:click=move |_| on_emergency.call(())>
            "Emergency Alerts"
            <Show when=move || { active_alerts.get() > 0 } fallback=|| ()>
              " "
              <span class="badge destructive">{move || active_alerts.get()}</span>
            </Show>
          </button>
          <button>"Settings"</button>
        </div>
      </nav>
    }
}
