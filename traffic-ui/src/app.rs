use crate::components::{
    AiInsights, AnalyticsAndPrediction, CongestionMap, EmergencyAlerts, JunctionList, Navigation,
    SignalControl,
};
use alert_registry::{AlertRegistry, AlertStatus};
use leptos::*;
use traffic_data::{ConfigError, DashboardConfig, Section};

fn load() -> Result<(DashboardConfig, AlertRegistry), ConfigError> {
    let config = DashboardConfig::embedded()?;
    let registry = config.alert_registry()?;
    Ok((config, registry))
}

#[component]
pub fn App() -> impl IntoView {
    match load() {
        Ok((config, registry)) => view! { <Dashboard config=config registry=registry/> }.into_view(),
        Err(err) => {
            logging::error!("failed to load dashboard data: {err}");
            view! { <pre class="error">{format!("Dashboard data unavailable\n{err}")}</pre> }
                .into_view()
        }
    }
}

#[component]
fn Dashboard(config: DashboardConfig, registry: AlertRegistry) -> impl IntoView {
    let active = create_rw_signal(Section::default());
    let show_alerts = create_rw_signal(false);
    let registry = create_rw_signal(registry);
    let config = store_value(config);

    let active_alerts =
        Signal::derive(move || registry.with(|r| r.count_by_status(AlertStatus::Active)));

    let section_view = move || {
        let section = active.get();
        config.with_value(|c| match section {
            Section::Congestion => view! { <CongestionMap panel=c.congestion.clone()/> }.into_view(),
            Section::Signals => view! { <SignalControl panel=c.signals.clone()/> }.into_view(),
            Section::Junctions => view! { <JunctionList panel=c.junctions.clone()/> }.into_view(),
            Section::Analytics => {
                view! { <AnalyticsAndPrediction panel=c.analytics.clone()/> }.into_view()
            }
            Section::Insights => view! { <AiInsights panel=c.insights.clone()/> }.into_view(),
        })
    };

    view! {
      <Navigation
        title=config.with_value(|c| c.title.clone())
        subtitle=config.with_value(|c| c.subtitle.clone())
        active=active
        active_alerts=active_alerts
        on_emergency=Callback::new(move |_| show_alerts.set(true))
      />

      <main class="content">{section_view}</main>

      <Show when=move || show_alerts.get() fallback=|| ()>
        <aside class="sheet">
          <div class="row">
            <h2>"Emergency Alerts"</h2>
            <button on:click=move |_| show_alerts.set(false)>"Close"</button>
          </div>
          <EmergencyAlerts registry=registry panel=config.with_value(|c| c.alerts.clone())/>
        </aside>
      </Show>
    }
}
