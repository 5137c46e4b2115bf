use leptos::*;
use traffic_data::model::StatTile;

#[component]
pub fn StatGrid(tiles: Vec<StatTile>) -> impl IntoView {
    view! {
      <div class="grid">
        {tiles
            .into_iter()
            .map(|tile| view! {
              <div class="panel">
                <div class="meta">{tile.label}</div>
                <h2>{tile.value}</h2>
              </div>
            })
            .collect_view()}
      </div>
    }
}
