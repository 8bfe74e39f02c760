use crate::shared::icons::icon;
use leptos::prelude::*;

/// The visible panel. One page, client-side tab state only — there is
/// no routing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ActivePanel {
    Overview,
    Insights,
    Materials,
    Orders,
    Capacity,
    Planning,
    Pegging,
}

impl ActivePanel {
    pub const ALL: [ActivePanel; 7] = [
        ActivePanel::Overview,
        ActivePanel::Insights,
        ActivePanel::Materials,
        ActivePanel::Orders,
        ActivePanel::Capacity,
        ActivePanel::Planning,
        ActivePanel::Pegging,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActivePanel::Overview => "Visão Geral",
            ActivePanel::Insights => "Alertas IA",
            ActivePanel::Materials => "Materiais",
            ActivePanel::Orders => "Ordens",
            ActivePanel::Capacity => "Capacidade IA",
            ActivePanel::Planning => "Planning Board",
            ActivePanel::Pegging => "Pegging",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            ActivePanel::Overview => "overview",
            ActivePanel::Insights => "alert",
            ActivePanel::Materials => "material",
            ActivePanel::Orders => "orders",
            ActivePanel::Capacity => "capacity",
            ActivePanel::Planning => "planning",
            ActivePanel::Pegging => "pegging",
        }
    }
}

#[component]
pub fn TabBar(active: RwSignal<ActivePanel>) -> impl IntoView {
    view! {
        <nav class="tab-bar">
            {ActivePanel::ALL
                .into_iter()
                .map(|panel| {
                    view! {
                        <button
                            class=move || {
                                if active.get() == panel {
                                    "tab-bar__tab tab-bar__tab--active"
                                } else {
                                    "tab-bar__tab"
                                }
                            }
                            on:click=move |_| active.set(panel)
                        >
                            {icon(panel.icon_name())}
                            <span class="tab-bar__label">{panel.label()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
