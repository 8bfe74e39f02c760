use leptos::prelude::*;

use crate::dashboards::{CapacityPanel, InsightsPanel, MaterialsPanel, OrdersPanel, OverviewPanel};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::header::AppHeader;
use crate::layout::tabs::{ActivePanel, TabBar};
use crate::pegging::PeggingPanel;
use crate::planning::PlanningBoardPanel;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    let active = ctx.active_panel;

    // Panels stay mounted; visibility is toggled so in-flight state
    // survives tab switches.
    let visible = move |panel: ActivePanel| Signal::derive(move || active.get() == panel);

    view! {
        <div class="app">
            <AppHeader />
            <TabBar active=active />
            <main class="panel-host">
                <OverviewPanel visible=visible(ActivePanel::Overview) />
                <InsightsPanel visible=visible(ActivePanel::Insights) />
                <MaterialsPanel visible=visible(ActivePanel::Materials) />
                <OrdersPanel visible=visible(ActivePanel::Orders) />
                <CapacityPanel visible=visible(ActivePanel::Capacity) />
                <PlanningBoardPanel visible=visible(ActivePanel::Planning) />
                <PeggingPanel visible=visible(ActivePanel::Pegging) />
            </main>
        </div>
    }
}
