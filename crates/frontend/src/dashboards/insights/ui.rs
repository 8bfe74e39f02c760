use contracts::dashboards::insights::InsightsResponse;
use contracts::shared::severity::Severity;
use leptos::prelude::*;
use thaw::*;

use crate::dashboards::insights::api;
use crate::shared::components::{
    EmptyNotice, ErrorBanner, LoadingIndicator, PageHeader, SeverityBadge,
};
use crate::shared::controller::PanelController;
use crate::shared::icons::icon;
use crate::shared::panel::{PanelPolicy, ViewState};

/// Alert feed generated by the backend from the same KPIs as the
/// overview. Pure display: only ordering happens on the client.
#[component]
pub fn InsightsPanel(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let controller = PanelController::<InsightsResponse>::new(PanelPolicy {
        is_empty: Some(|resp: &InsightsResponse| resp.insights.is_empty()),
        fallback: None,
    });

    let load = move || controller.load(api::fetch_insights);

    Effect::new(move |_| {
        if visible.get() && controller.is_idle() {
            load();
        }
    });

    view! {
        <section
            class="panel panel--insights"
            style:display=move || if visible.get() { "" } else { "none" }
        >
            <PageHeader
                title="Alertas IA"
                subtitle="Leitura de negócio dos indicadores do dia".to_string()
            >
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                    {icon("refresh")}
                    " Atualizar"
                </Button>
            </PageHeader>

            {move || match controller.state() {
                ViewState::Idle | ViewState::Loading => view! { <LoadingIndicator /> }.into_any(),
                ViewState::Error(message) => view! { <ErrorBanner message=message /> }.into_any(),
                ViewState::Empty(_) => view! {
                    <EmptyNotice message="Nenhum alerta crítico identificado." />
                }.into_any(),
                ViewState::Success(resp) => insights_view(resp).into_any(),
            }}
        </section>
    }
}

fn insights_view(resp: InsightsResponse) -> impl IntoView {
    // most urgent first; the backend does not guarantee an order
    let mut insights = resp.insights;
    insights.sort_by_key(|i| std::cmp::Reverse(Severity::parse(&i.severidade)));

    let cards = insights
        .into_iter()
        .map(|insight| {
            view! {
                <article class="insight-card">
                    <div class="insight-card__head">
                        <SeverityBadge severity=insight.severidade />
                        <span class="insight-card__tipo">{insight.tipo}</span>
                    </div>
                    <h3 class="insight-card__titulo">{insight.titulo}</h3>
                    <p class="insight-card__descricao">{insight.descricao}</p>
                    <p class="insight-card__sugestao">
                        <strong>"Sugestão: "</strong>
                        {insight.sugestao}
                    </p>
                </article>
            }
        })
        .collect_view();

    view! { <div class="insight-list">{cards}</div> }
}
