use contracts::dashboards::summary::DashboardSummary;
use leptos::prelude::*;
use thaw::*;

use crate::dashboards::overview::api::fetch_summary;
use crate::shared::components::{
    EmptyNotice, ErrorBanner, LoadingIndicator, PageHeader, StatCard,
};
use crate::shared::controller::PanelController;
use crate::shared::format::{format_date, format_pct, format_score};
use crate::shared::icons::icon;
use crate::shared::panel::{PanelPolicy, ViewState};

/// Order backlog tab: the `ordens_criticas` slice of the summary
/// resource, with its own independent fetch.
#[component]
pub fn OrdersPanel(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let controller = PanelController::<DashboardSummary>::new(PanelPolicy {
        is_empty: Some(|summary: &DashboardSummary| summary.ordens_criticas.is_empty()),
        fallback: None,
    });

    let load = move || controller.load(fetch_summary);

    Effect::new(move |_| {
        if visible.get() && controller.is_idle() {
            load();
        }
    });

    view! {
        <section
            class="panel panel--orders"
            style:display=move || if visible.get() { "" } else { "none" }
        >
            <PageHeader
                title="Ordens críticas"
                subtitle="Ordens de produção atrasadas, priorizadas por criticidade IA".to_string()
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
                    <EmptyNotice message="Nenhuma ordem atrasada na carteira." />
                }.into_any(),
                ViewState::Success(summary) => orders_view(summary).into_any(),
            }}
        </section>
    }
}

fn orders_view(summary: DashboardSummary) -> impl IntoView {
    let kpis = summary.kpis;
    let atraso_tone = if kpis.ops_atrasadas > 0 { "error" } else { "success" };

    let rows = summary
        .ordens_criticas
        .into_iter()
        .map(|ordem| {
            view! {
                <TableRow>
                    <TableCell>{ordem.ordem}</TableCell>
                    <TableCell>{ordem.material.unwrap_or_else(|| "—".to_string())}</TableCell>
                    <TableCell>{format_date(&ordem.data_fim)}</TableCell>
                    <TableCell>{ordem.status}</TableCell>
                    <TableCell>{format_score(ordem.criticidade_score)}</TableCell>
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <div class="stats-grid">
            <StatCard
                label="Ordens na carteira".to_string()
                icon_name="orders".to_string()
                value=kpis.total_ops.to_string()
            />
            <StatCard
                label="Ordens atrasadas".to_string()
                icon_name="alert".to_string()
                value=kpis.ops_atrasadas.to_string()
                hint=format_pct(kpis.perc_ops_atrasadas)
                tone=atraso_tone.to_string()
            />
        </div>

        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Ordem"</TableHeaderCell>
                    <TableHeaderCell>"Material"</TableHeaderCell>
                    <TableHeaderCell>"Data fim"</TableHeaderCell>
                    <TableHeaderCell>"Status"</TableHeaderCell>
                    <TableHeaderCell>"Criticidade IA"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>{rows}</TableBody>
        </Table>
    }
}
