use contracts::dashboards::summary::DashboardSummary;
use leptos::prelude::*;
use thaw::*;

use crate::dashboards::overview::api::fetch_summary;
use crate::shared::components::{
    EmptyNotice, ErrorBanner, LoadingIndicator, PageHeader, StatCard,
};
use crate::shared::controller::PanelController;
use crate::shared::format::{format_days, format_pct, format_score};
use crate::shared::icons::icon;
use crate::shared::panel::{PanelPolicy, ViewState};

/// Material criticality tab: the `criticos` slice of the summary
/// resource, with its own independent fetch.
#[component]
pub fn MaterialsPanel(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let controller = PanelController::<DashboardSummary>::new(PanelPolicy {
        is_empty: Some(|summary: &DashboardSummary| summary.criticos.is_empty()),
        fallback: None,
    });

    let load = move || controller.load(fetch_summary);

    // lazy panel: first fetch when the tab first becomes visible
    Effect::new(move |_| {
        if visible.get() && controller.is_idle() {
            load();
        }
    });

    view! {
        <section
            class="panel panel--materials"
            style:display=move || if visible.get() { "" } else { "none" }
        >
            <PageHeader
                title="Materiais críticos"
                subtitle="Cobertura de estoque e criticidade IA por material".to_string()
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
                    <EmptyNotice message="Nenhum material crítico identificado." />
                }.into_any(),
                ViewState::Success(summary) => materials_view(summary).into_any(),
            }}
        </section>
    }
}

fn materials_view(summary: DashboardSummary) -> impl IntoView {
    let kpis = summary.kpis;

    let rows = summary
        .criticos
        .into_iter()
        .map(|item| {
            let risk_class = match item.cobertura_dias {
                Some(days) if days < 7.0 => "coverage coverage--risk",
                Some(days) if days > 45.0 => "coverage coverage--excess",
                _ => "coverage",
            };
            view! {
                <TableRow>
                    <TableCell>{item.material}</TableCell>
                    <TableCell>
                        <span class=risk_class>{format_days(item.cobertura_dias)}</span>
                    </TableCell>
                    <TableCell>{format_score(item.criticidade_score)}</TableCell>
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <div class="stats-grid">
            <StatCard
                label="Monitorados".to_string()
                icon_name="material".to_string()
                value=kpis.total_materiais.to_string()
            />
            <StatCard
                label="Em risco (< 7 dias)".to_string()
                icon_name="alert".to_string()
                value=kpis.materiais_risco.to_string()
                hint=format_pct(kpis.perc_materiais_risco)
                tone="error".to_string()
            />
            <StatCard
                label="Em excesso (> 45 dias)".to_string()
                icon_name="material".to_string()
                value=kpis.materiais_excesso.to_string()
                hint=format_pct(kpis.perc_materiais_excesso)
                tone="warning".to_string()
            />
        </div>

        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Material"</TableHeaderCell>
                    <TableHeaderCell>"Cobertura de estoque"</TableHeaderCell>
                    <TableHeaderCell>"Criticidade IA"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>{rows}</TableBody>
        </Table>
    }
}
