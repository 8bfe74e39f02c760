use contracts::dashboards::summary::DashboardSummary;
use contracts::shared::time::parse_generated_at;
use leptos::prelude::*;
use thaw::*;

use crate::dashboards::overview::api;
use crate::shared::components::{ErrorBanner, LoadingIndicator, PageHeader, StatCard};
use crate::shared::controller::PanelController;
use crate::shared::format::{format_date, format_days, format_pct, format_score};
use crate::shared::icons::icon;
use crate::shared::panel::{PanelPolicy, ViewState};

#[component]
pub fn OverviewPanel(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let controller = PanelController::<DashboardSummary>::new(PanelPolicy::default());

    let load = move || controller.load(api::fetch_summary);

    // auto-loading panel: fetches on mount, not on first activation
    Effect::new(move |_| {
        if controller.is_idle() {
            load();
        }
    });

    view! {
        <section
            class="panel panel--overview"
            style:display=move || if visible.get() { "" } else { "none" }
        >
            <PageHeader
                title="Visão Geral"
                subtitle="KPIs de materiais, ordens e capacidade".to_string()
            >
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                    {icon("refresh")}
                    " Atualizar"
                </Button>
            </PageHeader>

            {move || match controller.state() {
                ViewState::Idle | ViewState::Loading => view! { <LoadingIndicator /> }.into_any(),
                ViewState::Error(message) => view! { <ErrorBanner message=message /> }.into_any(),
                ViewState::Success(summary) | ViewState::Empty(summary) => {
                    summary_view(summary).into_any()
                }
            }}
        </section>
    }
}

fn summary_view(summary: DashboardSummary) -> impl IntoView {
    let DashboardSummary {
        generated_at,
        kpis,
        criticos,
        ordens_criticas,
        capacidade,
        recursos_criticos,
    } = summary;

    let generated = parse_generated_at(&generated_at)
        .map(|dt| dt.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or(generated_at);

    let risco_tone = if kpis.materiais_risco > 0 { "error" } else { "success" };
    let atraso_tone = if kpis.ops_atrasadas > 0 { "warning" } else { "success" };

    let capacity_cards = capacidade.map(|cap| {
        let media = cap
            .utilizacao_media
            .map(|pct| format_pct(pct))
            .unwrap_or_else(|| "—".to_string());
        let overload_tone = if cap.recursos_acima_100 > 0 { "error" } else { "success" };
        view! {
            <StatCard
                label="Utilização média".to_string()
                icon_name="capacity".to_string()
                value=media
                hint=format!(
                    "{} recursos · {} acima de 100%",
                    cap.total_recursos, cap.recursos_acima_100
                )
                tone=overload_tone.to_string()
            />
        }
    });

    let criticos_rows = criticos
        .into_iter()
        .map(|item| {
            view! {
                <TableRow>
                    <TableCell>{item.material}</TableCell>
                    <TableCell>{format_days(item.cobertura_dias)}</TableCell>
                    <TableCell>{format_score(item.criticidade_score)}</TableCell>
                </TableRow>
            }
        })
        .collect_view();

    let ordens_rows = ordens_criticas
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

    let gargalos = recursos_criticos
        .into_iter()
        .take(3)
        .map(|r| {
            view! {
                <li class="overview-resource">
                    <span class="overview-resource__name">{r.recurso}</span>
                    <span class="overview-resource__pct">{format_pct(r.utilizacao_pct)}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="stats-grid">
            <StatCard
                label="Materiais em risco".to_string()
                icon_name="material".to_string()
                value=kpis.materiais_risco.to_string()
                hint=format!(
                    "{} de {} monitorados ({})",
                    kpis.materiais_risco,
                    kpis.total_materiais,
                    format_pct(kpis.perc_materiais_risco)
                )
                tone=risco_tone.to_string()
            />
            <StatCard
                label="Materiais em excesso".to_string()
                icon_name="material".to_string()
                value=kpis.materiais_excesso.to_string()
                hint=format!("cobertura acima de 45 dias ({})", format_pct(kpis.perc_materiais_excesso))
                tone="warning".to_string()
            />
            <StatCard
                label="Ordens atrasadas".to_string()
                icon_name="orders".to_string()
                value=kpis.ops_atrasadas.to_string()
                hint=format!(
                    "{} de {} ordens ({})",
                    kpis.ops_atrasadas,
                    kpis.total_ops,
                    format_pct(kpis.perc_ops_atrasadas)
                )
                tone=atraso_tone.to_string()
            />
            {capacity_cards}
        </div>

        <div class="overview-grid">
            <div class="overview-card">
                <h3 class="overview-card__title">"Materiais críticos"</h3>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Material"</TableHeaderCell>
                            <TableHeaderCell>"Cobertura"</TableHeaderCell>
                            <TableHeaderCell>"Criticidade IA"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>{criticos_rows}</TableBody>
                </Table>
            </div>

            <div class="overview-card">
                <h3 class="overview-card__title">"Ordens críticas"</h3>
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
                    <TableBody>{ordens_rows}</TableBody>
                </Table>
            </div>

            <div class="overview-card">
                <h3 class="overview-card__title">"Recursos mais carregados"</h3>
                <ul class="overview-resources">{gargalos}</ul>
            </div>
        </div>

        <div class="generated-at">{format!("Gerado em {}", generated)}</div>
    }
}
