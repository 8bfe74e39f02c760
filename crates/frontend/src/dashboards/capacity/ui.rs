use contracts::dashboards::capacity_ia::CapacityIaResponse;
use leptos::prelude::*;
use thaw::*;

use crate::dashboards::capacity::api;
use crate::shared::components::{
    EmptyNotice, ErrorBanner, LoadingIndicator, PageHeader, StatCard,
};
use crate::shared::controller::PanelController;
use crate::shared::format::{format_pct, format_score};
use crate::shared::icons::icon;
use crate::shared::panel::{PanelPolicy, ViewState};

/// Capacity IA tab: utilization buckets per work center plus the
/// backend's general recommendations.
/// No work-center data at all, or data without a single classified
/// resource: nothing to tabulate.
fn capacity_is_empty(resp: &CapacityIaResponse) -> bool {
    resp.total_recursos == 0 || resp.insights.is_empty()
}

#[component]
pub fn CapacityPanel(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let controller = PanelController::<CapacityIaResponse>::new(PanelPolicy {
        is_empty: Some(capacity_is_empty),
        fallback: None,
    });

    let load = move || controller.load(api::fetch_capacity_ia);

    Effect::new(move |_| {
        if visible.get() && controller.is_idle() {
            load();
        }
    });

    view! {
        <section
            class="panel panel--capacity"
            style:display=move || if visible.get() { "" } else { "none" }
        >
            <PageHeader
                title="Capacidade IA"
                subtitle="Classificação de utilização por centro de trabalho".to_string()
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
                    <EmptyNotice message="Nenhum recurso com dados de capacidade." />
                }.into_any(),
                ViewState::Success(resp) => capacity_view(resp).into_any(),
            }}
        </section>
    }
}

/// Badge class for the backend's capacity category
/// ("gargalo" | "alto" | "equilibrado" | "ociosidade").
fn categoria_class(categoria: &str) -> &'static str {
    match categoria {
        "gargalo" => "categoria-badge categoria-badge--gargalo",
        "alto" => "categoria-badge categoria-badge--alto",
        "ociosidade" => "categoria-badge categoria-badge--ociosidade",
        _ => "categoria-badge categoria-badge--equilibrado",
    }
}

fn capacity_view(resp: CapacityIaResponse) -> impl IntoView {
    let media = resp
        .utilizacao_media
        .map(format_pct)
        .unwrap_or_else(|| "—".to_string());
    let overload_tone = if resp.recursos_acima_100 > 0 { "error" } else { "success" };

    let rows = resp
        .insights
        .into_iter()
        .map(|insight| {
            let badge_class = categoria_class(&insight.categoria);
            view! {
                <TableRow>
                    <TableCell>{insight.recurso}</TableCell>
                    <TableCell>{insight.planta.unwrap_or_else(|| "—".to_string())}</TableCell>
                    <TableCell>{format_pct(insight.utilizacao_pct)}</TableCell>
                    <TableCell>{format_score(insight.criticidade_score)}</TableCell>
                    <TableCell>
                        <span class=badge_class>{insight.categoria.to_uppercase()}</span>
                    </TableCell>
                    <TableCell>{insight.recomendacao_curta}</TableCell>
                </TableRow>
            }
        })
        .collect_view();

    let recomendacoes = resp
        .recomendacoes_gerais
        .into_iter()
        .map(|texto| view! { <li class="recommendation-item">{texto}</li> })
        .collect_view();

    view! {
        <div class="stats-grid">
            <StatCard
                label="Recursos monitorados".to_string()
                icon_name="capacity".to_string()
                value=resp.total_recursos.to_string()
            />
            <StatCard
                label="Utilização média".to_string()
                icon_name="capacity".to_string()
                value=media
            />
            <StatCard
                label="Acima de 100%".to_string()
                icon_name="alert".to_string()
                value=resp.recursos_acima_100.to_string()
                hint=format!(
                    "90-100%: {} · abaixo de 90%: {}",
                    resp.recursos_90_100, resp.recursos_abaixo_90
                )
                tone=overload_tone.to_string()
            />
        </div>

        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Recurso"</TableHeaderCell>
                    <TableHeaderCell>"Planta"</TableHeaderCell>
                    <TableHeaderCell>"Utilização"</TableHeaderCell>
                    <TableHeaderCell>"Criticidade IA"</TableHeaderCell>
                    <TableHeaderCell>"Categoria"</TableHeaderCell>
                    <TableHeaderCell>"Recomendação"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>{rows}</TableBody>
        </Table>

        <div class="overview-card">
            <h3 class="overview-card__title">"Recomendações gerais"</h3>
            <ul class="recommendation-list">{recomendacoes}</ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::panel::{PanelMachine, PanelPolicy, ViewState};
    use contracts::dashboards::capacity_ia::ResourceIaInsight;

    fn response(total_recursos: u32, insights: Vec<ResourceIaInsight>) -> CapacityIaResponse {
        CapacityIaResponse {
            generated_at: "2026-08-07T11:32:40Z".to_string(),
            total_recursos,
            utilizacao_media: Some(97.2),
            recursos_abaixo_90: 0,
            recursos_90_100: 0,
            recursos_acima_100: 0,
            insights,
            recomendacoes_gerais: vec![],
        }
    }

    fn insight() -> ResourceIaInsight {
        ResourceIaInsight {
            recurso: "3101-LINHA AIRBAG-01".to_string(),
            planta: Some("3101".to_string()),
            utilizacao_pct: 118.0,
            criticidade_score: Some(95.0),
            categoria: "gargalo".to_string(),
            recomendacao_curta: "Avaliar turno extra.".to_string(),
        }
    }

    #[test]
    fn zero_resources_classify_as_empty_not_error() {
        let mut machine = PanelMachine::new(PanelPolicy {
            is_empty: Some(capacity_is_empty),
            fallback: None,
        });

        let ticket = machine.begin();
        machine.resolve(ticket, Ok(response(0, vec![])));
        assert!(matches!(machine.state(), ViewState::Empty(_)));
        assert!(machine.state().error().is_none());
    }

    #[test]
    fn classified_resources_are_a_success() {
        let mut machine = PanelMachine::new(PanelPolicy {
            is_empty: Some(capacity_is_empty),
            fallback: None,
        });

        let ticket = machine.begin();
        machine.resolve(ticket, Ok(response(6, vec![insight()])));
        assert!(matches!(machine.state(), ViewState::Success(_)));
    }

    #[test]
    fn categoria_badges_map_known_categories() {
        assert_eq!(categoria_class("gargalo"), "categoria-badge categoria-badge--gargalo");
        assert_eq!(
            categoria_class("equilibrado"),
            "categoria-badge categoria-badge--equilibrado"
        );
        // unknown categories render as the neutral badge
        assert_eq!(
            categoria_class("misterioso"),
            "categoria-badge categoria-badge--equilibrado"
        );
    }
}

