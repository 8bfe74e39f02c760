use contracts::planning::board::PlanningBoardResponse;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::planning::{api, chart::PlanningChart};
use crate::shared::components::{
    ErrorBanner, LoadingIndicator, PageHeader, SeverityBadge, StatCard,
};
use crate::shared::controller::PanelController;
use crate::shared::format::{format_date, format_days, format_score};
use crate::shared::icons::icon;
use crate::shared::panel::{PanelPolicy, ViewState};

/// Material the board opens with before the user searches anything.
const DEFAULT_MATERIAL: &str = "4011835-AA";

/// Planning Board: weekly demand/stock projection for one material.
/// Identifier-driven; no demo fallback — a backend failure surfaces
/// as an error banner.
#[component]
pub fn PlanningBoardPanel(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let (material_input, set_material_input) = signal(DEFAULT_MATERIAL.to_string());
    let (horizonte, set_horizonte) = signal(8u32);

    let controller = PanelController::<PlanningBoardResponse>::new(PanelPolicy::default());

    let submit = move || {
        let weeks = horizonte.get_untracked();
        controller.load_material(&material_input.get_untracked(), move |material| {
            api::fetch_board(material, weeks)
        });
    };

    // first activation projects the default material
    Effect::new(move |_| {
        if visible.get() && controller.is_idle() {
            submit();
        }
    });

    view! {
        <section
            class="panel panel--planning"
            style:display=move || if visible.get() { "" } else { "none" }
        >
            <PageHeader
                title="Planning Board"
                subtitle="Projeção semanal de demanda, estoque e produção".to_string()
            >
                <div class="material-form">
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Código do material"
                        prop:value=material_input
                        on:input=move |ev| set_material_input.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                submit();
                            }
                        }
                    />
                    <select
                        class="form__select"
                        on:change=move |ev| {
                            if let Ok(weeks) = event_target_value(&ev).parse::<u32>() {
                                set_horizonte.set(weeks);
                                submit();
                            }
                        }
                    >
                        <option value="4" selected=move || horizonte.get() == 4>"4 semanas"</option>
                        <option value="8" selected=move || horizonte.get() == 8>"8 semanas"</option>
                        <option value="12" selected=move || horizonte.get() == 12>"12 semanas"</option>
                    </select>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| submit()>
                        {icon("search")}
                        " Consultar"
                    </Button>
                </div>
            </PageHeader>

            {move || match controller.state() {
                ViewState::Idle | ViewState::Loading => view! { <LoadingIndicator /> }.into_any(),
                ViewState::Error(message) => view! { <ErrorBanner message=message /> }.into_any(),
                ViewState::Success(board) | ViewState::Empty(board) => {
                    board_view(board).into_any()
                }
            }}
        </section>
    }
}

fn board_view(board: PlanningBoardResponse) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>();
    let material = board.material.clone();
    let ruptura_tone = if board.rupturas_previstas > 0 { "error" } else { "success" };

    let recomendacoes = board
        .recomendacoes
        .into_iter()
        .map(|rec| {
            view! {
                <article class="insight-card">
                    <div class="insight-card__head">
                        <SeverityBadge severity=rec.severidade />
                        <span class="insight-card__tipo">{rec.categoria}</span>
                    </div>
                    <h3 class="insight-card__titulo">{rec.titulo}</h3>
                    <p class="insight-card__descricao">{rec.descricao}</p>
                    {rec.justificativa.map(|j| view! {
                        <p class="insight-card__sugestao">{j}</p>
                    })}
                </article>
            }
        })
        .collect_view();

    let pegging_rows = board
        .pegging_ordens
        .into_iter()
        .map(|ordem| {
            let atraso = ordem
                .dias_atraso
                .map(|d| format!("{} dias", d))
                .unwrap_or_else(|| "—".to_string());
            view! {
                <TableRow>
                    <TableCell>{ordem.ordem}</TableCell>
                    <TableCell>{format_date(&ordem.data_fim)}</TableCell>
                    <TableCell>{ordem.status}</TableCell>
                    <TableCell>{atraso}</TableCell>
                    <TableCell>{format_score(ordem.criticidade_score)}</TableCell>
                </TableRow>
            }
        })
        .collect_view();

    let open_pegging = {
        let material = material.clone();
        move |_| {
            if let Some(ctx) = ctx {
                ctx.open_pegging(material.clone());
            }
        }
    };

    view! {
        <div class="stats-grid">
            <StatCard
                label="Material".to_string()
                icon_name="material".to_string()
                value=material
            />
            <StatCard
                label="Cobertura atual".to_string()
                icon_name="planning".to_string()
                value=format_days(board.cobertura_atual_dias)
            />
            <StatCard
                label="Criticidade IA".to_string()
                icon_name="alert".to_string()
                value=format_score(board.criticidade_ia)
            />
            <StatCard
                label="Rupturas previstas".to_string()
                icon_name="alert".to_string()
                value=board.rupturas_previstas.to_string()
                hint=format!("horizonte de {} semanas", board.horizonte_semanas)
                tone=ruptura_tone.to_string()
            />
        </div>

        <PlanningChart series=board.series />

        <div class="overview-grid">
            <div class="overview-card">
                <h3 class="overview-card__title">"Recomendações IA"</h3>
                <div class="insight-list">{recomendacoes}</div>
            </div>

            <div class="overview-card">
                <div class="overview-card__head">
                    <h3 class="overview-card__title">"Ordens vinculadas (pegging lite)"</h3>
                    <Button appearance=ButtonAppearance::Secondary on_click=open_pegging>
                        {icon("pegging")}
                        " Ver no Pegging"
                    </Button>
                </div>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Ordem"</TableHeaderCell>
                            <TableHeaderCell>"Data fim"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Atraso"</TableHeaderCell>
                            <TableHeaderCell>"Criticidade IA"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>{pegging_rows}</TableBody>
                </Table>
            </div>
        </div>
    }
}
