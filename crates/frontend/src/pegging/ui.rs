use contracts::pegging::ia_lite::PeggingIaLiteResponse;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::pegging::{api, demo};
use crate::shared::components::{
    EmptyNotice, ErrorBanner, LoadingIndicator, PageHeader, StatCard,
};
use crate::shared::controller::PanelController;
use crate::shared::format::{format_date, format_days, format_number, format_score};
use crate::shared::icons::icon;
use crate::shared::panel::{PanelPolicy, ViewState};

/// Pegging IA Lite: orders linked to one material.
///
/// Identifier-driven with two sources — the panel's own input, or a
/// material handed off by the planning board. This is the only panel
/// with a demo fallback: a failed fetch substitutes the demo dataset
/// instead of surfacing an error.
#[component]
pub fn PeggingPanel(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>();
    let (material_input, set_material_input) = signal(String::new());

    let controller = PanelController::<PeggingIaLiteResponse>::new(PanelPolicy {
        is_empty: Some(|resp: &PeggingIaLiteResponse| resp.has_no_orders()),
        fallback: Some(demo::demo_pegging),
    });

    let submit = move || {
        controller.load_material(&material_input.get_untracked(), api::fetch_pegging);
    };

    // externally supplied identifier: consume the hand-off when the
    // tab is visible, then fetch as if the user had submitted it
    Effect::new(move |_| {
        let Some(ctx) = ctx else { return };
        let requested = ctx.pegging_material.get();
        if !visible.get() {
            return;
        }
        if let Some(material) = requested {
            ctx.pegging_material.set(None);
            set_material_input.set(material.clone());
            controller.load_material(&material, api::fetch_pegging);
        }
    });

    view! {
        <section
            class="panel panel--pegging"
            style:display=move || if visible.get() { "" } else { "none" }
        >
            <PageHeader
                title="Pegging IA Lite"
                subtitle="Ordens de produção vinculadas a um material".to_string()
            >
                <div class="material-form">
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Código do material (ex.: 4011835-AA)"
                        prop:value=material_input
                        on:input=move |ev| set_material_input.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                submit();
                            }
                        }
                    />
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| submit()>
                        {icon("search")}
                        " Consultar"
                    </Button>
                </div>
            </PageHeader>

            {move || match controller.state() {
                ViewState::Idle => view! {
                    <EmptyNotice message="Informe um código de material para consultar o pegging." />
                }.into_any(),
                ViewState::Loading => view! { <LoadingIndicator /> }.into_any(),
                ViewState::Error(message) => view! { <ErrorBanner message=message /> }.into_any(),
                ViewState::Empty(resp) => view! {
                    <EmptyNotice message=format!(
                        "Nenhuma ordem vinculada ao material {}.", resp.material
                    ) />
                }.into_any(),
                ViewState::Success(resp) => pegging_view(resp).into_any(),
            }}
        </section>
    }
}

fn pegging_view(resp: PeggingIaLiteResponse) -> impl IntoView {
    let atraso_tone = if resp.ordens_atrasadas > 0 { "error" } else { "success" };
    let descricao = resp.descricao.unwrap_or_else(|| "—".to_string());

    let rows = resp
        .ordens
        .into_iter()
        .map(|ordem| {
            let quantidade = ordem
                .quantidade
                .map(|q| format_number(q, 0))
                .unwrap_or_else(|| "—".to_string());
            let atraso = ordem
                .dias_atraso
                .map(|d| format!("{} dias", d))
                .unwrap_or_else(|| "—".to_string());
            view! {
                <TableRow>
                    <TableCell>{ordem.ordem}</TableCell>
                    <TableCell>{ordem.material}</TableCell>
                    <TableCell>{format_date(&ordem.data_fim)}</TableCell>
                    <TableCell>{ordem.status}</TableCell>
                    <TableCell>{quantidade}</TableCell>
                    <TableCell>{atraso}</TableCell>
                    <TableCell>{format_score(ordem.criticidade_score)}</TableCell>
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <div class="stats-grid">
            <StatCard
                label="Material".to_string()
                icon_name="material".to_string()
                value=resp.material
                hint=descricao
            />
            <StatCard
                label="Cobertura atual".to_string()
                icon_name="planning".to_string()
                value=format_days(resp.cobertura_atual_dias)
            />
            <StatCard
                label="Ordens vinculadas".to_string()
                icon_name="pegging".to_string()
                value=resp.total_ordens_vinculadas.to_string()
            />
            <StatCard
                label="Ordens atrasadas".to_string()
                icon_name="alert".to_string()
                value=resp.ordens_atrasadas.to_string()
                hint=format!("maior atraso: {} dias", resp.maior_atraso_dias)
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
                    <TableHeaderCell>"Quantidade"</TableHeaderCell>
                    <TableHeaderCell>"Atraso"</TableHeaderCell>
                    <TableHeaderCell>"Criticidade IA"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>{rows}</TableBody>
        </Table>
    }
}
