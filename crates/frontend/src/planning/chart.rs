//! Weekly projection chart (ECharts via charming).

use charming::{
    component::{Axis, Grid, Legend},
    element::{AxisType, LineStyle, Tooltip, Trigger},
    series::{Bar, Line},
    Chart, WasmRenderer,
};
use contracts::planning::board::PlanningSeries;
use leptos::prelude::*;

const CHART_ID: &str = "planning-board-chart";

/// Demand, projected stock (with and without the suggested order) and
/// production per week. The component is rebuilt on every new payload,
/// so the chart renders once per mount.
#[component]
pub fn PlanningChart(series: PlanningSeries) -> impl IntoView {
    Effect::new(move |_| {
        let chart = build_chart(&series);
        let renderer = WasmRenderer::new(920, 360);
        if let Err(e) = renderer.render(CHART_ID, &chart) {
            log::error!("Failed to render planning chart: {:?}", e);
        }
    });

    view! {
        <div class="chart-container">
            <div id=CHART_ID style="width: 920px; height: 360px;"></div>
        </div>
    }
}

fn build_chart(series: &PlanningSeries) -> Chart {
    let mut chart = Chart::new()
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .legend(
            Legend::new()
                .data(vec![
                    "Demanda",
                    "Estoque projetado",
                    "Estoque pós-IA",
                    "Produção programada",
                    "OP sugerida IA",
                ])
                .bottom(0),
        )
        .grid(Grid::new().left("8%").right("4%").top("8%").bottom("18%"))
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(series.labels.clone()),
        )
        .y_axis(Axis::new().type_(AxisType::Value))
        .series(
            Line::new()
                .name("Demanda")
                .data(series.demanda.clone())
                .line_style(LineStyle::new().width(2)),
        )
        .series(
            Line::new()
                .name("Estoque projetado")
                .data(series.estoque_natural.clone())
                .line_style(LineStyle::new().width(2)),
        )
        .series(
            Line::new()
                .name("Estoque pós-IA")
                .data(series.estoque_pos_ia.clone())
                .line_style(LineStyle::new().width(2)),
        );

    if !series.producao_existente.is_empty() {
        chart = chart.series(
            Bar::new()
                .name("Produção programada")
                .data(series.producao_existente.clone()),
        );
    }

    chart.series(
        Bar::new()
            .name("OP sugerida IA")
            .data(series.producao_ia.clone()),
    )
}
