use serde::{Deserialize, Serialize};

/// Response of `GET /dashboard/summary` — the overview KPIs.
///
/// Everything here is computed server-side; the client displays the
/// numbers as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// UTC timestamp of the server-side computation (ISO 8601)
    pub generated_at: String,
    pub kpis: KpiSummary,
    /// Top materials by criticality (lowest coverage first)
    pub criticos: Vec<CriticalItem>,
    /// Top overdue production orders
    pub ordens_criticas: Vec<CriticalOrder>,
    /// Capacity block, absent when no work-center data was uploaded
    #[serde(default)]
    pub capacidade: Option<CapacitySummary>,
    #[serde(default)]
    pub recursos_criticos: Vec<CriticalResource>,
}

/// Material and order KPIs of the overview cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub total_materiais: u32,
    /// Materials with coverage below 7 days
    pub materiais_risco: u32,
    pub perc_materiais_risco: f64,
    /// Materials with coverage above 45 days
    pub materiais_excesso: u32,
    pub perc_materiais_excesso: f64,

    pub total_ops: u32,
    pub ops_atrasadas: u32,
    pub perc_ops_atrasadas: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalItem {
    pub material: String,
    pub cobertura_dias: Option<f64>,
    #[serde(default)]
    pub criticidade_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalOrder {
    pub ordem: String,
    pub material: Option<String>,
    /// Planned finish date, "YYYY-MM-DD"
    pub data_fim: String,
    pub status: String,
    #[serde(default)]
    pub criticidade_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacitySummary {
    pub total_recursos: u32,
    pub recursos_abaixo_90: u32,
    pub recursos_90_100: u32,
    pub recursos_acima_100: u32,
    pub utilizacao_media: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalResource {
    pub recurso: String,
    #[serde(default)]
    pub planta: Option<String>,
    pub utilizacao_pct: f64,
    #[serde(default)]
    pub criticidade_score: Option<f64>,
}
