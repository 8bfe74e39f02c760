use serde::{Deserialize, Serialize};

/// Response of `GET /dashboard/capacity/ia` — per-resource capacity
/// classification plus overall recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityIaResponse {
    pub generated_at: String,

    pub total_recursos: u32,
    pub utilizacao_media: Option<f64>,

    /// Utilization buckets: below 90%, 90-100%, above 100%
    pub recursos_abaixo_90: u32,
    pub recursos_90_100: u32,
    pub recursos_acima_100: u32,

    pub insights: Vec<ResourceIaInsight>,
    pub recomendacoes_gerais: Vec<String>,
}

/// Classification of a single work center. `categoria` is one of
/// "gargalo", "alto", "equilibrado", "ociosidade".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceIaInsight {
    pub recurso: String,
    #[serde(default)]
    pub planta: Option<String>,
    pub utilizacao_pct: f64,
    #[serde(default)]
    pub criticidade_score: Option<f64>,
    pub categoria: String,
    pub recomendacao_curta: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_capacity_ia() {
        let json = r#"{
            "generated_at": "2026-08-07T11:32:40Z",
            "total_recursos": 6,
            "utilizacao_media": 97.2,
            "recursos_abaixo_90": 3,
            "recursos_90_100": 2,
            "recursos_acima_100": 1,
            "insights": [
                {
                    "recurso": "3101-LINHA AIRBAG-01",
                    "planta": "3101",
                    "utilizacao_pct": 118.0,
                    "criticidade_score": 95.0,
                    "categoria": "gargalo",
                    "recomendacao_curta": "Avaliar turno extra ou realocar ordens."
                }
            ],
            "recomendacoes_gerais": [
                "1 recurso(s) acima de 100% de utilização."
            ]
        }"#;

        let resp: CapacityIaResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.recursos_acima_100, 1);
        assert_eq!(resp.insights[0].categoria, "gargalo");
        assert_eq!(resp.recomendacoes_gerais.len(), 1);
    }
}
