use serde::{Deserialize, Serialize};

/// Response of `GET /planning/board/{material}` — projected demand,
/// stock and production for one material over N weeks, plus the
/// recommendations and linked orders the server derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningBoardResponse {
    pub material: String,
    pub cobertura_atual_dias: Option<f64>,
    pub criticidade_ia: Option<f64>,
    /// Weeks in which the projected stock goes negative
    pub rupturas_previstas: u32,
    pub horizonte_semanas: u32,
    pub series: PlanningSeries,
    pub recomendacoes: Vec<IaRecommendation>,
    pub pegging_ordens: Vec<PeggingOrder>,
}

/// Weekly series, all vectors share the length of `labels`
/// ("S+1" .. "S+N").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningSeries {
    pub labels: Vec<String>,
    pub demanda: Vec<f64>,
    /// Projected stock without the suggested production order
    pub estoque_natural: Vec<f64>,
    /// Projected stock after applying the suggested order
    pub estoque_pos_ia: Vec<f64>,
    /// Production already scheduled (existing orders per week)
    #[serde(default)]
    pub producao_existente: Vec<f64>,
    /// Suggested production order quantity, at most one nonzero week
    pub producao_ia: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IaRecommendation {
    pub titulo: String,
    pub categoria: String,
    /// "alto" | "medio" | "baixo" | "info"
    pub severidade: String,
    pub descricao: String,
    #[serde(default)]
    pub justificativa: Option<String>,
}

/// One production order linked to the material (pegging lite)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeggingOrder {
    pub ordem: String,
    pub data_fim: String,
    pub status: String,
    #[serde(default)]
    pub dias_atraso: Option<i32>,
    #[serde(default)]
    pub criticidade_score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_planning_board() {
        let json = r#"{
            "material": "4011835-AA",
            "cobertura_atual_dias": 4.5,
            "criticidade_ia": 87.0,
            "rupturas_previstas": 2,
            "horizonte_semanas": 4,
            "series": {
                "labels": ["S+1", "S+2", "S+3", "S+4"],
                "demanda": [240.0, 215.0, 240.0, 265.0],
                "estoque_natural": [-85.7, -300.7, -540.7, -805.7],
                "estoque_pos_ia": [240.0, 25.0, -215.0, -480.0],
                "producao_existente": [0.0, 0.0, 0.0, 0.0],
                "producao_ia": [325.7, 0.0, 0.0, 0.0]
            },
            "recomendacoes": [
                {
                    "titulo": "Criar OP IA de 325 un. para S+1",
                    "categoria": "produção",
                    "severidade": "alto",
                    "descricao": "Evitar ruptura de estoque prevista a partir da semana S+1.",
                    "justificativa": "O estoque projetado sem ação fica negativo em 2 semana(s)."
                }
            ],
            "pegging_ordens": [
                {"ordem": "000010012345", "data_fim": "2026-07-28",
                 "status": "REL  MACM", "dias_atraso": 10, "criticidade_score": 88.5}
            ]
        }"#;

        let board: PlanningBoardResponse = serde_json::from_str(json).unwrap();
        assert_eq!(board.horizonte_semanas, 4);
        assert_eq!(board.series.labels.len(), board.series.demanda.len());
        assert_eq!(board.pegging_ordens[0].dias_atraso, Some(10));
    }

    #[test]
    fn missing_producao_existente_defaults_to_empty() {
        // Older backend builds omit the field entirely
        let json = r#"{
            "material": "X-1",
            "cobertura_atual_dias": null,
            "criticidade_ia": null,
            "rupturas_previstas": 0,
            "horizonte_semanas": 1,
            "series": {
                "labels": ["S+1"],
                "demanda": [180.0],
                "estoque_natural": [90.0],
                "estoque_pos_ia": [90.0],
                "producao_ia": [0.0]
            },
            "recomendacoes": [],
            "pegging_ordens": []
        }"#;

        let board: PlanningBoardResponse = serde_json::from_str(json).unwrap();
        assert!(board.series.producao_existente.is_empty());
    }
}
