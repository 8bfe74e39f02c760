use serde::{Deserialize, Serialize};

/// Response of `GET /dashboard/insights` — business-language alerts
/// derived from the same KPIs as the overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsResponse {
    pub generated_at: String,
    pub insights: Vec<Insight>,
}

/// One alert card. `tipo` is the subject area ("material", "ordem",
/// "recurso", "sistema"), `severidade` one of "alto" | "medio" |
/// "baixo" | "info".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub tipo: String,
    pub severidade: String,
    pub titulo: String,
    pub descricao: String,
    pub sugestao: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_insights() {
        let json = r#"{
            "generated_at": "2026-08-07T11:31:02Z",
            "insights": [
                {
                    "tipo": "material",
                    "severidade": "alto",
                    "titulo": "Materiais em risco de ruptura",
                    "descricao": "9 de 412 materiais monitorados estão com cobertura menor que 7 dias.",
                    "sugestao": "Priorizar esses itens na reunião de MRP."
                }
            ]
        }"#;

        let resp: InsightsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.insights.len(), 1);
        assert_eq!(resp.insights[0].severidade, "alto");
    }
}
