use serde::{Deserialize, Serialize};

/// Response of `GET /pegging/ia-lite?material={code}` — the orders
/// pegged to one material with backlog figures.
///
/// When the material has no linked orders the backend answers with
/// `sem_ordens: true` and omits the counts, hence the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeggingIaLiteResponse {
    pub material: String,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub cobertura_atual_dias: Option<f64>,
    #[serde(default)]
    pub total_ordens_vinculadas: u32,
    #[serde(default)]
    pub ordens_atrasadas: u32,
    #[serde(default)]
    pub maior_atraso_dias: u32,
    #[serde(default)]
    pub sem_ordens: bool,
    #[serde(default)]
    pub ordens: Vec<PeggingOrderLink>,
}

impl PeggingIaLiteResponse {
    /// True when the payload carries nothing worth tabulating.
    pub fn has_no_orders(&self) -> bool {
        self.sem_ordens || self.ordens.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeggingOrderLink {
    pub ordem: String,
    pub material: String,
    pub data_fim: String,
    pub status: String,
    #[serde(default)]
    pub quantidade: Option<f64>,
    #[serde(default)]
    pub dias_atraso: Option<i32>,
    #[serde(default)]
    pub criticidade_score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_linked_orders() {
        let json = r#"{
            "material": "4011835-AA",
            "descricao": "Módulo airbag motorista",
            "cobertura_atual_dias": 4.5,
            "total_ordens_vinculadas": 2,
            "ordens_atrasadas": 1,
            "maior_atraso_dias": 12,
            "ordens": [
                {"ordem": "000010012345", "material": "4011835-AA",
                 "data_fim": "2026-07-26", "status": "REL  MACM",
                 "quantidade": 480.0, "dias_atraso": 12, "criticidade_score": 91.0},
                {"ordem": "000010012399", "material": "4011835-AA",
                 "data_fim": "2026-08-14", "status": "CRTD",
                 "quantidade": 240.0, "dias_atraso": 0, "criticidade_score": 35.0}
            ]
        }"#;

        let resp: PeggingIaLiteResponse = serde_json::from_str(json).unwrap();
        assert!(!resp.has_no_orders());
        assert_eq!(resp.ordens.len(), 2);
        assert_eq!(resp.maior_atraso_dias, 12);
    }

    #[test]
    fn deserializes_sem_ordens_answer() {
        let json = r#"{"material": "9900001-ZZ", "sem_ordens": true}"#;

        let resp: PeggingIaLiteResponse = serde_json::from_str(json).unwrap();
        assert!(resp.has_no_orders());
        assert_eq!(resp.total_ordens_vinculadas, 0);
        assert!(resp.ordens.is_empty());
    }
}
