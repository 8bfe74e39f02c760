//! Demonstration dataset shown when the pegging endpoint is
//! unreachable, so the panel stays presentable in offline demos.
//!
//! Only the pegging panel falls back; every other panel surfaces the
//! failure. For any material other than the canonical one the seed is
//! cloned with the requested code substituted wherever a material
//! appears — quantities and dates stay untouched.

use contracts::pegging::ia_lite::{PeggingIaLiteResponse, PeggingOrderLink};

/// Material the seed dataset was captured for.
pub const DEMO_MATERIAL: &str = "4011835-AA";

/// Substitute dataset for a failed pegging fetch.
///
/// Returns `None` for a blank identifier (nothing to template), the
/// seed unchanged for the canonical material, otherwise the templated
/// clone.
pub fn demo_pegging(material: &str) -> Option<PeggingIaLiteResponse> {
    let trimmed = material.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut data = seed();
    if trimmed != DEMO_MATERIAL {
        data.material = trimmed.to_string();
        for ordem in &mut data.ordens {
            ordem.material = trimmed.to_string();
        }
    }
    Some(data)
}

fn seed() -> PeggingIaLiteResponse {
    PeggingIaLiteResponse {
        material: DEMO_MATERIAL.to_string(),
        descricao: Some("Módulo airbag motorista - linha 3101".to_string()),
        cobertura_atual_dias: Some(4.5),
        total_ordens_vinculadas: 4,
        ordens_atrasadas: 2,
        maior_atraso_dias: 12,
        sem_ordens: false,
        ordens: vec![
            PeggingOrderLink {
                ordem: "000010012345".to_string(),
                material: DEMO_MATERIAL.to_string(),
                data_fim: "2026-07-26".to_string(),
                status: "REL  MACM".to_string(),
                quantidade: Some(480.0),
                dias_atraso: Some(12),
                criticidade_score: Some(91.0),
            },
            PeggingOrderLink {
                ordem: "000010012391".to_string(),
                material: DEMO_MATERIAL.to_string(),
                data_fim: "2026-08-02".to_string(),
                status: "REL  CONF".to_string(),
                quantidade: Some(360.0),
                dias_atraso: Some(5),
                criticidade_score: Some(67.0),
            },
            PeggingOrderLink {
                ordem: "000010012440".to_string(),
                material: DEMO_MATERIAL.to_string(),
                data_fim: "2026-08-14".to_string(),
                status: "CRTD".to_string(),
                quantidade: Some(240.0),
                dias_atraso: Some(0),
                criticidade_score: Some(35.0),
            },
            PeggingOrderLink {
                ordem: "000010012502".to_string(),
                material: DEMO_MATERIAL.to_string(),
                data_fim: "2026-08-28".to_string(),
                status: "CRTD".to_string(),
                quantidade: Some(240.0),
                dias_atraso: Some(0),
                criticidade_score: Some(22.0),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_material_returns_the_seed_unchanged() {
        let data = demo_pegging(DEMO_MATERIAL).unwrap();
        assert_eq!(data, seed());
    }

    #[test]
    fn other_materials_get_a_templated_clone() {
        let data = demo_pegging("7020114-BB").unwrap();
        let reference = seed();

        assert_eq!(data.material, "7020114-BB");
        assert_eq!(data.ordens.len(), reference.ordens.len());
        for (templated, original) in data.ordens.iter().zip(reference.ordens.iter()) {
            assert_eq!(templated.material, "7020114-BB");
            // everything except the material stays the seed's
            assert_eq!(templated.ordem, original.ordem);
            assert_eq!(templated.data_fim, original.data_fim);
            assert_eq!(templated.status, original.status);
            assert_eq!(templated.quantidade, original.quantidade);
            assert_eq!(templated.dias_atraso, original.dias_atraso);
            assert_eq!(templated.criticidade_score, original.criticidade_score);
        }
        assert_eq!(data.descricao, reference.descricao);
        assert_eq!(data.cobertura_atual_dias, reference.cobertura_atual_dias);
        assert_eq!(data.total_ordens_vinculadas, reference.total_ordens_vinculadas);
    }

    #[test]
    fn templating_is_deterministic() {
        assert_eq!(demo_pegging("X-99"), demo_pegging("X-99"));
    }

    #[test]
    fn blank_identifier_yields_nothing() {
        assert!(demo_pegging("").is_none());
        assert!(demo_pegging("   ").is_none());
    }

    #[test]
    fn identifier_is_trimmed_before_templating() {
        let data = demo_pegging("  7020114-BB  ").unwrap();
        assert_eq!(data.material, "7020114-BB");
    }
}
