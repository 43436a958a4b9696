//! Threshold rules that turn a region's climate into crop advice.
//!
//! Each rule looks at a single attribute and contributes at most one
//! advisory. Rules never look at each other's output, and they are applied
//! in the order of [`RULES`], which is also the order of the result.

use serde::Serialize;

use super::catalog::{ClimateRecord, Condition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    /// CSS modifier used on the recommendation card.
    pub fn class(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub severity: Severity,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

struct Rule {
    applies: fn(&ClimateRecord) -> bool,
    advisory: Advisory,
}

const RULES: [Rule; 8] = [
    Rule {
        applies: |c| c.temperature > 30.0,
        advisory: Advisory {
            severity: Severity::Warning,
            icon: "thermostat",
            title: "Temperatura Elevada",
            description: "Considere aumentar a frequência de irrigação e usar cobertura vegetal para proteger o solo.",
        },
    },
    Rule {
        applies: |c| c.temperature < 20.0,
        advisory: Advisory {
            severity: Severity::Info,
            icon: "ac_unit",
            title: "Temperatura Baixa",
            description: "Monitore possíveis geadas. Considere usar estufas ou coberturas para culturas sensíveis.",
        },
    },
    Rule {
        applies: |c| c.humidity < 50.0,
        advisory: Advisory {
            severity: Severity::Warning,
            icon: "water_drop",
            title: "Umidade Baixa",
            description: "Aumente a irrigação e considere sistemas de gotejamento para economia de água.",
        },
    },
    Rule {
        applies: |c| c.humidity > 80.0,
        advisory: Advisory {
            severity: Severity::Info,
            icon: "opacity",
            title: "Alta Umidade",
            description: "Atenção para doenças fúngicas. Mantenha boa ventilação e espaçamento adequado entre plantas.",
        },
    },
    Rule {
        applies: |c| c.precipitation < 50.0,
        advisory: Advisory {
            severity: Severity::Critical,
            icon: "water_drop",
            title: "Baixa Precipitação",
            description: "Implemente sistema de irrigação eficiente. Considere culturas resistentes à seca.",
        },
    },
    Rule {
        applies: |c| c.precipitation > 150.0,
        advisory: Advisory {
            severity: Severity::Info,
            icon: "rainy",
            title: "Alta Precipitação",
            description: "Garanta boa drenagem do solo. Monitore possíveis alagamentos e erosão.",
        },
    },
    Rule {
        applies: |c| c.wind_speed > 15.0,
        advisory: Advisory {
            severity: Severity::Warning,
            icon: "air",
            title: "Vento Forte",
            description: "Considere usar quebra-ventos ou estruturas de proteção para culturas sensíveis.",
        },
    },
    Rule {
        applies: |c| c.condition == Condition::Semiarid,
        advisory: Advisory {
            severity: Severity::Critical,
            icon: "eco",
            title: "Região Semiárida",
            description: "Priorize tecnologias de irrigação de precisão e sensores de umidade do solo para otimizar o uso de água.",
        },
    },
];

/// Evaluate every rule against `climate`. Boundary values trigger nothing.
pub fn recommendations(climate: &ClimateRecord) -> Vec<Advisory> {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(climate))
        .map(|rule| rule.advisory.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::climate::catalog::{record, RegionId};

    fn climate(
        temperature: f64,
        humidity: f64,
        precipitation: f64,
        wind_speed: f64,
        condition: Condition,
    ) -> ClimateRecord {
        ClimateRecord {
            name: "Teste",
            temperature,
            humidity,
            precipitation,
            wind_speed,
            condition,
            icon: "eco",
            color: "#000000",
        }
    }

    fn titles(advice: &[Advisory]) -> Vec<&'static str> {
        advice.iter().map(|a| a.title).collect()
    }

    #[test]
    fn thresholds_are_strict() {
        let boundary = climate(30.0, 50.0, 150.0, 15.0, Condition::Tropical);
        assert!(recommendations(&boundary).is_empty());

        let lower_boundary = climate(20.0, 80.0, 50.0, 15.0, Condition::Subtropical);
        assert!(recommendations(&lower_boundary).is_empty());
    }

    #[test]
    fn hot_dry_semiarid_triggers_five_rules_in_order() {
        let advice = recommendations(&climate(32.0, 45.0, 30.0, 20.0, Condition::Semiarid));
        let got: Vec<(Severity, &str)> = advice.iter().map(|a| (a.severity, a.title)).collect();
        assert_eq!(
            got,
            vec![
                (Severity::Warning, "Temperatura Elevada"),
                (Severity::Warning, "Umidade Baixa"),
                (Severity::Critical, "Baixa Precipitação"),
                (Severity::Warning, "Vento Forte"),
                (Severity::Critical, "Região Semiárida"),
            ]
        );
    }

    #[test]
    fn cool_temperate_only_warns_about_frost() {
        let advice = recommendations(&climate(18.0, 75.0, 120.0, 12.0, Condition::Temperate));
        assert_eq!(advice.len(), 1);
        assert_eq!(advice[0].severity, Severity::Info);
        assert_eq!(advice[0].icon, "ac_unit");
    }

    #[test]
    fn catalog_regions_match_hand_computed_advice() {
        assert_eq!(titles(&recommendations(record(RegionId::Sul))), ["Temperatura Baixa"]);
        assert!(recommendations(record(RegionId::Sudeste)).is_empty());
        assert_eq!(titles(&recommendations(record(RegionId::CentroOeste))), ["Vento Forte"]);
        assert_eq!(recommendations(record(RegionId::Nordeste)).len(), 5);
        assert_eq!(
            titles(&recommendations(record(RegionId::Norte))),
            ["Alta Umidade", "Alta Precipitação"]
        );
    }

    #[test]
    fn evaluation_is_repeatable() {
        for id in RegionId::ALL {
            let first = recommendations(record(id));
            let second = recommendations(record(id));
            assert_eq!(first, second, "advice for {id} changed between calls");
        }
    }

    #[test]
    fn semiarid_label_alone_is_critical() {
        let advice = recommendations(&climate(25.0, 60.0, 100.0, 10.0, Condition::Semiarid));
        assert_eq!(advice.len(), 1);
        assert_eq!(advice[0].severity, Severity::Critical);
        assert_eq!(advice[0].icon, "eco");
    }

    #[test]
    fn advisory_json_uses_lowercase_severity() {
        let advice = recommendations(record(RegionId::Sul));
        let json = serde_json::to_value(&advice[0]).unwrap();
        assert_eq!(json["severity"], "info");
        assert_eq!(json["title"], "Temperatura Baixa");
    }
}
