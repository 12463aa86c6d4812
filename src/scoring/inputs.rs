use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MarkerPresence {
    Present,
    Absent,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum YesNoUnknown {
    Yes,
    No,
    #[default]
    Unknown,
}

/// Ordered by severity so comparisons follow clinical weight.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MaternalHealth {
    #[default]
    Unknown,
    None,
    Mild,
    Significant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneticMarker {
    pub marker_a: bool,
    pub marker_b: MarkerPresence,
    /// Predisposition score, 0 to 10.
    pub overall_score: u8,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalRecord {
    pub mother_age_at_birth: Option<u32>,
    pub gestational_age_weeks: Option<u32>,
    pub birth_weight_grams: Option<u32>,
    pub apgar_score_1_min: Option<u32>,
    pub apgar_score_5_min: Option<u32>,
    pub delivery_complications: bool,
    pub neonatal_seizures_observed: YesNoUnknown,
    pub maternal_health_issues: MaternalHealth,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentalInputs {
    pub father_genetics: GeneticMarker,
    pub mother_genetics: GeneticMarker,
    pub family_history: YesNoUnknown,
    pub clinical_data: ClinicalRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Parent {
    #[strum(serialize = "Maternal")]
    Mother,
    #[strum(serialize = "Paternal")]
    Father,
}

impl ParentalInputs {
    /// Genetic profiles in the order they are scored.
    pub fn genetics(&self) -> [(Parent, &GeneticMarker); 2] {
        [
            (Parent::Mother, &self.mother_genetics),
            (Parent::Father, &self.father_genetics),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_blank_form() {
        let inputs = ParentalInputs::default();
        assert!(!inputs.father_genetics.marker_a);
        assert_eq!(inputs.mother_genetics.marker_b, MarkerPresence::Unknown);
        assert_eq!(inputs.family_history, YesNoUnknown::Unknown);
        assert_eq!(inputs.clinical_data.gestational_age_weeks, None);
        assert_eq!(
            inputs.clinical_data.maternal_health_issues,
            MaternalHealth::Unknown
        );
    }

    #[test]
    fn test_maternal_health_severity_order() {
        assert!(MaternalHealth::Significant > MaternalHealth::Mild);
        assert!(MaternalHealth::Mild > MaternalHealth::None);
    }

    #[test]
    fn test_genetics_order_is_maternal_first() {
        let inputs = ParentalInputs::default();
        let order: Vec<String> = inputs.genetics().iter().map(|(p, _)| p.to_string()).collect();
        assert_eq!(order, vec!["Maternal", "Paternal"]);
    }
}
