//! Raw intake records as the form submits them, and their validation into
//! [`ParentalInputs`].
//!
//! Numeric fields may arrive as numbers, numeric strings, blank strings or
//! `null`. Blank and `null` both mean "no value".

use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::scoring::{
    ClinicalRecord, GeneticMarker, MarkerPresence, MaternalHealth, ParentalInputs, YesNoUnknown,
};
use crate::settings::{settings, Intake, Range};

#[derive(Debug, Error, PartialEq)]
pub enum IntakeError {
    #[error("{field} must be a number, got {value:?}")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} must be a whole number, got {value}")]
    NotWhole { field: &'static str, value: f64 },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("malformed intake record: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for IntakeError {
    fn from(e: serde_json::Error) -> Self {
        IntakeError::Malformed(e.to_string())
    }
}

/// A form field that may be left blank.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NumericField {
    #[default]
    Blank,
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for NumericField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        Ok(match Option::<Raw>::deserialize(deserializer)? {
            None => NumericField::Blank,
            Some(Raw::Number(n)) => NumericField::Number(n),
            Some(Raw::Text(s)) if s.trim().is_empty() => NumericField::Blank,
            Some(Raw::Text(s)) => NumericField::Text(s),
        })
    }
}

impl NumericField {
    fn value(&self, field: &'static str) -> Result<Option<f64>, IntakeError> {
        match self {
            NumericField::Blank => Ok(None),
            NumericField::Number(n) => Ok(Some(*n)),
            NumericField::Text(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(Some)
                .ok_or_else(|| IntakeError::NotANumber {
                    field,
                    value: s.clone(),
                }),
        }
    }

    fn whole(&self, field: &'static str, range: Range) -> Result<Option<u32>, IntakeError> {
        self.value(field)?
            .map(|value| checked_whole(field, value, range))
            .transpose()
    }
}

fn checked_whole(field: &'static str, value: f64, range: Range) -> Result<u32, IntakeError> {
    if value.fract() != 0.0 {
        return Err(IntakeError::NotWhole { field, value });
    }
    if !range.contains(value) {
        return Err(IntakeError::OutOfRange {
            field,
            value,
            min: range.min,
            max: range.max,
        });
    }
    Ok(value as u32)
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawGenetics {
    pub marker_a: bool,
    pub marker_b: MarkerPresence,
    pub overall_score: NumericField,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawClinical {
    pub mother_age_at_birth: NumericField,
    pub gestational_age_weeks: NumericField,
    pub birth_weight_grams: NumericField,
    pub apgar_score_1_min: NumericField,
    pub apgar_score_5_min: NumericField,
    pub delivery_complications: bool,
    pub neonatal_seizures_observed: YesNoUnknown,
    pub maternal_health_issues: MaternalHealth,
}

/// Intake record as submitted. Missing sections take the blank-form values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawIntake {
    pub father_genetics: RawGenetics,
    pub mother_genetics: RawGenetics,
    pub family_history: YesNoUnknown,
    pub clinical_data: RawClinical,
}

impl RawIntake {
    pub fn from_json(text: &str) -> Result<Self, IntakeError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn validate(&self) -> Result<ParentalInputs, IntakeError> {
        self.validate_with(&settings().intake)
    }

    pub fn validate_with(&self, limits: &Intake) -> Result<ParentalInputs, IntakeError> {
        let clinical = &self.clinical_data;

        Ok(ParentalInputs {
            father_genetics: self
                .father_genetics
                .validate("fatherGenetics.overallScore", limits)?,
            mother_genetics: self
                .mother_genetics
                .validate("motherGenetics.overallScore", limits)?,
            family_history: self.family_history,
            clinical_data: ClinicalRecord {
                mother_age_at_birth: clinical
                    .mother_age_at_birth
                    .whole("motherAgeAtBirth", limits.mother_age)?,
                gestational_age_weeks: clinical
                    .gestational_age_weeks
                    .whole("gestationalAgeWeeks", limits.gestational_weeks)?,
                birth_weight_grams: clinical
                    .birth_weight_grams
                    .whole("birthWeightGrams", limits.birth_weight_grams)?,
                apgar_score_1_min: clinical
                    .apgar_score_1_min
                    .whole("apgarScore1Min", limits.apgar)?,
                apgar_score_5_min: clinical
                    .apgar_score_5_min
                    .whole("apgarScore5Min", limits.apgar)?,
                delivery_complications: clinical.delivery_complications,
                neonatal_seizures_observed: clinical.neonatal_seizures_observed,
                maternal_health_issues: clinical.maternal_health_issues,
            },
        })
    }
}

impl RawGenetics {
    fn validate(&self, field: &'static str, limits: &Intake) -> Result<GeneticMarker, IntakeError> {
        let overall_score = self
            .overall_score
            .whole(field, limits.overall_score)?
            .unwrap_or(0);

        Ok(GeneticMarker {
            marker_a: self.marker_a,
            marker_b: self.marker_b,
            overall_score: overall_score as u8,
        })
    }
}

/// Parses and validates a JSON intake record in one step.
pub fn collect(text: &str) -> Result<ParentalInputs, IntakeError> {
    RawIntake::from_json(text)?.validate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    fn limits() -> Intake {
        Settings::default().intake
    }

    fn parse(text: &str) -> Result<ParentalInputs, IntakeError> {
        RawIntake::from_json(text)?.validate_with(&limits())
    }

    #[test]
    fn test_empty_record_is_blank_form() {
        let inputs = parse("{}").unwrap();
        assert_eq!(inputs, ParentalInputs::default());
    }

    #[test]
    fn test_full_record() {
        let inputs = parse(
            r#"{
                "fatherGenetics": { "markerA": true, "markerB": "absent", "overallScore": 4 },
                "motherGenetics": { "markerA": false, "markerB": "present", "overallScore": "7" },
                "familyHistory": "yes",
                "clinicalData": {
                    "motherAgeAtBirth": 41,
                    "gestationalAgeWeeks": "",
                    "birthWeightGrams": null,
                    "apgarScore1Min": "5",
                    "apgarScore5Min": 8,
                    "deliveryComplications": true,
                    "neonatalSeizuresObserved": "no",
                    "maternalHealthIssues": "significant"
                }
            }"#,
        )
        .unwrap();

        assert!(inputs.father_genetics.marker_a);
        assert_eq!(inputs.father_genetics.marker_b, MarkerPresence::Absent);
        assert_eq!(inputs.mother_genetics.overall_score, 7);
        assert_eq!(inputs.family_history, YesNoUnknown::Yes);

        let clinical = &inputs.clinical_data;
        assert_eq!(clinical.mother_age_at_birth, Some(41));
        assert_eq!(clinical.gestational_age_weeks, None);
        assert_eq!(clinical.birth_weight_grams, None);
        assert_eq!(clinical.apgar_score_1_min, Some(5));
        assert_eq!(clinical.apgar_score_5_min, Some(8));
        assert!(clinical.delivery_complications);
        assert_eq!(clinical.neonatal_seizures_observed, YesNoUnknown::No);
        assert_eq!(clinical.maternal_health_issues, MaternalHealth::Significant);
    }

    #[test]
    fn test_blank_is_not_zero() {
        let inputs = parse(r#"{ "clinicalData": { "apgarScore1Min": "   " } }"#).unwrap();
        assert_eq!(inputs.clinical_data.apgar_score_1_min, None);

        let inputs = parse(r#"{ "clinicalData": { "apgarScore1Min": 0 } }"#).unwrap();
        assert_eq!(inputs.clinical_data.apgar_score_1_min, Some(0));
    }

    #[test]
    fn test_out_of_range() {
        let err = parse(r#"{ "clinicalData": { "birthWeightGrams": 7000 } }"#).unwrap_err();
        assert_eq!(
            err,
            IntakeError::OutOfRange {
                field: "birthWeightGrams",
                value: 7000.0,
                min: 500.0,
                max: 6000.0,
            }
        );

        let err = parse(r#"{ "motherGenetics": { "overallScore": 11 } }"#).unwrap_err();
        assert!(matches!(
            err,
            IntakeError::OutOfRange {
                field: "motherGenetics.overallScore",
                ..
            }
        ));
    }

    #[test]
    fn test_not_a_number() {
        let err = parse(r#"{ "clinicalData": { "motherAgeAtBirth": "thirty" } }"#).unwrap_err();
        assert!(matches!(
            err,
            IntakeError::NotANumber {
                field: "motherAgeAtBirth",
                ..
            }
        ));
    }

    #[test]
    fn test_fractional_values_rejected() {
        let err = parse(r#"{ "clinicalData": { "gestationalAgeWeeks": 36.5 } }"#).unwrap_err();
        assert!(matches!(err, IntakeError::NotWhole { .. }));
    }

    #[test]
    fn test_unknown_enum_value_is_malformed() {
        let err = parse(r#"{ "familyHistory": "maybe" }"#).unwrap_err();
        assert!(matches!(err, IntakeError::Malformed(_)));
    }
}
