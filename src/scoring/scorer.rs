use serde::Serialize;

use super::factors::{impact, rank, ContributingFactor};
use super::inputs::{
    ClinicalRecord, GeneticMarker, MarkerPresence, MaternalHealth, Parent, ParentalInputs,
    YesNoUnknown,
};
use super::level::RiskLevel;
use super::random::RandomSource;
use crate::settings::{settings, Scoring};

pub const GENETIC_SCORE_WEIGHT: f64 = 1.8;
pub const GENETIC_IMPACT_WEIGHT: f64 = 1.2;
pub const MARKER_A_SCORE: f64 = 6.0;
pub const MARKER_A_IMPACT: f64 = 2.5;
pub const MARKER_B_SCORE: f64 = 8.0;
pub const MARKER_B_IMPACT: f64 = 3.5;

pub const FAMILY_HISTORY_SCORE: f64 = 18.0;

pub const PRETERM_WEEKS: u32 = 37;
pub const POSTTERM_WEEKS: u32 = 42;
pub const LOW_BIRTH_WEIGHT_GRAMS: u32 = 2500;
pub const LOW_APGAR: u32 = 7;

pub const DELIVERY_COMPLICATIONS_SCORE: f64 = 10.0;
pub const NEONATAL_SEIZURES_SCORE: f64 = 25.0;

/// Scored assessment before recommendations are attached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub overall_score: u8,
    pub level: RiskLevel,
    pub confidence: f64,
    pub factors: Vec<ContributingFactor>,
    pub summary: String,
}

#[derive(Debug, Clone)]
pub struct RiskScorer {
    config: Scoring,
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self::new(settings().scoring.clone())
    }
}

struct Tally {
    score: f64,
    factors: Vec<ContributingFactor>,
}

impl Tally {
    fn add(&mut self, score: f64, factor: ContributingFactor) {
        self.score += score;
        self.factors.push(factor);
    }
}

impl RiskScorer {
    pub fn new(config: Scoring) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Scoring {
        &self.config
    }

    pub fn score(&self, inputs: &ParentalInputs, rng: &mut impl RandomSource) -> RiskAssessment {
        let mut tally = Tally {
            score: self.config.base_score,
            factors: Vec::new(),
        };

        for (parent, genetics) in inputs.genetics() {
            score_genetics(&mut tally, parent, genetics);
        }
        score_family_history(&mut tally, inputs.family_history);
        score_clinical(&mut tally, &inputs.clinical_data);
        self.score_unspecified(&mut tally, rng);

        let clamped = tally
            .score
            .clamp(self.config.min_score, self.config.max_score);
        let overall_score = clamped.round() as u8;
        let level = RiskLevel::from_score_with(clamped, &self.config.levels);

        let confidence = self.draw_confidence(rng);

        RiskAssessment {
            overall_score,
            level,
            confidence,
            factors: rank(tally.factors, self.config.max_factors),
            summary: summary(overall_score, level),
        }
    }

    fn score_unspecified(&self, tally: &mut Tally, rng: &mut impl RandomSource) {
        let unspecified = &self.config.unspecified;
        if rng.next_unit() <= 1.0 - unspecified.probability {
            return;
        }

        let span = f64::from(unspecified.max_impact.saturating_sub(unspecified.min_impact));
        let factor_impact =
            (rng.next_unit() * span + f64::from(unspecified.min_impact)).round() as u8;
        tally.add(
            f64::from(factor_impact) * unspecified.score_weight,
            ContributingFactor::new(
                "Other Unspecified Factors",
                factor_impact,
                "Represents other potential influences not explicitly modeled.",
            ),
        );
    }

    fn draw_confidence(&self, rng: &mut impl RandomSource) -> f64 {
        let confidence = &self.config.confidence;
        let raw = confidence.base + rng.next_unit() * confidence.spread;
        ((raw * 100.0).round() / 100.0).clamp(0.0, 1.0)
    }
}

fn score_genetics(tally: &mut Tally, parent: Parent, genetics: &GeneticMarker) {
    let overall = f64::from(genetics.overall_score);
    let mut score = overall * GENETIC_SCORE_WEIGHT;
    let mut raw_impact = overall * GENETIC_IMPACT_WEIGHT;

    if genetics.marker_a {
        score += MARKER_A_SCORE;
        raw_impact += MARKER_A_IMPACT;
    }
    if genetics.marker_b == MarkerPresence::Present {
        score += MARKER_B_SCORE;
        raw_impact += MARKER_B_IMPACT;
    }

    tally.add(
        score,
        ContributingFactor::new(
            format!("{parent} Genetic Profile"),
            impact(raw_impact, 0.0, 10.0),
            format!(
                "Assesses influence from {} genetic markers and overall predisposition score.",
                parent.to_string().to_lowercase()
            ),
        ),
    );
}

fn score_family_history(tally: &mut Tally, history: YesNoUnknown) {
    let (score, factor_impact, description) = match history {
        YesNoUnknown::Yes => (
            FAMILY_HISTORY_SCORE,
            7,
            "Positive family history significantly increases predisposition.",
        ),
        YesNoUnknown::No => (0.0, 1, "No reported family history, a positive factor."),
        YesNoUnknown::Unknown => (0.0, 2, "Family history status unknown."),
    };
    tally.add(
        score,
        ContributingFactor::new("Family History", factor_impact, description),
    );
}

fn score_clinical(tally: &mut Tally, clinical: &ClinicalRecord) {
    if let Some(age) = clinical.mother_age_at_birth {
        if !(20..=38).contains(&age) {
            let penalty = if age < 20 {
                3.0
            } else if age > 40 {
                4.0
            } else {
                2.0
            };
            tally.add(
                penalty,
                ContributingFactor::new(
                    "Maternal Age",
                    3,
                    format!("Maternal age ({age}) outside optimal range."),
                ),
            );
        }
    }

    if let Some(weeks) = clinical.gestational_age_weeks {
        if weeks < PRETERM_WEEKS {
            let deficit = f64::from(PRETERM_WEEKS - weeks);
            tally.add(
                deficit * 1.2,
                ContributingFactor::new(
                    "Gestational Age",
                    impact(deficit * 0.8, 3.0, 10.0),
                    format!("Preterm birth ({weeks} weeks)."),
                ),
            );
        } else if weeks > POSTTERM_WEEKS {
            tally.add(
                3.0,
                ContributingFactor::new(
                    "Gestational Age",
                    3,
                    format!("Post-term birth ({weeks} weeks)."),
                ),
            );
        }
    }

    if let Some(grams) = clinical.birth_weight_grams {
        if grams < LOW_BIRTH_WEIGHT_GRAMS {
            let deficit = f64::from(LOW_BIRTH_WEIGHT_GRAMS - grams);
            tally.add(
                deficit / 200.0,
                ContributingFactor::new(
                    "Birth Weight",
                    impact(deficit / 250.0, 3.0, 8.0),
                    format!("Low birth weight ({grams}g)."),
                ),
            );
        }
    }

    for (apgar, time) in [
        (clinical.apgar_score_1_min, "1 min"),
        (clinical.apgar_score_5_min, "5 min"),
    ] {
        if let Some(apgar) = apgar {
            if apgar < LOW_APGAR {
                let deficit = f64::from(LOW_APGAR - apgar);
                tally.add(
                    deficit * 1.5,
                    ContributingFactor::new(
                        format!("Apgar Score ({time})"),
                        impact(deficit * 1.2, 2.0, 7.0),
                        format!("Low Apgar score at {time} ({apgar})."),
                    ),
                );
            }
        }
    }

    if clinical.delivery_complications {
        tally.add(
            DELIVERY_COMPLICATIONS_SCORE,
            ContributingFactor::new(
                "Delivery Complications",
                6,
                "Presence of significant delivery complications (e.g., hypoxia).",
            ),
        );
    }

    if clinical.neonatal_seizures_observed == YesNoUnknown::Yes {
        tally.add(
            NEONATAL_SEIZURES_SCORE,
            ContributingFactor::new(
                "Neonatal Seizures",
                9,
                "Neonatal seizures observed, a strong risk factor.",
            ),
        );
    }

    match clinical.maternal_health_issues {
        MaternalHealth::Significant => tally.add(
            8.0,
            ContributingFactor::new(
                "Maternal Health",
                5,
                "Significant maternal health issues during pregnancy.",
            ),
        ),
        MaternalHealth::Mild => tally.add(
            3.0,
            ContributingFactor::new(
                "Maternal Health",
                2,
                "Mild maternal health issues during pregnancy.",
            ),
        ),
        MaternalHealth::None | MaternalHealth::Unknown => {}
    }
}

pub fn summary(score: u8, level: RiskLevel) -> String {
    format!(
        "Based on the comprehensive genetic, family, and clinical information provided, \
         the simulated neonatal epilepsy risk score is {score} out of 100. \
         This corresponds to a {level} risk level. Key considerations include genetic \
         profiles, family history, perinatal events, and neonatal observations."
    )
}
