use serde::Serialize;

use crate::recommendations::{RecommendationGenerator, TextGenerator};
use crate::scoring::{
    ContributingFactor, ParentalInputs, RandomSource, RiskAssessment, RiskLevel, RiskScorer,
};

/// Final result shown to the user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskResult {
    pub overall_score: u8,
    pub level: RiskLevel,
    pub confidence: f64,
    pub factors: Vec<ContributingFactor>,
    pub summary: String,
    pub recommendations: String,
}

impl RiskResult {
    pub fn new(assessment: RiskAssessment, recommendations: String) -> Self {
        Self {
            overall_score: assessment.overall_score,
            level: assessment.level,
            confidence: assessment.confidence,
            factors: assessment.factors,
            summary: assessment.summary,
            recommendations,
        }
    }
}

/// Scores the inputs, then waits for recommendations before returning.
pub async fn assess<G: TextGenerator>(
    inputs: &ParentalInputs,
    scorer: &RiskScorer,
    generator: &RecommendationGenerator<G>,
    rng: &mut impl RandomSource,
) -> RiskResult {
    let assessment = scorer.score(inputs, rng);
    tracing::info!(
        score = assessment.overall_score,
        level = %assessment.level,
        factors = assessment.factors.len(),
        "scored assessment"
    );

    let recommendations = generator.recommend(&assessment).await;
    RiskResult::new(assessment, recommendations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake;
    use crate::recommendations::{GenerationError, Prompt, FALLBACK_NO_CREDENTIAL};
    use crate::scoring::random::fixed::FixedSequence;
    use crate::settings::Settings;

    struct Echo;

    impl TextGenerator for Echo {
        async fn generate(&self, prompt: &Prompt) -> Result<String, GenerationError> {
            let first_line = prompt.content.lines().nth(1).unwrap_or_default();
            Ok(format!("echo: {first_line}"))
        }
    }

    fn scorer() -> RiskScorer {
        RiskScorer::new(Settings::default().scoring)
    }

    #[tokio::test]
    async fn test_pipeline_without_credential() {
        let inputs = intake::collect(r#"{ "familyHistory": "yes" }"#).unwrap();
        let generator = RecommendationGenerator::<Echo>::disabled();
        let mut rng = FixedSequence::new(&[0.0, 0.5]);

        let result = assess(&inputs, &scorer(), &generator, &mut rng).await;

        assert_eq!(result.overall_score, 23);
        assert_eq!(result.level, RiskLevel::Low);
        assert_eq!(result.confidence, 0.8);
        assert_eq!(result.recommendations, FALLBACK_NO_CREDENTIAL);
    }

    #[tokio::test]
    async fn test_pipeline_attaches_generated_text() {
        let inputs = ParentalInputs::default();
        let generator = RecommendationGenerator::new(Echo);
        let mut rng = FixedSequence::new(&[0.0, 0.0]);

        let result = assess(&inputs, &scorer(), &generator, &mut rng).await;

        assert_eq!(result.recommendations, "echo: - Overall Risk Score: 5/100");
    }

    #[tokio::test]
    async fn test_result_serializes_camel_case() {
        let generator = RecommendationGenerator::<Echo>::disabled();
        let mut rng = FixedSequence::new(&[0.0, 0.0]);
        let result = assess(&ParentalInputs::default(), &scorer(), &generator, &mut rng).await;

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["overallScore"], 5);
        assert_eq!(json["level"], "Low");
        assert_eq!(json["factors"][0]["impactScore"], 2);
    }
}
