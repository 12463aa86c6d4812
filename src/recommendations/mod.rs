//! Natural-language recommendations for a scored assessment.
//!
//! Generation never fails from the caller's point of view: a missing
//! credential, an empty reply and a failed call each degrade to fallback text.

mod error;
pub mod gemini;
mod prompt;

use std::future::Future;

pub use error::GenerationError;
pub use gemini::GeminiClient;
pub use prompt::{factor_lines, Prompt, SYSTEM_INSTRUCTION};

use crate::scoring::RiskAssessment;
use crate::settings::settings;

pub const FALLBACK_NO_CREDENTIAL: &str = "Consult with healthcare professionals for personalized \
advice. Regular check-ups and monitoring are important for newborn health. Discuss any concerns \
with your pediatrician or a neonatal specialist.";

pub const FALLBACK_EMPTY: &str = "AI could not generate specific recommendations at this time. \
Please discuss the risk assessment thoroughly with your healthcare providers. They can offer the \
best guidance based on a complete medical evaluation.";

pub fn fallback_for_error(error: &GenerationError) -> String {
    format!(
        "AI-powered recommendations could not be generated due to an error. We recommend \
         discussing the detailed risk assessment with your healthcare team. Key areas for \
         discussion include the identified risk factors and appropriate monitoring strategies. \
         Standard newborn care and follow-up appointments are crucial. (Error: {error})"
    )
}

/// Prompt in, text out.
pub trait TextGenerator {
    fn generate(
        &self,
        prompt: &Prompt,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send;
}

pub struct RecommendationGenerator<G = GeminiClient> {
    generator: Option<G>,
}

impl RecommendationGenerator<GeminiClient> {
    /// Uses the Gemini client when a credential is configured.
    pub fn from_env() -> Self {
        let generator = GeminiClient::from_env(&settings().recommendations);
        match &generator {
            Some(client) => tracing::info!(model = client.model(), "text generation enabled"),
            None => tracing::warn!(
                "{} is not set, recommendations will use fallback text",
                settings().recommendations.api_key_var
            ),
        }
        Self { generator }
    }

    pub fn model(&self) -> Option<&str> {
        self.generator.as_ref().map(GeminiClient::model)
    }
}

impl<G: TextGenerator> RecommendationGenerator<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    pub fn disabled() -> Self {
        Self { generator: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.generator.is_some()
    }

    pub async fn recommend(&self, assessment: &RiskAssessment) -> String {
        let Some(generator) = &self.generator else {
            return FALLBACK_NO_CREDENTIAL.to_string();
        };

        let prompt = Prompt::for_assessment(assessment);
        tracing::debug!(prompt = %prompt.content, "requesting recommendations");

        match generator.generate(&prompt).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) | Err(GenerationError::EmptyResponse) => {
                tracing::warn!("generated recommendations were empty");
                FALLBACK_EMPTY.to_string()
            }
            Err(e) => {
                tracing::error!("recommendation request failed: {e}");
                fallback_for_error(&e)
            }
        }
    }
}
