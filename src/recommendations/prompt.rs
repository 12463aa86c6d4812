use crate::scoring::RiskAssessment;

pub const SYSTEM_INSTRUCTION: &str = "You are a helpful medical assistant AI specialized in \
neonatal care and epilepsy. Your role is to provide supportive, general recommendations based \
on a simulated risk assessment. You should empower users to have informed conversations with \
their doctors. Always emphasize that your advice is not a substitute for professional medical \
consultation. Be empathetic and clear.";

/// A single text-generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub system: String,
    pub content: String,
}

impl Prompt {
    pub fn for_assessment(assessment: &RiskAssessment) -> Self {
        Self {
            system: SYSTEM_INSTRUCTION.to_string(),
            content: assessment_prompt(assessment),
        }
    }
}

pub fn factor_lines(assessment: &RiskAssessment) -> String {
    assessment
        .factors
        .iter()
        .map(|f| {
            format!(
                "- {} (Impact: {}/10): {}",
                f.name, f.impact_score, f.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn assessment_prompt(assessment: &RiskAssessment) -> String {
    format!(
        "Based on the following neonatal epilepsy risk assessment:
- Overall Risk Score: {score}/100
- Risk Level: {level}
- Key Contributing Factors:
{factors}
- Summary: {summary}

Please provide compassionate and actionable recommendations. Focus on:
1.  Next steps for parents to consider.
2.  Potential monitoring or observational points for the newborn.
3.  General care considerations that might be relevant.
4.  Areas or specific questions to discuss with healthcare professionals (e.g., pediatrician, neurologist, genetic counselor).

Frame your response empathetically. Do not provide direct medical advice or diagnosis. The recommendations should be general guidance to support discussions with qualified medical experts.
Keep the recommendations concise, clear, and structured, perhaps using bullet points.
",
        score = assessment.overall_score,
        level = assessment.level,
        factors = factor_lines(assessment),
        summary = assessment.summary,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{summary, ContributingFactor, RiskLevel};

    fn assessment() -> RiskAssessment {
        RiskAssessment {
            overall_score: 81,
            level: RiskLevel::VeryHigh,
            confidence: 0.8,
            factors: vec![
                ContributingFactor::new("Neonatal Seizures", 9, "Seizures observed."),
                ContributingFactor::new("Family History", 7, "Positive family history."),
            ],
            summary: summary(81, RiskLevel::VeryHigh),
        }
    }

    #[test]
    fn test_prompt_carries_assessment() {
        let prompt = Prompt::for_assessment(&assessment());

        assert_eq!(prompt.system, SYSTEM_INSTRUCTION);
        assert!(prompt.content.contains("Overall Risk Score: 81/100"));
        assert!(prompt.content.contains("Risk Level: Very High"));
        assert!(prompt
            .content
            .contains("- Neonatal Seizures (Impact: 9/10): Seizures observed.\n- Family History"));
        assert!(prompt.content.contains("81 out of 100"));
    }

    #[test]
    fn test_factor_lines_empty() {
        let mut empty = assessment();
        empty.factors.clear();
        assert_eq!(factor_lines(&empty), "");
    }
}
