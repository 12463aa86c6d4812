use serde::Serialize;

pub const MAX_IMPACT: u8 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributingFactor {
    pub name: String,
    pub impact_score: u8,
    pub description: String,
}

impl ContributingFactor {
    pub fn new(name: impl Into<String>, impact_score: u8, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            impact_score: impact_score.min(MAX_IMPACT),
            description: description.into(),
        }
    }
}

/// Clamps a raw impact into `[min, max]` and rounds it to a whole score.
pub fn impact(raw: f64, min: f64, max: f64) -> u8 {
    raw.clamp(min, max).round() as u8
}

/// Orders factors by impact, highest first, keeping insertion order among
/// ties, and keeps at most `limit` of them.
pub fn rank(mut factors: Vec<ContributingFactor>, limit: usize) -> Vec<ContributingFactor> {
    factors.sort_by(|a, b| b.impact_score.cmp(&a.impact_score));
    factors.truncate(limit);
    factors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_clamps_then_rounds() {
        assert_eq!(impact(0.8, 3.0, 10.0), 3);
        assert_eq!(impact(7.2, 3.0, 10.0), 7);
        assert_eq!(impact(8.4, 2.0, 7.0), 7);
        assert_eq!(impact(-1.0, 0.0, 10.0), 0);
        assert_eq!(impact(4.5, 0.0, 10.0), 5);
    }

    #[test]
    fn test_rank_is_stable_and_truncated() {
        let factors = vec![
            ContributingFactor::new("a", 2, ""),
            ContributingFactor::new("b", 7, ""),
            ContributingFactor::new("c", 2, ""),
            ContributingFactor::new("d", 9, ""),
            ContributingFactor::new("e", 7, ""),
            ContributingFactor::new("f", 1, ""),
        ];

        let ranked = rank(factors, 5);
        let names: Vec<_> = ranked.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["d", "b", "e", "a", "c"]);
    }

    #[test]
    fn test_new_caps_impact() {
        assert_eq!(ContributingFactor::new("x", 12, "").impact_score, MAX_IMPACT);
    }
}
