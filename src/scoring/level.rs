use crate::settings::LevelThresholds;
use serde::Serialize;
use strum::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, EnumIter, Serialize)]
pub enum RiskLevel {
    #[strum(serialize = "Low")]
    Low,
    #[strum(serialize = "Moderate")]
    Moderate,
    #[strum(serialize = "High")]
    High,
    #[strum(serialize = "Very High")]
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskLevel {
    pub const MODERATE_THRESHOLD: f64 = 25.0;
    pub const HIGH_THRESHOLD: f64 = 55.0;
    pub const VERY_HIGH_THRESHOLD: f64 = 78.0;

    pub fn from_score(score: f64) -> Self {
        Self::from_score_with(
            score,
            &LevelThresholds {
                moderate: Self::MODERATE_THRESHOLD,
                high: Self::HIGH_THRESHOLD,
                very_high: Self::VERY_HIGH_THRESHOLD,
            },
        )
    }

    pub fn from_score_with(score: f64, thresholds: &LevelThresholds) -> Self {
        if score < thresholds.moderate {
            RiskLevel::Low
        } else if score < thresholds.high {
            RiskLevel::Moderate
        } else if score < thresholds.very_high {
            RiskLevel::High
        } else {
            RiskLevel::VeryHigh
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_level_boundaries() {
        assert_eq!(RiskLevel::from_score(24.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(25.0), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(54.0), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(55.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(77.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(78.0), RiskLevel::VeryHigh);
    }

    #[test]
    fn test_display_names() {
        let names: Vec<String> = RiskLevel::iter().map(|l| l.to_string()).collect();
        assert_eq!(names, vec!["Low", "Moderate", "High", "Very High"]);
    }
}
