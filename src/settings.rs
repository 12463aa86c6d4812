use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

static SETTINGS: OnceLock<Settings> = OnceLock::new();

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub scoring: Scoring,
    pub intake: Intake,
    pub recommendations: Recommendations,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scoring {
    pub base_score: f64,
    pub min_score: f64,
    pub max_score: f64,
    pub max_factors: usize,
    pub levels: LevelThresholds,
    pub unspecified: UnspecifiedFactor,
    pub confidence: Confidence,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelThresholds {
    pub moderate: f64,
    pub high: f64,
    pub very_high: f64,
}

/// Randomized "Other Unspecified Factors" term. A probability of 0 disables it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnspecifiedFactor {
    pub probability: f64,
    pub min_impact: u8,
    pub max_impact: u8,
    pub score_weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Confidence {
    pub base: f64,
    pub spread: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intake {
    pub overall_score: Range,
    pub mother_age: Range,
    pub gestational_weeks: Range,
    pub birth_weight_grams: Range,
    pub apgar: Range,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendations {
    pub api_base: String,
    pub model: String,
    pub api_key_var: String,
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scoring: Scoring {
                base_score: 5.0,
                min_score: 3.0,
                max_score: 97.0,
                max_factors: 5,
                levels: LevelThresholds {
                    moderate: 25.0,
                    high: 55.0,
                    very_high: 78.0,
                },
                unspecified: UnspecifiedFactor {
                    probability: 0.2,
                    min_impact: 1,
                    max_impact: 5,
                    score_weight: 1.2,
                },
                confidence: Confidence {
                    base: 0.65,
                    spread: 0.30,
                },
            },
            intake: Intake {
                overall_score: Range::new(0.0, 10.0),
                mother_age: Range::new(15.0, 55.0),
                gestational_weeks: Range::new(20.0, 45.0),
                birth_weight_grams: Range::new(500.0, 6000.0),
                apgar: Range::new(0.0, 10.0),
            },
            recommendations: Recommendations {
                api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
                model: "gemini-2.5-flash-preview-04-17".to_string(),
                api_key_var: "API_KEY".to_string(),
                temperature: 0.7,
                top_p: 0.9,
                top_k: 40,
            },
        }
    }
}

impl Settings {
    pub fn load() -> &'static Settings {
        SETTINGS.get_or_init(Self::load_from_files)
    }

    fn load_from_files() -> Settings {
        let default_path = Path::new("settings.default.ron");
        let override_path = Path::new("settings.ron");

        let mut settings = if default_path.exists() {
            fs::read_to_string(default_path)
                .ok()
                .and_then(|content| ron::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Settings::default()
        };

        if override_path.exists() {
            if let Ok(content) = fs::read_to_string(override_path) {
                match ron::from_str::<Settings>(&content) {
                    Ok(overrides) => settings = overrides,
                    Err(e) => tracing::warn!("ignoring settings.ron: {e}"),
                }
            }
        }

        settings
    }
}

pub fn settings() -> &'static Settings {
    Settings::load()
}
