pub mod factors;
pub mod inputs;
mod level;
pub(crate) mod random;
mod scorer;

pub use factors::{impact, rank, ContributingFactor};
pub use inputs::{
    ClinicalRecord, GeneticMarker, MarkerPresence, MaternalHealth, Parent, ParentalInputs,
    YesNoUnknown,
};
pub use level::RiskLevel;
pub use random::{RandomSource, SystemRandom};
pub use scorer::{summary, RiskAssessment, RiskScorer};
