pub mod assessment;
pub mod intake;
pub mod recommendations;
pub mod scoring;
pub mod settings;
pub mod utils;

pub use assessment::{assess, RiskResult};
