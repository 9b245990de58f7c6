pub mod assessment;
pub mod config;
pub mod error;
pub mod intake;
pub mod telemetry;

pub use assessment::{evaluate, AssessmentOutcome, ErgonomicProfile};
