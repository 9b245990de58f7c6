use super::domain::ErgonomicProfile;
use super::evaluation::{AssessmentOutcome, RiskContribution, RiskLevel};
use chrono::NaiveDate;
use serde::Serialize;

/// Read-only view pairing a profile with its outcome for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub generated_on: NaiveDate,
    pub profile: ErgonomicProfile,
    pub risk_points: u32,
    pub risk_level: RiskLevel,
    pub risk_level_label: &'static str,
    pub risk_summary: &'static str,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pain_areas: Vec<&'static str>,
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contributions: Vec<RiskContribution>,
}

impl AssessmentReport {
    pub fn new(
        profile: &ErgonomicProfile,
        outcome: &AssessmentOutcome,
        generated_on: NaiveDate,
    ) -> Self {
        Self {
            generated_on,
            profile: profile.clone(),
            risk_points: outcome.risk_points,
            risk_level: outcome.risk_level,
            risk_level_label: outcome.risk_level.label(),
            risk_summary: outcome.risk_level.summary(),
            pain_areas: outcome.pain_flags.areas(),
            recommendations: outcome.recommendations.as_slice().to_vec(),
            contributions: outcome.contributions.clone(),
        }
    }
}
