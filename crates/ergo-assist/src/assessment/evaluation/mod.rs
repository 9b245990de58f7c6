mod level;
mod pain;
mod recommendations;
pub(crate) mod rules;
pub(crate) mod tables;

pub use level::RiskLevel;
pub use pain::PainFlags;
pub use recommendations::Recommendations;

use super::domain::ErgonomicProfile;
use serde::{Deserialize, Serialize};

/// Rule groups that can add risk points, used to label the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleGroup {
    SessionDuration,
    WristPain,
    FingerPain,
    ForearmPain,
    MouseWeight,
}

impl RuleGroup {
    pub const fn label(self) -> &'static str {
        match self {
            RuleGroup::SessionDuration => "session duration",
            RuleGroup::WristPain => "wrist pain",
            RuleGroup::FingerPain => "finger pain",
            RuleGroup::ForearmPain => "forearm pain",
            RuleGroup::MouseWeight => "mouse weight",
        }
    }
}

/// Discrete contribution to the risk total, kept for transparent audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskContribution {
    pub rule: RuleGroup,
    pub points: u32,
    pub notes: String,
}

/// Result of a single evaluation pass. Built fresh on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentOutcome {
    pub risk_points: u32,
    pub risk_level: RiskLevel,
    pub pain_flags: PainFlags,
    pub recommendations: Recommendations,
    pub contributions: Vec<RiskContribution>,
}

/// Applies the fixed rule table to a profile.
///
/// Pure and total: the same profile always yields the same outcome, and no
/// state survives between calls.
pub fn evaluate(profile: &ErgonomicProfile) -> AssessmentOutcome {
    let pain_flags = PainFlags::from_description(&profile.discomfort_level);
    let trail = rules::apply_rules(profile, &pain_flags);
    let risk_level = RiskLevel::from_points(trail.risk_points);

    AssessmentOutcome {
        risk_points: trail.risk_points,
        risk_level,
        pain_flags,
        recommendations: trail.recommendations,
        contributions: trail.contributions,
    }
}
