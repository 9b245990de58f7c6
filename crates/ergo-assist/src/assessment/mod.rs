//! Ergonomic risk assessment: the validated profile, the rule evaluator and
//! the report view handed to presenters.

pub mod domain;
mod evaluation;
pub mod report;

#[cfg(test)]
mod tests;

pub use domain::{
    AnswerChoice, ErgonomicProfile, GameType, GripStyle, HandSize, KeyboardLayout, SpaceIssue,
    MAX_MOUSE_WEIGHT_GRAMS, MIN_MOUSE_WEIGHT_GRAMS, MIN_SESSION_MINUTES,
};
pub use evaluation::{
    evaluate, AssessmentOutcome, PainFlags, Recommendations, RiskContribution, RiskLevel,
    RuleGroup,
};
pub use report::AssessmentReport;
