//! Validation of raw answers into an [`ErgonomicProfile`].
//!
//! Both the interactive prompter and the CSV importer funnel through the
//! parsers here, so a profile that reaches evaluation is always in range.

mod import;

pub use import::{ImportError, ProfileImporter};

use crate::assessment::domain::{
    AnswerChoice, ErgonomicProfile, GameType, GripStyle, HandSize, KeyboardLayout, SpaceIssue,
    MAX_MOUSE_WEIGHT_GRAMS, MIN_MOUSE_WEIGHT_GRAMS, MIN_SESSION_MINUTES,
};
use serde::Deserialize;

/// Upper bound accepted for a session length, in minutes.
pub const MAX_SESSION_MINUTES: u32 = 1_000_000_000;

/// Answers accepted as "mouse weight not known".
pub const UNKNOWN_WEIGHT_ANSWERS: &[&str] = &["don't know", "dont know", "unknown"];

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("'{value}' is not a valid {field}; choose from: {allowed}")]
    InvalidChoice {
        field: &'static str,
        value: String,
        allowed: String,
    },
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: u32,
        max: u32,
    },
    #[error("{field} must be a whole number, got '{value}'")]
    NotANumber { field: &'static str, value: String },
    #[error("input closed before {field} was answered")]
    InputClosed { field: &'static str },
    #[error("interrupted while answering {field}")]
    Interrupted { field: &'static str },
    #[error("failed to read answer: {0}")]
    Io(#[from] std::io::Error),
}

pub fn parse_choice<T: AnswerChoice>(field: &'static str, raw: &str) -> Result<T, IntakeError> {
    T::from_answer(raw).ok_or_else(|| IntakeError::InvalidChoice {
        field,
        value: raw.trim().to_string(),
        allowed: T::options().join(", "),
    })
}

pub fn parse_session_minutes(raw: &str) -> Result<u32, IntakeError> {
    let minutes = parse_whole_number("session_duration", raw)?;
    check_range(
        "session_duration",
        minutes,
        MIN_SESSION_MINUTES,
        MAX_SESSION_MINUTES,
    )
}

/// Parses a mouse weight in grams, or `None` for one of
/// [`UNKNOWN_WEIGHT_ANSWERS`].
pub fn parse_mouse_weight(raw: &str) -> Result<Option<u16>, IntakeError> {
    let answer = raw.trim().to_ascii_lowercase();
    if UNKNOWN_WEIGHT_ANSWERS.contains(&answer.as_str()) {
        return Ok(None);
    }

    let grams = parse_whole_number("mouse_weight", &answer)?;
    let grams = check_range(
        "mouse_weight",
        grams,
        u32::from(MIN_MOUSE_WEIGHT_GRAMS),
        u32::from(MAX_MOUSE_WEIGHT_GRAMS),
    )?;
    // Range check keeps the value within u16.
    Ok(Some(grams as u16))
}

fn parse_whole_number(field: &'static str, raw: &str) -> Result<i64, IntakeError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| IntakeError::NotANumber {
            field,
            value: raw.trim().to_string(),
        })
}

fn check_range(field: &'static str, value: i64, min: u32, max: u32) -> Result<u32, IntakeError> {
    if value < i64::from(min) || value > i64::from(max) {
        return Err(IntakeError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(value as u32)
}

/// Unvalidated answers as typed by the user or read from a CSV row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileAnswers {
    pub hand_size: String,
    pub grip_style: String,
    pub session_duration: String,
    #[serde(default)]
    pub discomfort_level: String,
    pub keyboard_layout: String,
    #[serde(default)]
    pub mouse_weight: String,
    pub space_issue: String,
    pub game_type: String,
}

impl ProfileAnswers {
    /// Validates every answer, stopping at the first invalid field.
    ///
    /// A blank mouse weight is read as unknown.
    pub fn into_profile(self) -> Result<ErgonomicProfile, IntakeError> {
        let mouse_weight = if self.mouse_weight.trim().is_empty() {
            None
        } else {
            parse_mouse_weight(&self.mouse_weight)?
        };

        Ok(ErgonomicProfile {
            hand_size: parse_choice::<HandSize>("hand_size", &self.hand_size)?,
            grip_style: parse_choice::<GripStyle>("grip_style", &self.grip_style)?,
            session_duration: parse_session_minutes(&self.session_duration)?,
            discomfort_level: self.discomfort_level.trim().to_string(),
            keyboard_layout: parse_choice::<KeyboardLayout>(
                "keyboard_layout",
                &self.keyboard_layout,
            )?,
            mouse_weight,
            space_issue: parse_choice::<SpaceIssue>("space_issue", &self.space_issue)?,
            game_type: parse_choice::<GameType>("game_type", &self.game_type)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers() -> ProfileAnswers {
        ProfileAnswers {
            hand_size: " Large ".to_string(),
            grip_style: "CLAW".to_string(),
            session_duration: "200".to_string(),
            discomfort_level: " wrist pain ".to_string(),
            keyboard_layout: "wasd".to_string(),
            mouse_weight: "100".to_string(),
            space_issue: "yes".to_string(),
            game_type: "fps".to_string(),
        }
    }

    #[test]
    fn choices_are_trimmed_and_case_insensitive() {
        let profile = answers().into_profile().expect("answers validate");

        assert_eq!(profile.hand_size, HandSize::Large);
        assert_eq!(profile.grip_style, GripStyle::Claw);
        assert_eq!(profile.discomfort_level, "wrist pain");
        assert_eq!(profile.mouse_weight, Some(100));
    }

    #[test]
    fn invalid_choice_lists_allowed_values() {
        let err = parse_choice::<GameType>("game_type", "racing").expect_err("not a game type");

        match err {
            IntakeError::InvalidChoice { field, allowed, .. } => {
                assert_eq!(field, "game_type");
                assert_eq!(allowed, "fps, moba, rpg, mmorpg, other");
            }
            other => panic!("expected invalid choice, got {other:?}"),
        }
    }

    fn assert_labels_round_trip<T: AnswerChoice + PartialEq + std::fmt::Debug>() {
        let options = T::options();
        assert_eq!(options.len(), T::VARIANTS.len());
        for (variant, option) in T::VARIANTS.iter().zip(&options) {
            assert_eq!(variant.label(), *option);
            assert_eq!(T::from_answer(option), Some(*variant));
            assert_eq!(
                T::from_answer(&format!("  {}  ", option.to_uppercase())),
                Some(*variant)
            );
        }
    }

    #[test]
    fn every_choice_parses_from_its_label() {
        assert_labels_round_trip::<HandSize>();
        assert_labels_round_trip::<GripStyle>();
        assert_labels_round_trip::<KeyboardLayout>();
        assert_labels_round_trip::<SpaceIssue>();
        assert_labels_round_trip::<GameType>();
        assert_eq!(HandSize::options(), vec!["small", "medium", "large"]);
        assert_eq!(GripStyle::from_answer("grip"), None);
    }

    #[test]
    fn session_minutes_must_be_positive() {
        assert!(matches!(
            parse_session_minutes("0"),
            Err(IntakeError::OutOfRange { value: 0, .. })
        ));
        assert!(matches!(
            parse_session_minutes("-30"),
            Err(IntakeError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_session_minutes("ninety"),
            Err(IntakeError::NotANumber { .. })
        ));
        assert_eq!(parse_session_minutes(" 1 ").expect("valid"), 1);
    }

    #[test]
    fn mouse_weight_accepts_unknown_and_enforces_range() {
        assert_eq!(parse_mouse_weight("Don't know").expect("unknown"), None);
        assert_eq!(parse_mouse_weight("unknown").expect("unknown"), None);
        assert_eq!(parse_mouse_weight("20").expect("lower bound"), Some(20));
        assert_eq!(parse_mouse_weight("200").expect("upper bound"), Some(200));
        assert!(matches!(
            parse_mouse_weight("19"),
            Err(IntakeError::OutOfRange { min: 20, max: 200, .. })
        ));
        assert!(matches!(
            parse_mouse_weight("201"),
            Err(IntakeError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_mouse_weight(""),
            Err(IntakeError::NotANumber { .. })
        ));
    }

    #[test]
    fn blank_weight_in_answers_means_unknown() {
        let profile = ProfileAnswers {
            mouse_weight: "  ".to_string(),
            ..answers()
        }
        .into_profile()
        .expect("answers validate");

        assert_eq!(profile.mouse_weight, None);
    }
}
