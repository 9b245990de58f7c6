use super::super::domain::{ErgonomicProfile, GameType, SpaceIssue};
use super::pain::PainFlags;
use super::recommendations::Recommendations;
use super::tables::{lookup, GAME_FOCUS, LAYOUT_REACH, MOUSE_FIT};
use super::{RiskContribution, RuleGroup};

const LONG_SESSION_MINUTES: u32 = 180;
const EXTENDED_SESSION_MINUTES: u32 = 90;
const HEAVY_MOUSE_GRAMS: u16 = 95;
const LIGHTER_MOUSE_GRAMS: u16 = 70;
const LIGHT_MOUSE_GRAMS: u16 = 60;

pub(crate) const LONG_SESSION_BREAKS: &str =
    "Long sessions detected: add structured 5-10 minute breaks every 45-60 minutes.";
pub(crate) const EXTENDED_SESSION_BREAKS: &str =
    "Consider adding regular breaks to your gaming sessions.";
pub(crate) const WRIST_POSTURE: &str = "Wrist discomfort: consider a lighter mouse, neutral wrist position (avoid excessive extension), and wrist support.";
pub(crate) const WRIST_KEYBOARD_ANGLE: &str =
    "Try slight keyboard angle adjustment to keep wrists straight.";
pub(crate) const FINGER_MOUSE_SHAPE: &str = "Finger discomfort: consider a mouse with a more ergonomic shape that supports your hand size better.";
pub(crate) const FINGER_ACTUATION: &str =
    "Finger discomfort: consider lighter actuation force for keys and mouse buttons.";
pub(crate) const FOREARM_DESK_HEIGHT: &str = "Forearm discomfort: ensure your chair and desk height allow for a 90-degree angle at the elbow.";
pub(crate) const HEAVY_MOUSE: &str =
    "Heavy mouse detected: consider switching to a lighter mouse (50-80g) to reduce strain.";
pub(crate) const LIGHTER_MOUSE: &str =
    "Consider switching to a lighter mouse (50-70g) to reduce strain.";
pub(crate) const MOUSE_WEIGHT_OK: &str =
    "Your mouse weight is within a good range for ergonomic gaming.";
pub(crate) const MOUSE_WEIGHT_UNKNOWN: &str =
    "Mouse weight unknown: if you experience discomfort, consider checking your mouse weight.";
pub(crate) const COMPACT_SETUP: &str = "Space constraints: consider a compact keyboard layout (e.g. 60% or 65%) and a larger mousepad to allow for better mouse positioning and reduce shoulder strain.";

/// Points and messages gathered while walking the rule groups.
#[derive(Debug, Default)]
pub(crate) struct RuleTrail {
    pub contributions: Vec<RiskContribution>,
    pub risk_points: u32,
    pub recommendations: Recommendations,
}

impl RuleTrail {
    fn award(&mut self, rule: RuleGroup, points: u32, notes: String) {
        self.risk_points += points;
        self.contributions.push(RiskContribution {
            rule,
            points,
            notes,
        });
    }

    fn recommend(&mut self, message: &str) {
        self.recommendations.add(message);
    }
}

/// Walks every rule group in order. Group order fixes recommendation order;
/// the point total does not depend on it.
pub(crate) fn apply_rules(profile: &ErgonomicProfile, pain: &PainFlags) -> RuleTrail {
    let mut trail = RuleTrail::default();

    session_duration(profile.session_duration, &mut trail);
    pain_areas(pain, &mut trail);
    mouse_fit(profile, &mut trail);
    mouse_weight(profile.mouse_weight, &mut trail);
    layout_reach(profile, &mut trail);
    space_constraint(profile.space_issue, &mut trail);
    game_focus(profile.game_type, &mut trail);

    trail
}

fn session_duration(minutes: u32, trail: &mut RuleTrail) {
    if minutes >= LONG_SESSION_MINUTES {
        trail.award(
            RuleGroup::SessionDuration,
            2,
            format!("{minutes} minute sessions reach the {LONG_SESSION_MINUTES} minute threshold"),
        );
        trail.recommend(LONG_SESSION_BREAKS);
    } else if minutes >= EXTENDED_SESSION_MINUTES {
        trail.award(
            RuleGroup::SessionDuration,
            1,
            format!(
                "{minutes} minute sessions reach the {EXTENDED_SESSION_MINUTES} minute threshold"
            ),
        );
        trail.recommend(EXTENDED_SESSION_BREAKS);
    }
}

fn pain_areas(pain: &PainFlags, trail: &mut RuleTrail) {
    if pain.wrist {
        trail.award(RuleGroup::WristPain, 2, "wrist discomfort reported".to_string());
        trail.recommend(WRIST_POSTURE);
        trail.recommend(WRIST_KEYBOARD_ANGLE);
    }
    if pain.finger {
        trail.award(RuleGroup::FingerPain, 1, "finger discomfort reported".to_string());
        trail.recommend(FINGER_MOUSE_SHAPE);
        trail.recommend(FINGER_ACTUATION);
    }
    if pain.forearm {
        trail.award(
            RuleGroup::ForearmPain,
            1,
            "forearm discomfort reported".to_string(),
        );
        trail.recommend(FOREARM_DESK_HEIGHT);
    }
}

fn mouse_fit(profile: &ErgonomicProfile, trail: &mut RuleTrail) {
    if let Some(message) = lookup(&MOUSE_FIT, (profile.hand_size, profile.grip_style)) {
        trail.recommend(message);
    }
}

fn mouse_weight(weight: Option<u16>, trail: &mut RuleTrail) {
    match weight {
        Some(grams) if grams > HEAVY_MOUSE_GRAMS => {
            trail.award(
                RuleGroup::MouseWeight,
                1,
                format!("{grams}g mouse exceeds {HEAVY_MOUSE_GRAMS}g"),
            );
            trail.recommend(HEAVY_MOUSE);
        }
        Some(grams) if grams > LIGHTER_MOUSE_GRAMS => {
            trail.award(
                RuleGroup::MouseWeight,
                1,
                format!("{grams}g mouse exceeds {LIGHTER_MOUSE_GRAMS}g"),
            );
            trail.recommend(LIGHTER_MOUSE);
        }
        Some(grams) if grams <= LIGHT_MOUSE_GRAMS => trail.recommend(MOUSE_WEIGHT_OK),
        // 61-70g earns neither a point nor a message.
        Some(_) => {}
        None => trail.recommend(MOUSE_WEIGHT_UNKNOWN),
    }
}

fn layout_reach(profile: &ErgonomicProfile, trail: &mut RuleTrail) {
    if let Some(message) = lookup(&LAYOUT_REACH, (profile.keyboard_layout, profile.hand_size)) {
        trail.recommend(message);
    }
}

fn space_constraint(space_issue: SpaceIssue, trail: &mut RuleTrail) {
    if space_issue == SpaceIssue::Yes {
        trail.recommend(COMPACT_SETUP);
    }
}

fn game_focus(game_type: GameType, trail: &mut RuleTrail) {
    if let Some(message) = lookup(&GAME_FOCUS, game_type) {
        trail.recommend(message);
    }
}
