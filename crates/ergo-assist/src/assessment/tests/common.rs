use crate::assessment::domain::{
    ErgonomicProfile, GameType, GripStyle, HandSize, KeyboardLayout, SpaceIssue,
};

/// Profile that trips no risk rule: short sessions, no discomfort, a mouse in
/// the 61-70g band and no space or layout advice.
pub(super) fn quiet_profile() -> ErgonomicProfile {
    ErgonomicProfile {
        hand_size: HandSize::Medium,
        grip_style: GripStyle::Palm,
        session_duration: 45,
        discomfort_level: "none".to_string(),
        keyboard_layout: KeyboardLayout::Other,
        mouse_weight: Some(65),
        space_issue: SpaceIssue::No,
        game_type: GameType::Other,
    }
}

pub(super) fn strained_profile() -> ErgonomicProfile {
    ErgonomicProfile {
        hand_size: HandSize::Large,
        grip_style: GripStyle::Claw,
        session_duration: 200,
        discomfort_level: "wrist and forearm pain".to_string(),
        keyboard_layout: KeyboardLayout::Wasd,
        mouse_weight: Some(100),
        space_issue: SpaceIssue::Yes,
        game_type: GameType::Fps,
    }
}

pub(super) fn with_weight(mouse_weight: Option<u16>) -> ErgonomicProfile {
    ErgonomicProfile {
        mouse_weight,
        ..quiet_profile()
    }
}

pub(super) fn with_discomfort(text: &str) -> ErgonomicProfile {
    ErgonomicProfile {
        discomfort_level: text.to_string(),
        ..quiet_profile()
    }
}
