use serde::{Deserialize, Serialize};

/// Shortest session, in minutes, intake will accept.
pub const MIN_SESSION_MINUTES: u32 = 1;
/// Lightest mouse weight, in grams, intake treats as realistic.
pub const MIN_MOUSE_WEIGHT_GRAMS: u16 = 20;
/// Heaviest mouse weight, in grams, intake treats as realistic.
pub const MAX_MOUSE_WEIGHT_GRAMS: u16 = 200;

/// Closed answer set for a multiple-choice intake question.
///
/// `label` is the single spelling of each answer; parsing and the option
/// list are both derived from it.
pub trait AnswerChoice: Sized + Copy + 'static {
    /// Every answer, in display order.
    const VARIANTS: &'static [Self];

    fn label(self) -> &'static str;

    /// Lower-case spellings accepted by intake, in display order.
    fn options() -> Vec<&'static str> {
        Self::VARIANTS.iter().map(|variant| variant.label()).collect()
    }

    /// Case-insensitive match after trimming surrounding whitespace.
    fn from_answer(raw: &str) -> Option<Self> {
        let answer = raw.trim();
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.label().eq_ignore_ascii_case(answer))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandSize {
    Small,
    Medium,
    Large,
}

impl AnswerChoice for HandSize {
    const VARIANTS: &'static [Self] = &[HandSize::Small, HandSize::Medium, HandSize::Large];

    fn label(self) -> &'static str {
        match self {
            HandSize::Small => "small",
            HandSize::Medium => "medium",
            HandSize::Large => "large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GripStyle {
    Fingertip,
    Claw,
    Palm,
}

impl AnswerChoice for GripStyle {
    const VARIANTS: &'static [Self] = &[GripStyle::Fingertip, GripStyle::Claw, GripStyle::Palm];

    fn label(self) -> &'static str {
        match self {
            GripStyle::Fingertip => "fingertip",
            GripStyle::Claw => "claw",
            GripStyle::Palm => "palm",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyboardLayout {
    Wasd,
    Esdf,
    Other,
}

impl AnswerChoice for KeyboardLayout {
    const VARIANTS: &'static [Self] = &[
        KeyboardLayout::Wasd,
        KeyboardLayout::Esdf,
        KeyboardLayout::Other,
    ];

    fn label(self) -> &'static str {
        match self {
            KeyboardLayout::Wasd => "wasd",
            KeyboardLayout::Esdf => "esdf",
            KeyboardLayout::Other => "other",
        }
    }
}

/// Whether the desk is too cramped for comfortable mouse movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpaceIssue {
    Yes,
    No,
}

impl AnswerChoice for SpaceIssue {
    const VARIANTS: &'static [Self] = &[SpaceIssue::Yes, SpaceIssue::No];

    fn label(self) -> &'static str {
        match self {
            SpaceIssue::Yes => "yes",
            SpaceIssue::No => "no",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameType {
    Fps,
    Moba,
    Rpg,
    Mmorpg,
    Other,
}

impl AnswerChoice for GameType {
    const VARIANTS: &'static [Self] = &[
        GameType::Fps,
        GameType::Moba,
        GameType::Rpg,
        GameType::Mmorpg,
        GameType::Other,
    ];

    fn label(self) -> &'static str {
        match self {
            GameType::Fps => "fps",
            GameType::Moba => "moba",
            GameType::Rpg => "rpg",
            GameType::Mmorpg => "mmorpg",
            GameType::Other => "other",
        }
    }
}

/// Validated answers for a single assessment session.
///
/// Intake is responsible for enforcing the session and mouse weight ranges
/// before a profile is built; evaluation trusts the values it receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErgonomicProfile {
    pub hand_size: HandSize,
    pub grip_style: GripStyle,
    /// Typical session length in minutes.
    pub session_duration: u32,
    /// Free-text description of any discomfort, e.g. "wrist pain" or "none".
    pub discomfort_level: String,
    pub keyboard_layout: KeyboardLayout,
    /// Mouse weight in grams, `None` when the user does not know it.
    pub mouse_weight: Option<u16>,
    pub space_issue: SpaceIssue,
    pub game_type: GameType,
}
