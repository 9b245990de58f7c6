//! Static lookup tables for the advisory-only rule groups.
//!
//! Each table is searched for its key; a key with no row contributes nothing.

use super::super::domain::{GameType, GripStyle, HandSize, KeyboardLayout};

pub(crate) const MOUSE_FIT: [((HandSize, GripStyle), &str); 9] = [
    (
        (HandSize::Small, GripStyle::Fingertip),
        "Small hand + fingertip grip: consider a smaller, lighter mouse (40-70g) with a shape that allows for easy fingertip control.",
    ),
    (
        (HandSize::Medium, GripStyle::Fingertip),
        "Medium hand + fingertip grip: consider a lighter medium-sized mouse (50-80g) with a shape that allows for easy fingertip control.",
    ),
    (
        (HandSize::Large, GripStyle::Fingertip),
        "Large hand + fingertip grip: consider a medium-sized mouse (60-90g) with a shape that allows for easy fingertip control.",
    ),
    (
        (HandSize::Small, GripStyle::Claw),
        "Small hand + claw grip: consider a smaller mouse (40-70g) with a shape that supports the arch of your hand and allows for easy claw grip.",
    ),
    (
        (HandSize::Medium, GripStyle::Claw),
        "Medium hand + claw grip: consider a medium-sized mouse (50-80g) with a shape that supports the arch of your hand and allows for easy claw grip.",
    ),
    (
        (HandSize::Large, GripStyle::Claw),
        "Large hand + claw grip: consider a medium to larger mouse (60-100g) with a shape that supports the arch of your hand and allows for easy claw grip.",
    ),
    (
        (HandSize::Small, GripStyle::Palm),
        "Small hand + palm grip: consider a smaller mouse (40-70g) with a shape that allows your palm to rest comfortably on the rear of the mouse.",
    ),
    (
        (HandSize::Medium, GripStyle::Palm),
        "Medium hand + palm grip: consider a medium-sized mouse (50-80g) with a shape that allows your palm to rest comfortably on the rear of the mouse.",
    ),
    (
        (HandSize::Large, GripStyle::Palm),
        "Large hand + palm grip: consider a medium to larger mouse (60-100g) with a shape that allows your palm to rest comfortably on the rear of the mouse.",
    ),
];

pub(crate) const LAYOUT_REACH: [((KeyboardLayout, HandSize), &str); 2] = [
    (
        (KeyboardLayout::Wasd, HandSize::Large),
        "Large hands: consider trying ESDF for more key reach and centralized hand position.",
    ),
    (
        (KeyboardLayout::Esdf, HandSize::Small),
        "Small hands: consider trying WASD for more compact key reach and centralized hand position.",
    ),
];

pub(crate) const GAME_FOCUS: [(GameType, &str); 5] = [
    (
        GameType::Fps,
        "FPS focus: prioritize consistent sensitivity and a comfortable mouse grip to reduce micro-adjustment strain.",
    ),
    (
        GameType::Moba,
        "MOBA focus: consider a mouse with good button placement for quick access to abilities and macros.",
    ),
    (
        GameType::Rpg,
        "RPG focus: consider a mouse with good comfort for longer sessions and customizable buttons for inventory management.",
    ),
    (
        GameType::Mmorpg,
        "MMORPG focus: consider a mouse with good comfort for longer sessions and customizable buttons for inventory management and macros.",
    ),
    (
        GameType::Other,
        "General gaming: focus on overall comfort, proper breaks, and ergonomic posture to reduce strain across various game types.",
    ),
];

pub(crate) fn lookup<K: PartialEq + Copy>(
    table: &[(K, &'static str)],
    key: K,
) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, message)| *message)
}
