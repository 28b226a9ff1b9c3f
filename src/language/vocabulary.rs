//! The controlled vocabulary of the practice notation: strokes, intensities,
//! equipment, and the kinds of set a header can introduce.
//!
//! These tables are the only place raw text gets turned into the enums
//! below. The parser uses them to validate and the formatter uses them to
//! render, so the two always agree on spelling.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stroke {
    #[serde(rename = "free")]
    Free,
    #[serde(rename = "back")]
    Back,
    #[serde(rename = "breast")]
    Breast,
    #[serde(rename = "fly")]
    Fly,
    #[serde(rename = "IM")]
    Medley,
    #[serde(rename = "choice")]
    Choice,
    #[serde(rename = "drill")]
    Drill,
    #[serde(rename = "kick")]
    Kick,
}

impl Stroke {
    pub const ALL: [Stroke; 8] = [
        Stroke::Free,
        Stroke::Back,
        Stroke::Breast,
        Stroke::Fly,
        Stroke::Medley,
        Stroke::Choice,
        Stroke::Drill,
        Stroke::Kick,
    ];

    /// The canonical token, as stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stroke::Free => "free",
            Stroke::Back => "back",
            Stroke::Breast => "breast",
            Stroke::Fly => "fly",
            Stroke::Medley => "IM",
            Stroke::Choice => "choice",
            Stroke::Drill => "drill",
            Stroke::Kick => "kick",
        }
    }

    /// The spelling used when writing a stroke back out as notation.
    /// Everything is capitalized except IM which is an acronym and stays
    /// upper case.
    pub fn display_name(&self) -> &'static str {
        match self {
            Stroke::Free => "Free",
            Stroke::Back => "Back",
            Stroke::Breast => "Breast",
            Stroke::Fly => "Fly",
            Stroke::Medley => "IM",
            Stroke::Choice => "Choice",
            Stroke::Drill => "Drill",
            Stroke::Kick => "Kick",
        }
    }
}

impl fmt::Display for Stroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Easy,
    Moderate,
    Fast,
    Sprint,
    RacePace,
}

impl Intensity {
    pub const ALL: [Intensity; 5] = [
        Intensity::Easy,
        Intensity::Moderate,
        Intensity::Fast,
        Intensity::Sprint,
        Intensity::RacePace,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Easy => "easy",
            Intensity::Moderate => "moderate",
            Intensity::Fast => "fast",
            Intensity::Sprint => "sprint",
            Intensity::RacePace => "race_pace",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    Fins,
    Paddles,
    Snorkel,
    Kickboard,
    PullBuoy,
    Band,
}

impl Equipment {
    pub const ALL: [Equipment; 6] = [
        Equipment::Fins,
        Equipment::Paddles,
        Equipment::Snorkel,
        Equipment::Kickboard,
        Equipment::PullBuoy,
        Equipment::Band,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Equipment::Fins => "fins",
            Equipment::Paddles => "paddles",
            Equipment::Snorkel => "snorkel",
            Equipment::Kickboard => "kickboard",
            Equipment::PullBuoy => "pull_buoy",
            Equipment::Band => "band",
        }
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetKind {
    Warmup,
    PreSet,
    MainSet,
    TestSet,
    Cooldown,
    Dryland,
}

impl SetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SetKind::Warmup => "warmup",
            SetKind::PreSet => "pre_set",
            SetKind::MainSet => "main_set",
            SetKind::TestSet => "test_set",
            SetKind::Cooldown => "cooldown",
            SetKind::Dryland => "dryland",
        }
    }
}

impl Default for SetKind {
    fn default() -> Self {
        SetKind::MainSet
    }
}

impl fmt::Display for SetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static STROKES: &[(&str, Stroke)] = &[
    ("free", Stroke::Free),
    ("freestyle", Stroke::Free),
    ("fr", Stroke::Free),
    ("fs", Stroke::Free),
    ("back", Stroke::Back),
    ("backstroke", Stroke::Back),
    ("bk", Stroke::Back),
    ("breast", Stroke::Breast),
    ("breaststroke", Stroke::Breast),
    ("br", Stroke::Breast),
    ("fly", Stroke::Fly),
    ("butterfly", Stroke::Fly),
    ("fl", Stroke::Fly),
    ("im", Stroke::Medley),
    ("medley", Stroke::Medley),
    ("individual medley", Stroke::Medley),
    ("choice", Stroke::Choice),
    ("ch", Stroke::Choice),
    ("drill", Stroke::Drill),
    ("kick", Stroke::Kick),
];

// Order matters: the first keyword found anywhere in the set's name wins.
static SET_KEYWORDS: &[(&str, SetKind)] = &[
    ("warmup", SetKind::Warmup),
    ("warm up", SetKind::Warmup),
    ("pre-set", SetKind::PreSet),
    ("preset", SetKind::PreSet),
    ("test", SetKind::TestSet),
    ("cooldown", SetKind::Cooldown),
    ("cool down", SetKind::Cooldown),
    ("dryland", SetKind::Dryland),
    ("dry land", SetKind::Dryland),
];

/// Look up a stroke by any of its accepted spellings, ignoring case and
/// surrounding whitespace.
pub fn normalize_stroke(raw: &str) -> Option<Stroke> {
    let key = raw
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    STROKES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, stroke)| *stroke)
}

/// Look up an intensity. Runs of whitespace become underscores first, so
/// that coaches can write "race pace" for race_pace.
pub fn normalize_intensity(raw: &str) -> Option<Intensity> {
    let key = raw
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase();

    Intensity::ALL
        .into_iter()
        .find(|intensity| intensity.as_str() == key)
}

pub fn normalize_equipment(raw: &str) -> Option<Equipment> {
    let key = raw
        .trim()
        .to_lowercase();

    Equipment::ALL
        .into_iter()
        .find(|equipment| equipment.as_str() == key)
}

/// Work out what kind of set a header introduces from its name. Anything
/// not recognized is assumed to be main set work.
pub fn infer_set_kind(name: &str) -> SetKind {
    let name = name.to_lowercase();

    SET_KEYWORDS
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
        .map(|(_, kind)| *kind)
        .unwrap_or_default()
}

/// Comma separated list of canonical tokens, used in hints.
pub(crate) fn listing<T: fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
