use std::fmt::Display;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod meter;
pub mod session;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonaId {
    #[default]
    Zen,
    Angry,
    Condescending,
    Chaotic,
}

impl PersonaId {
    pub const ALL: [PersonaId; 4] = [
        PersonaId::Zen,
        PersonaId::Angry,
        PersonaId::Condescending,
        PersonaId::Chaotic,
    ];

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "zen" => Some(PersonaId::Zen),
            "angry" => Some(PersonaId::Angry),
            "condescending" => Some(PersonaId::Condescending),
            "chaotic" => Some(PersonaId::Chaotic),
            _ => None,
        }
    }

    /// Unknown and missing ids resolve to the default persona.
    pub fn from_id_or_default(value: Option<&str>) -> Self {
        match value {
            Some(v) => Self::from_str(v).unwrap_or_else(|| {
                debug!("Unknown persona {v:?}, using {}", PersonaId::default());
                PersonaId::default()
            }),
            None => PersonaId::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PersonaId::Zen => "zen",
            PersonaId::Angry => "angry",
            PersonaId::Condescending => "condescending",
            PersonaId::Chaotic => "chaotic",
        }
    }
}

impl Display for PersonaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Context {
    Work,
    Relationship,
    Family,
    Money,
    Health,
    General,
}

impl Context {
    pub fn as_str(&self) -> &'static str {
        match self {
            Context::Work => "work",
            Context::Relationship => "relationship",
            Context::Family => "family",
            Context::Money => "money",
            Context::Health => "health",
            Context::General => "general",
        }
    }
}

impl Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Frustrated,
    Confused,
    Sad,
    Anxious,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Frustrated => "frustrated",
            Mood::Confused => "confused",
            Mood::Sad => "sad",
            Mood::Anxious => "anxious",
        }
    }
}

impl Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Uselessness level out of range: {0}")]
pub struct LevelOutOfRange(pub u8);

/// Flavor score, always within `1..=5`. Higher means less helpful.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct UselessnessLevel(u8);

const LABELS: [&str; 5] = [
    "Surprisingly Helpful",
    "Somewhat Helpful",
    "Questionably Useful",
    "Mostly Useless",
    "Completely Useless",
];

impl UselessnessLevel {
    pub const MIN: UselessnessLevel = UselessnessLevel(1);
    pub const MAX: UselessnessLevel = UselessnessLevel(5);

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> &'static str {
        LABELS[usize::from(self.0) - 1]
    }
}

impl TryFrom<u8> for UselessnessLevel {
    type Error = LevelOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=5).contains(&value) {
            Ok(UselessnessLevel(value))
        } else {
            Err(LevelOutOfRange(value))
        }
    }
}

impl From<UselessnessLevel> for u8 {
    fn from(value: UselessnessLevel) -> Self {
        value.0
    }
}

impl Display for UselessnessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.0, self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub text: String,
    pub uselessness_level: UselessnessLevel,
    pub uselessness_label: &'static str,
    pub context: Context,
    pub mood: Mood,
}

impl Reply {
    pub fn new(text: String, level: UselessnessLevel, context: Context, mood: Mood) -> Self {
        Reply {
            text,
            uselessness_level: level,
            uselessness_label: level.label(),
            context,
            mood,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unknown_persona_falls_back_to_zen() {
        assert_eq!(
            PersonaId::from_id_or_default(Some("nonexistent")),
            PersonaId::Zen
        );
        assert_eq!(PersonaId::from_id_or_default(None), PersonaId::Zen);
        assert_eq!(
            PersonaId::from_id_or_default(Some(" Chaotic ")),
            PersonaId::Chaotic
        );
    }

    #[test]
    fn level_range() {
        assert_eq!(UselessnessLevel::try_from(0), Err(LevelOutOfRange(0)));
        assert_eq!(UselessnessLevel::try_from(6), Err(LevelOutOfRange(6)));
        assert_eq!(
            &UselessnessLevel::try_from(9).unwrap_err().to_string(),
            "Uselessness level out of range: 9"
        );
        assert_eq!(UselessnessLevel::try_from(3).unwrap().value(), 3);
    }

    #[test]
    fn labels_ascend_with_severity() {
        assert_eq!(UselessnessLevel::MIN.label(), "Surprisingly Helpful");
        assert_eq!(UselessnessLevel::try_from(3).unwrap().label(), "Questionably Useful");
        assert_eq!(UselessnessLevel::MAX.label(), "Completely Useless");
    }

    #[test]
    fn reply_serializes_camel_case() -> anyhow::Result<()> {
        let reply = Reply::new(
            "Namaste.".into(),
            UselessnessLevel::try_from(2)?,
            Context::Money,
            Mood::Sad,
        );
        let json = serde_json::to_value(&reply)?;
        assert_eq!(
            json,
            serde_json::json!({
                "text": "Namaste.",
                "uselessnessLevel": 2,
                "uselessnessLabel": "Somewhat Helpful",
                "context": "money",
                "mood": "sad"
            })
        );
        Ok(())
    }

    #[test]
    fn level_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<UselessnessLevel>("4").is_ok());
        assert!(serde_json::from_str::<UselessnessLevel>("7").is_err());
    }
}
