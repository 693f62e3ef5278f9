use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};

/// The value a stat reads as when it is missing or not a number.
pub const DEFAULT_STAT_VALUE: i32 = 10;

/// One of the seven core attributes every character is rated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CoreStat {
    /// Raw physical power.
    Strength,
    /// Awareness of surroundings.
    Perception,
    /// Stamina and toughness.
    Endurance,
    /// Force of personality.
    Charisma,
    /// Reasoning and knowledge.
    Intelligence,
    /// Speed and coordination.
    Agility,
    /// Fortune.
    Luck,
}

impl CoreStat {
    /// All core stats in sheet order.
    pub const ALL: [CoreStat; 7] = [
        Self::Strength,
        Self::Perception,
        Self::Endurance,
        Self::Charisma,
        Self::Intelligence,
        Self::Agility,
        Self::Luck,
    ];

    /// Parse a stat from its full name or three-letter abbreviation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "strength" | "str" => Some(Self::Strength),
            "perception" | "per" => Some(Self::Perception),
            "endurance" | "end" => Some(Self::Endurance),
            "charisma" | "cha" => Some(Self::Charisma),
            "intelligence" | "int" => Some(Self::Intelligence),
            "agility" | "agi" => Some(Self::Agility),
            "luck" | "lck" => Some(Self::Luck),
            _ => None,
        }
    }

    /// Like [`CoreStat::parse`], but reports the unrecognized name.
    pub fn try_parse(s: &str) -> CoreResult<Self> {
        Self::parse(s).ok_or_else(|| CoreError::UnknownStat(s.to_string()))
    }
}

impl fmt::Display for CoreStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strength => write!(f, "Strength"),
            Self::Perception => write!(f, "Perception"),
            Self::Endurance => write!(f, "Endurance"),
            Self::Charisma => write!(f, "Charisma"),
            Self::Intelligence => write!(f, "Intelligence"),
            Self::Agility => write!(f, "Agility"),
            Self::Luck => write!(f, "Luck"),
        }
    }
}

/// What sort of participant a character record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CharacterKind {
    /// A player character.
    #[default]
    Player,
    /// A non-player character.
    #[serde(rename = "NPC")]
    Npc,
    /// A hostile creature.
    Enemy,
    /// A situation that rolls like a character (a storm, a trap).
    Event,
}

impl CharacterKind {
    /// Parse a kind, ignoring case.
    pub fn parse(s: &str) -> CoreResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "player" | "pc" => Ok(Self::Player),
            "npc" => Ok(Self::Npc),
            "enemy" => Ok(Self::Enemy),
            "event" => Ok(Self::Event),
            _ => Err(CoreError::UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for CharacterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => write!(f, "Player"),
            Self::Npc => write!(f, "NPC"),
            Self::Enemy => write!(f, "Enemy"),
            Self::Event => write!(f, "Event"),
        }
    }
}

/// A character's core attribute scores.
///
/// Entries may be missing. Reads of a missing or zero stat fall back to
/// [`DEFAULT_STAT_VALUE`], so sparse blocks (events, minor NPCs) still roll.
/// Deserialization is lenient: unknown stat names, non-numeric values and
/// numbers outside `i32` are dropped, and fractional values are floored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StatBlock(BTreeMap<CoreStat, i32>);

impl StatBlock {
    /// Create an empty stat block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a block with every core stat set to `value`.
    pub fn uniform(value: i32) -> Self {
        Self(CoreStat::ALL.iter().map(|s| (*s, value)).collect())
    }

    /// Builder-style setter.
    pub fn with(mut self, stat: CoreStat, value: i32) -> Self {
        self.0.insert(stat, value);
        self
    }

    /// Set a stat value.
    pub fn set(&mut self, stat: CoreStat, value: i32) {
        self.0.insert(stat, value);
    }

    /// The stored value, if present.
    pub fn get(&self, stat: CoreStat) -> Option<i32> {
        self.0.get(&stat).copied()
    }

    /// The value a check reads: the stored value, or [`DEFAULT_STAT_VALUE`]
    /// when it is absent or zero.
    pub fn value_or_default(&self, stat: CoreStat) -> i32 {
        match self.get(stat) {
            None | Some(0) => DEFAULT_STAT_VALUE,
            Some(v) => v,
        }
    }

    /// Iterate over present stats in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (CoreStat, i32)> + '_ {
        self.0.iter().map(|(s, v)| (*s, *v))
    }

    /// Number of stats present.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no stats are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn from_raw(raw: BTreeMap<String, serde_json::Value>) -> Self {
        let mut block = Self::new();
        for (key, value) in raw {
            let Some(stat) = CoreStat::parse(&key) else {
                tracing::debug!(stat = %key, "ignoring unknown stat");
                continue;
            };
            match numeric_stat(&value) {
                Some(v) => block.set(stat, v),
                None => tracing::debug!(%stat, %value, "ignoring non-numeric stat value"),
            }
        }
        block
    }
}

fn numeric_stat(value: &serde_json::Value) -> Option<i32> {
    let serde_json::Value::Number(n) = value else {
        return None;
    };
    if let Some(i) = n.as_i64() {
        return i32::try_from(i).ok();
    }
    n.as_f64()
        .map(f64::floor)
        .filter(|f| (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(f))
        .map(|f| f as i32)
}

impl<'de> Deserialize<'de> for StatBlock {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: Option<BTreeMap<String, serde_json::Value>> = Option::deserialize(deserializer)?;
        Ok(raw.map(Self::from_raw).unwrap_or_default())
    }
}

/// A character record as kept by the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Participant kind.
    #[serde(rename = "type", default)]
    pub kind: CharacterKind,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Core attribute scores.
    #[serde(default)]
    pub stats: StatBlock,
    /// Current health.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<i32>,
    /// Current mana.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mana: Option<i32>,
    /// Named skills.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
    /// Named abilities.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub abilities: Vec<String>,
    /// Carried items.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inventory: Vec<String>,
    /// Player notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// NPC role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Faction or group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
}

impl Character {
    /// Create a character with a fresh id and every stat at the default.
    pub fn new(name: impl Into<String>, kind: CharacterKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            kind,
            description: None,
            stats: StatBlock::uniform(DEFAULT_STAT_VALUE),
            health: Some(10),
            mana: None,
            skills: Vec::new(),
            abilities: Vec::new(),
            inventory: Vec::new(),
            notes: None,
            role: None,
            affiliation: None,
        }
    }

    /// Builder-style stat setter.
    pub fn with_stat(mut self, stat: CoreStat, value: i32) -> Self {
        self.stats.set(stat, value);
        self
    }
}
