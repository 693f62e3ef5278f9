//! The encounter action catalog.
//!
//! Each encounter category holds an ordered list of named actions. An action
//! names the stat its actor rolls and how it resolves: against an opponent
//! rolling a second stat, or against a fixed DC. The built-in catalog is
//! constructed once, validated on first use, and never mutated.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tk_core::CoreStat;

use crate::error::{MechError, MechResult};

/// A category of encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncounterType {
    /// Fighting.
    Combat,
    /// Talking, persuading, lying.
    Social,
    /// Chases, stealth, athletics.
    Physical,
    /// Hacking, research, medicine.
    Mental,
    /// General checks while travelling or searching.
    Exploration,
    /// Anything else.
    Other,
}

impl EncounterType {
    /// All categories in catalog order.
    pub const ALL: [EncounterType; 6] = [
        Self::Combat,
        Self::Social,
        Self::Physical,
        Self::Mental,
        Self::Exploration,
        Self::Other,
    ];

    /// Parse a category name, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.to_string().eq_ignore_ascii_case(s.trim()))
    }
}

impl std::fmt::Display for EncounterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Combat => write!(f, "Combat"),
            Self::Social => write!(f, "Social"),
            Self::Physical => write!(f, "Physical"),
            Self::Mental => write!(f, "Mental"),
            Self::Exploration => write!(f, "Exploration"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// How an action is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionMode {
    /// Contested: the opponent rolls `secondary_stat`.
    Opposed {
        /// The stat the opponent rolls.
        secondary_stat: CoreStat,
    },
    /// Graded against a fixed Difficulty Class.
    VsDc,
}

/// A named, pre-configured resolution recipe.
///
/// On the wire an action is `{name, primaryStat, secondaryStat?, isVsDC?}`.
/// Exactly one of `secondaryStat` and `isVsDC: true` must be present;
/// anything else fails to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawEncounterAction", into = "RawEncounterAction")]
pub struct EncounterAction {
    /// Display name, unique within its category.
    pub name: String,
    /// The stat the acting character rolls.
    pub primary_stat: CoreStat,
    /// Opposed or vs-DC.
    pub mode: ActionMode,
}

impl EncounterAction {
    /// An opposed action.
    pub fn opposed(name: &str, primary_stat: CoreStat, secondary_stat: CoreStat) -> Self {
        Self {
            name: name.to_string(),
            primary_stat,
            mode: ActionMode::Opposed { secondary_stat },
        }
    }

    /// A fixed-target action.
    pub fn vs_dc(name: &str, primary_stat: CoreStat) -> Self {
        Self {
            name: name.to_string(),
            primary_stat,
            mode: ActionMode::VsDc,
        }
    }

    /// The opponent's stat, for opposed actions.
    pub fn secondary_stat(&self) -> Option<CoreStat> {
        match self.mode {
            ActionMode::Opposed { secondary_stat } => Some(secondary_stat),
            ActionMode::VsDc => None,
        }
    }

    /// True for fixed-target actions.
    pub fn is_vs_dc(&self) -> bool {
        self.mode == ActionMode::VsDc
    }
}

/// Wire form of [`EncounterAction`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEncounterAction {
    name: String,
    primary_stat: CoreStat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    secondary_stat: Option<CoreStat>,
    #[serde(rename = "isVsDC", default, skip_serializing_if = "Option::is_none")]
    is_vs_dc: Option<bool>,
}

impl TryFrom<RawEncounterAction> for EncounterAction {
    type Error = MechError;

    fn try_from(raw: RawEncounterAction) -> Result<Self, Self::Error> {
        let mode = match (raw.secondary_stat, raw.is_vs_dc.unwrap_or(false)) {
            (Some(secondary_stat), false) => ActionMode::Opposed { secondary_stat },
            (None, true) => ActionMode::VsDc,
            (Some(_), true) => {
                return Err(MechError::Configuration(format!(
                    "action \"{}\" is both opposed and vs DC",
                    raw.name
                )));
            }
            (None, false) => {
                return Err(MechError::Configuration(format!(
                    "action \"{}\" is neither opposed nor vs DC",
                    raw.name
                )));
            }
        };
        Ok(Self {
            name: raw.name,
            primary_stat: raw.primary_stat,
            mode,
        })
    }
}

impl From<EncounterAction> for RawEncounterAction {
    fn from(action: EncounterAction) -> Self {
        let (secondary_stat, is_vs_dc) = match action.mode {
            ActionMode::Opposed { secondary_stat } => (Some(secondary_stat), None),
            ActionMode::VsDc => (None, Some(true)),
        };
        Self {
            name: action.name,
            primary_stat: action.primary_stat,
            secondary_stat,
            is_vs_dc,
        }
    }
}

/// An immutable registry of actions per encounter category.
#[derive(Debug, Clone, Default)]
pub struct EncounterCatalog {
    categories: Vec<(EncounterType, Vec<EncounterAction>)>,
}

static BUILTIN: LazyLock<EncounterCatalog> = LazyLock::new(|| {
    let catalog = EncounterCatalog::new(builtin_actions());
    if let Err(e) = catalog.validate() {
        tracing::error!(error = %e, "built-in encounter catalog failed validation");
    }
    catalog
});

impl EncounterCatalog {
    /// Build a catalog from category lists. Call [`EncounterCatalog::validate`]
    /// before trusting a catalog assembled at runtime.
    pub fn new(categories: Vec<(EncounterType, Vec<EncounterAction>)>) -> Self {
        Self { categories }
    }

    /// The built-in catalog.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Actions in `category`, in catalog order.
    pub fn actions(&self, category: EncounterType) -> &[EncounterAction] {
        self.categories
            .iter()
            .find(|(t, _)| *t == category)
            .map(|(_, actions)| actions.as_slice())
            .unwrap_or(&[])
    }

    /// Actions for an optional category. No category means no actions.
    pub fn actions_for(&self, category: Option<EncounterType>) -> &[EncounterAction] {
        match category {
            Some(c) => self.actions(c),
            None => &[],
        }
    }

    /// Actions for a category given by name. Unknown names yield no actions.
    pub fn actions_for_name(&self, category: &str) -> &[EncounterAction] {
        self.actions_for(EncounterType::parse(category))
    }

    /// Find an action by name (case-insensitive) within a category.
    pub fn find_action(&self, category: EncounterType, name: &str) -> MechResult<&EncounterAction> {
        self.actions(category)
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| MechError::UnknownAction {
                encounter: category.to_string(),
                action: name.to_string(),
            })
    }

    /// Iterate over categories and their actions.
    pub fn categories(&self) -> impl Iterator<Item = (EncounterType, &[EncounterAction])> {
        self.categories.iter().map(|(t, a)| (*t, a.as_slice()))
    }

    /// Check catalog invariants.
    ///
    /// Every category appears once, every action has a non-empty name that
    /// is unique within its category, and every action survives its wire
    /// form with exactly one resolution mode.
    pub fn validate(&self) -> MechResult<()> {
        let mut seen_types = Vec::new();
        for (category, actions) in &self.categories {
            if seen_types.contains(category) {
                return Err(MechError::Configuration(format!(
                    "category {category} listed twice"
                )));
            }
            seen_types.push(*category);

            let mut names: Vec<String> = Vec::new();
            for action in actions {
                let key = action.name.trim().to_lowercase();
                if key.is_empty() {
                    return Err(MechError::Configuration(format!(
                        "unnamed action in {category}"
                    )));
                }
                if names.contains(&key) {
                    return Err(MechError::Configuration(format!(
                        "duplicate action \"{}\" in {category}",
                        action.name
                    )));
                }
                names.push(key);
                EncounterAction::try_from(RawEncounterAction::from(action.clone()))?;
            }
        }
        Ok(())
    }
}

/// Actions for `category` in the built-in catalog; empty for `None`.
pub fn actions_for(category: Option<EncounterType>) -> &'static [EncounterAction] {
    EncounterCatalog::builtin().actions_for(category)
}

fn builtin_actions() -> Vec<(EncounterType, Vec<EncounterAction>)> {
    use CoreStat::*;
    use EncounterAction as A;

    vec![
        (
            EncounterType::Combat,
            vec![
                A::opposed("Melee Attack", Strength, Agility),
                A::opposed("Ranged Attack", Agility, Agility),
                A::opposed("Unarmed Attack", Strength, Agility),
                A::vs_dc("Strength Save", Strength),
                A::vs_dc("Agility Save", Agility),
                A::vs_dc("Endurance Save", Endurance),
            ],
        ),
        (
            EncounterType::Social,
            vec![
                A::opposed("Persuade", Charisma, Intelligence),
                A::opposed("Deceive/Bluff", Charisma, Perception),
                A::opposed("Detect Lie", Perception, Charisma),
                A::opposed("Intimidate", Charisma, Endurance),
                A::opposed("Negotiate/Barter", Charisma, Intelligence),
                A::opposed("Social Media Post", Charisma, Perception),
            ],
        ),
        (
            EncounterType::Physical,
            vec![
                A::opposed("Chase/Evade", Agility, Agility),
                A::opposed("Spot/Observe (Opposed)", Perception, Agility),
                A::opposed("Sneak/Shadow", Agility, Perception),
                A::vs_dc("Drive/Pilot", Agility),
                A::vs_dc("Endure Stress", Endurance),
                A::vs_dc("Withstand Fatigue", Endurance),
                A::vs_dc("Climb", Strength),
                A::vs_dc("Jump", Strength),
                A::vs_dc("Swim", Strength),
            ],
        ),
        (
            EncounterType::Mental,
            vec![
                A::opposed("Hack/Bypass (Opposed)", Intelligence, Intelligence),
                A::opposed("Research/Analyze (Opposed)", Intelligence, Intelligence),
                A::opposed("First Aid/Medical", Intelligence, Endurance),
                A::vs_dc("Hack/Bypass (vs DC)", Intelligence),
                A::vs_dc("Research/Analyze (vs DC)", Intelligence),
                A::vs_dc("Improvise/Adapt", Intelligence),
            ],
        ),
        (
            EncounterType::Exploration,
            vec![
                A::vs_dc("Perception Check", Perception),
                A::vs_dc("Survival Check", Endurance),
                A::vs_dc("Investigation Check", Intelligence),
                A::vs_dc("Navigation Check", Intelligence),
            ],
        ),
        (
            EncounterType::Other,
            vec![
                A::opposed("Luck Test (Opposed)", Luck, Luck),
                A::vs_dc("Luck Test (vs DC 50%)", Luck),
            ],
        ),
    ]
}
