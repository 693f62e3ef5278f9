//! Likelihood levels.

use serde::{Deserialize, Serialize};

/// How likely the player thinks the answer is "Yes".
///
/// Ordered by increasing chance of Yes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Likelihood {
    /// Never yes.
    #[serde(rename = "Impossible")]
    Impossible,
    /// Yes on 5 or less.
    #[serde(rename = "No way")]
    NoWay,
    /// Yes on 20 or less.
    #[serde(rename = "Very unlikely")]
    VeryUnlikely,
    /// Yes on 40 or less.
    #[serde(rename = "Unlikely")]
    Unlikely,
    /// Yes on 70 or less.
    #[serde(rename = "50/50")]
    FiftyFifty,
    /// Yes on 80 or less.
    #[serde(rename = "Likely")]
    Likely,
    /// Yes on 90 or less.
    #[serde(rename = "Very likely")]
    VeryLikely,
    /// Always yes.
    #[serde(rename = "Certain")]
    Certain,
    /// Always an emphatic yes.
    #[serde(rename = "Yes! (special)")]
    YesSpecial,
}

impl Likelihood {
    /// The neutral level substituted for unrecognized input.
    pub const NEUTRAL: Likelihood = Likelihood::FiftyFifty;

    /// All likelihood values in order from least to most likely.
    pub fn all() -> &'static [Self] {
        &[
            Self::Impossible,
            Self::NoWay,
            Self::VeryUnlikely,
            Self::Unlikely,
            Self::FiftyFifty,
            Self::Likely,
            Self::VeryLikely,
            Self::Certain,
            Self::YesSpecial,
        ]
    }

    /// Parse a likelihood label, ignoring case, dashes, and underscores.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.to_lowercase().replace(['-', '_'], " ");
        let words: Vec<&str> = normalized.split_whitespace().collect();
        match words.join(" ").as_str() {
            "impossible" => Some(Self::Impossible),
            "no way" | "noway" => Some(Self::NoWay),
            "very unlikely" => Some(Self::VeryUnlikely),
            "unlikely" => Some(Self::Unlikely),
            "50/50" | "5050" | "fifty fifty" | "even" => Some(Self::FiftyFifty),
            "likely" => Some(Self::Likely),
            "very likely" => Some(Self::VeryLikely),
            "certain" => Some(Self::Certain),
            "yes! (special)" | "yes special" | "special" => Some(Self::YesSpecial),
            _ => None,
        }
    }

    /// The display-only "Yes" threshold for this level.
    ///
    /// This is a coarse figure shown to players. The graded answer always
    /// comes from the band table, which may place "Yes, but..." above it.
    pub fn yes_threshold(self) -> u32 {
        match self {
            Self::Impossible => 0,
            Self::NoWay => 5,
            Self::VeryUnlikely => 15,
            Self::Unlikely => 35,
            Self::FiftyFifty => 65,
            Self::Likely => 75,
            Self::VeryLikely => 85,
            Self::Certain => 95,
            Self::YesSpecial => 100,
        }
    }
}

impl std::fmt::Display for Likelihood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Impossible => write!(f, "Impossible"),
            Self::NoWay => write!(f, "No way"),
            Self::VeryUnlikely => write!(f, "Very unlikely"),
            Self::Unlikely => write!(f, "Unlikely"),
            Self::FiftyFifty => write!(f, "50/50"),
            Self::Likely => write!(f, "Likely"),
            Self::VeryLikely => write!(f, "Very likely"),
            Self::Certain => write!(f, "Certain"),
            Self::YesSpecial => write!(f, "Yes! (special)"),
        }
    }
}
