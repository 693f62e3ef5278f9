//! Opposed checks between two characters.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tk_core::Character;

use super::{ComparisonOutcome, RollDetails, determine_outcome, simulate_check};
use crate::encounter::{ActionMode, EncounterAction};
use crate::error::{MechError, MechResult};

/// The result of a contest between an initiator and an opponent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpposedCheckResult {
    /// Outcome from the initiator's side.
    pub outcome: ComparisonOutcome,
    /// Name of the initiating character.
    #[serde(rename = "char1Name")]
    pub initiator_name: String,
    /// The initiator's roll on the action's primary stat.
    #[serde(rename = "char1Details")]
    pub initiator: RollDetails,
    /// Name of the opposing character.
    #[serde(rename = "char2Name")]
    pub opponent_name: String,
    /// The opponent's roll on the action's secondary stat.
    #[serde(rename = "char2Details")]
    pub opponent: RollDetails,
    /// The action that was contested.
    pub encounter_action: EncounterAction,
}

/// Contest `action` between `initiator` and `opponent`.
///
/// The initiator rolls the primary stat and the opponent the secondary stat;
/// the initiator's roll is then graded against the opponent's total. Only the
/// initiator's natural 20 or 1 overrides the comparison. The opponent's
/// natural roll counts only through their total.
///
/// Fails with [`MechError::Configuration`] when `action` has no secondary stat.
pub fn resolve_opposed_check<R: Rng>(
    initiator: &Character,
    opponent: &Character,
    action: &EncounterAction,
    rng: &mut R,
) -> MechResult<OpposedCheckResult> {
    let ActionMode::Opposed { secondary_stat } = action.mode else {
        return Err(MechError::Configuration(format!(
            "action \"{}\" is not configured for opposed checks",
            action.name
        )));
    };

    let initiator_details = simulate_check(initiator, action.primary_stat, rng);
    let opponent_details = simulate_check(opponent, secondary_stat, rng);
    let outcome = determine_outcome(&initiator_details, opponent_details.total);

    tracing::debug!(
        action = %action.name,
        initiator = %initiator.name,
        opponent = %opponent.name,
        %outcome,
        "resolved opposed check"
    );

    Ok(OpposedCheckResult {
        outcome,
        initiator_name: initiator.name.clone(),
        initiator: initiator_details,
        opponent_name: opponent.name.clone(),
        opponent: opponent_details,
        encounter_action: action.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tk_core::{CharacterKind, CoreStat};

    fn pair() -> (Character, Character) {
        let a = Character::new("Kael", CharacterKind::Player).with_stat(CoreStat::Strength, 14);
        let b = Character::new("Goblin", CharacterKind::Enemy).with_stat(CoreStat::Agility, 12);
        (a, b)
    }

    fn melee() -> EncounterAction {
        EncounterAction::opposed("Melee Attack", CoreStat::Strength, CoreStat::Agility)
    }

    #[test]
    fn rejects_action_without_secondary_stat() {
        let (a, b) = pair();
        let action = EncounterAction::vs_dc("Climb", CoreStat::Strength);
        let mut rng = StdRng::seed_from_u64(1);
        let err = resolve_opposed_check(&a, &b, &action, &mut rng).unwrap_err();
        assert!(matches!(err, MechError::Configuration(_)));
        assert!(err.to_string().contains("not configured for opposed checks"));
    }

    #[test]
    fn each_side_rolls_its_own_stat() {
        let (a, b) = pair();
        let mut rng = StdRng::seed_from_u64(2);
        let r = resolve_opposed_check(&a, &b, &melee(), &mut rng).unwrap();
        assert_eq!(r.initiator.stat, CoreStat::Strength);
        assert_eq!(r.initiator.modifier, 2);
        assert_eq!(r.opponent.stat, CoreStat::Agility);
        assert_eq!(r.opponent.modifier, 1);
        assert_eq!(r.initiator_name, "Kael");
        assert_eq!(r.opponent_name, "Goblin");
        assert_eq!(r.encounter_action.name, "Melee Attack");
    }

    #[test]
    fn outcome_follows_initiator_only() {
        let (a, b) = pair();
        let mut rng = StdRng::seed_from_u64(3);
        let mut saw_opponent_crit = false;
        for _ in 0..2000 {
            let r = resolve_opposed_check(&a, &b, &melee(), &mut rng).unwrap();
            assert_eq!(r.outcome, determine_outcome(&r.initiator, r.opponent.total));
            if matches!(r.opponent.d20_roll, 1 | 20) && !matches!(r.initiator.d20_roll, 1 | 20) {
                saw_opponent_crit = true;
                assert!(!matches!(
                    r.outcome,
                    ComparisonOutcome::CritSuccess | ComparisonOutcome::CritFailure
                ));
            }
        }
        assert!(saw_opponent_crit);
    }

    #[test]
    fn serializes_with_participant_keys() {
        let (a, b) = pair();
        let mut rng = StdRng::seed_from_u64(4);
        let r = resolve_opposed_check(&a, &b, &melee(), &mut rng).unwrap();
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["char1Name"], "Kael");
        assert_eq!(json["char2Details"]["stat"], "Agility");
        assert_eq!(json["encounterAction"]["secondaryStat"], "Agility");
    }
}
