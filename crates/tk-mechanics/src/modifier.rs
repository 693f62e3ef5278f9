//! Stat-to-modifier arithmetic.

use tk_core::{Character, CoreStat, DEFAULT_STAT_VALUE};

/// The bonus or penalty a stat value grants: `floor((value - 10) / 2)`.
///
/// Uses floor division, so 9 gives -1 and 1 gives -5.
pub fn stat_modifier(value: i32) -> i32 {
    value.div_euclid(2) - DEFAULT_STAT_VALUE / 2
}

/// Modifier for a stat that may be missing; a missing value reads as 10.
pub fn modifier_or_default(value: Option<i32>) -> i32 {
    stat_modifier(value.unwrap_or(DEFAULT_STAT_VALUE))
}

/// A character's value for `stat`. Absent or zero reads as 10.
pub fn total_stat(character: &Character, stat: CoreStat) -> i32 {
    character.stats.value_or_default(stat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tk_core::{CharacterKind, StatBlock};

    #[test]
    fn standard_modifiers() {
        assert_eq!(stat_modifier(1), -5);
        assert_eq!(stat_modifier(8), -1);
        assert_eq!(stat_modifier(9), -1);
        assert_eq!(stat_modifier(10), 0);
        assert_eq!(stat_modifier(11), 0);
        assert_eq!(stat_modifier(12), 1);
        assert_eq!(stat_modifier(14), 2);
        assert_eq!(stat_modifier(15), 2);
        assert_eq!(stat_modifier(18), 4);
        assert_eq!(stat_modifier(20), 5);
    }

    #[test]
    fn out_of_range_values_still_follow_formula() {
        assert_eq!(stat_modifier(0), -5);
        assert_eq!(stat_modifier(-5), -8);
        assert_eq!(stat_modifier(30), 10);
    }

    #[test]
    fn missing_value_is_zero_modifier() {
        assert_eq!(modifier_or_default(None), 0);
        assert_eq!(modifier_or_default(Some(14)), 2);
    }

    #[test]
    fn total_stat_defaults_to_ten() {
        let mut event = Character::new("Rockslide", CharacterKind::Event);
        event.stats = StatBlock::new().with(CoreStat::Strength, 17);
        assert_eq!(total_stat(&event, CoreStat::Strength), 17);
        assert_eq!(total_stat(&event, CoreStat::Charisma), 10);
    }

    #[test]
    fn stored_zero_reads_as_ten() {
        let json = r#"{"id": "s", "name": "Scarecrow", "stats": {"Strength": 0}}"#;
        let c: Character = serde_json::from_str(json).unwrap();
        assert_eq!(total_stat(&c, CoreStat::Strength), 10);
        assert_eq!(stat_modifier(total_stat(&c, CoreStat::Strength)), 0);
        assert_eq!(stat_modifier(0), -5);
    }

    proptest! {
        #[test]
        fn matches_floor_formula(v in any::<i32>()) {
            let expected = ((f64::from(v) - 10.0) / 2.0).floor() as i64;
            prop_assert_eq!(i64::from(stat_modifier(v)), expected);
        }
    }
}
