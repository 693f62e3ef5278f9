//! Integration tests for the `tk` command-line interface.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PARTY: &str = r#"[
  {
    "id": "kara-1",
    "name": "Kara Vell",
    "type": "Player",
    "stats": {
      "Strength": 16, "Perception": 12, "Endurance": 14, "Charisma": 8,
      "Intelligence": 11, "Agility": 15, "Luck": 9
    },
    "health": 10
  },
  {
    "id": "brom-2",
    "name": "Brom",
    "type": "Enemy",
    "stats": {
      "Strength": 18, "Perception": 9, "Endurance": 17, "Charisma": 6,
      "Intelligence": 7, "Agility": 10, "Luck": 10
    },
    "health": 14
  }
]"#;

/// Write `json` as a roster file in a fresh temp dir.
fn roster_with(json: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("characters.json");
    fs::write(&path, json).unwrap();
    (dir, path)
}

fn party() -> (TempDir, PathBuf) {
    roster_with(PARTY)
}

fn tk() -> Command {
    let mut cmd = Command::cargo_bin("tk").unwrap();
    cmd.env_remove("TK_ROSTER").env_remove("TK_LOG").env("NO_COLOR", "1");
    cmd
}

fn stdout_of(args: &[&str]) -> String {
    let output = tk().args(args).output().unwrap();
    assert!(output.status.success(), "{args:?} failed");
    String::from_utf8(output.stdout).unwrap()
}

const PHRASES: [&str; 5] = [
    "Critical Success!",
    "Success.",
    "Failure.",
    "Critical Failure!",
    "Tie.",
];

fn starts_with_phrase(report: &str) -> bool {
    PHRASES.iter().any(|p| report.starts_with(p))
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_prints_faces_and_total() {
    tk().args(["roll", "2d6+3", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("2d6+3: [").and(predicate::str::contains(" +3 = ")));
}

#[test]
fn roll_is_reproducible_with_seed() {
    let a = stdout_of(&["roll", "4d10", "--times", "5", "--seed", "99"]);
    let b = stdout_of(&["roll", "4d10", "--times", "5", "--seed", "99"]);
    assert_eq!(a, b);
    assert!(a.contains("5 rolls, sum"));
}

#[test]
fn roll_json_totals_stay_in_range() {
    let out = stdout_of(&["roll", "3d6-1", "--times", "20", "--json", "--seed", "1"]);
    let rolls: serde_json::Value = serde_json::from_str(&out).unwrap();
    let rolls = rolls.as_array().unwrap();
    assert_eq!(rolls.len(), 20);
    for roll in rolls {
        let total = roll["total"].as_i64().unwrap();
        assert!((2..=17).contains(&total), "total {total}");
        assert_eq!(roll["rolls"].as_array().unwrap().len(), 3);
    }
}

#[test]
fn roll_rejects_bad_notation() {
    tk().args(["roll", "2x6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid dice notation"));
}

#[test]
fn roll_rejects_unsupported_die() {
    tk().args(["roll", "1d7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported die: d7"));
}

#[test]
fn roll_times_must_be_positive() {
    tk().args(["roll", "d6", "--times", "0"]).assert().failure();
}

// ---------------------------------------------------------------------------
// check / act / oppose
// ---------------------------------------------------------------------------

#[test]
fn check_reports_against_dc() {
    let (_dir, roster) = party();
    let out = stdout_of(&[
        "check",
        "kara vell",
        "str",
        "--dc",
        "12",
        "--roster",
        roster.to_str().unwrap(),
    ]);
    assert!(starts_with_phrase(&out), "{out}");
    assert!(out.contains("(vs DC 12) Roll: "));
    assert!(out.contains(" (d20) +3 (Strength Mod) = "));
}

#[test]
fn check_uses_named_difficulty() {
    let (_dir, roster) = party();
    let out = stdout_of(&[
        "check",
        "Brom",
        "charisma",
        "--difficulty",
        "very hard",
        "--roster",
        roster.to_str().unwrap(),
    ]);
    assert!(out.contains("(vs DC 25)"));
    assert!(out.contains("-2 (Charisma Mod)"));
}

#[test]
fn check_defaults_to_medium_dc() {
    let (_dir, roster) = party();
    let out = stdout_of(&["check", "Brom", "luck", "--roster", roster.to_str().unwrap()]);
    assert!(out.contains("(vs DC 15)"));
    assert!(out.contains("+0 (Luck Mod)"));
}

#[test]
fn check_json_has_roll_details() {
    let (_dir, roster) = party();
    let out = stdout_of(&[
        "check",
        "kara-1",
        "agility",
        "--json",
        "--roster",
        roster.to_str().unwrap(),
    ]);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["dc"], 15);
    assert_eq!(v["rollDetails"]["statValue"], 15);
    assert_eq!(v["rollDetails"]["modifier"], 2);
    let d20 = v["rollDetails"]["d20Roll"].as_i64().unwrap();
    assert_eq!(v["rollDetails"]["total"].as_i64().unwrap(), d20 + 2);
}

#[test]
fn check_unknown_character_fails() {
    let (_dir, roster) = party();
    tk().args(["check", "Nobody", "str", "--roster", roster.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("character not found"));
}

#[test]
fn check_unknown_stat_fails() {
    let (_dir, roster) = party();
    tk().args(["check", "Brom", "wisdom", "--roster", roster.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown stat"));
}

#[test]
fn check_missing_roster_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");
    tk().args(["check", "Brom", "str", "--roster", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot load"));
}

#[test]
fn oppose_reports_both_sides() {
    let (_dir, roster) = party();
    let out = stdout_of(&[
        "oppose",
        "Kara Vell",
        "Brom",
        "--encounter",
        "combat",
        "--action",
        "melee attack",
        "--roster",
        roster.to_str().unwrap(),
    ]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3, "{out}");
    assert!(starts_with_phrase(lines[0]));
    assert!(lines[0].ends_with("(Melee Attack)"));
    assert!(lines[1].starts_with("  Kara Vell (Strength): Roll: "));
    assert!(lines[2].starts_with("  Brom (Agility): Roll: "));
}

#[test]
fn oppose_is_reproducible_with_seed() {
    let (_dir, roster) = party();
    let args = [
        "oppose",
        "Kara Vell",
        "Brom",
        "-e",
        "social",
        "-a",
        "Intimidate",
        "--seed",
        "2024",
        "--roster",
        roster.to_str().unwrap(),
    ];
    assert_eq!(stdout_of(&args), stdout_of(&args));
}

#[test]
fn oppose_rejects_dc_only_action() {
    let (_dir, roster) = party();
    tk().args([
        "oppose",
        "Kara Vell",
        "Brom",
        "-e",
        "physical",
        "-a",
        "Climb",
        "--roster",
        roster.to_str().unwrap(),
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("not configured for opposed checks"));
}

#[test]
fn act_runs_dc_action() {
    let (_dir, roster) = party();
    let out = stdout_of(&[
        "act",
        "Kara Vell",
        "-e",
        "exploration",
        "-a",
        "perception check",
        "--dc",
        "10",
        "--roster",
        roster.to_str().unwrap(),
    ]);
    assert!(starts_with_phrase(&out));
    assert!(out.contains("(vs DC 10)"));
    assert!(out.contains("+1 (Perception Mod)"));
}

#[test]
fn act_rejects_opposed_action() {
    let (_dir, roster) = party();
    tk().args([
        "act",
        "Kara Vell",
        "-e",
        "combat",
        "-a",
        "Melee Attack",
        "--roster",
        roster.to_str().unwrap(),
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("needs an opponent"));
}

#[test]
fn act_unknown_action_fails() {
    let (_dir, roster) = party();
    tk().args([
        "act",
        "Kara Vell",
        "-e",
        "combat",
        "-a",
        "Fireball",
        "--roster",
        roster.to_str().unwrap(),
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("unknown action 'Fireball'"));
}

#[test]
fn act_unknown_encounter_fails() {
    let (_dir, roster) = party();
    tk().args([
        "act",
        "Kara Vell",
        "-e",
        "underwater",
        "-a",
        "Swim",
        "--roster",
        roster.to_str().unwrap(),
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("unknown encounter type"));
}

// ---------------------------------------------------------------------------
// actions
// ---------------------------------------------------------------------------

#[test]
fn actions_lists_whole_catalog() {
    tk().args(["actions"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Melee Attack")
                .and(predicate::str::contains("Luck Test (vs DC 50%)"))
                .and(predicate::str::contains("33 actions")),
        );
}

#[test]
fn actions_filters_by_encounter() {
    tk().args(["actions", "social"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Persuade")
                .and(predicate::str::contains("Melee Attack").not())
                .and(predicate::str::contains("6 actions")),
        );
}

#[test]
fn actions_json_uses_wire_form() {
    let out = stdout_of(&["actions", "exploration", "--json"]);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    let actions = v[0]["actions"].as_array().unwrap();
    assert_eq!(v[0]["encounter"], "Exploration");
    assert_eq!(actions.len(), 4);
    assert_eq!(actions[0]["name"], "Perception Check");
    assert_eq!(actions[0]["primaryStat"], "Perception");
    assert_eq!(actions[0]["isVsDC"], true);
}

// ---------------------------------------------------------------------------
// oracle
// ---------------------------------------------------------------------------

#[test]
fn oracle_fixed_roll() {
    tk().args(["oracle", "likely", "--roll", "78"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Likely: rolled 78 (yes <= 75) -> Yes, but...",
        ));
}

#[test]
fn oracle_fixed_roll_out_of_range() {
    tk().args(["oracle", "likely", "--roll", "101"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no result found for roll 101"));
}

#[test]
fn oracle_strict_lookup_rejects_unknown_likelihood() {
    tk().args(["oracle", "perhaps", "--roll", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid likelihood: perhaps"));
}

#[test]
fn oracle_unknown_likelihood_falls_back_when_rolling() {
    let out = stdout_of(&["oracle", "perhaps", "--json", "--seed", "5"]);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["likelihood"], "50/50");
    assert_eq!(v["yesThreshold"], 65);
}

#[test]
fn oracle_certain_is_always_yes() {
    for seed in ["1", "2", "3", "4"] {
        let out = stdout_of(&["oracle", "certain", "--json", "--seed", seed]);
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["isYes"], true);
    }
}

// ---------------------------------------------------------------------------
// luck
// ---------------------------------------------------------------------------

#[test]
fn luck_reports_roll_against_target() {
    let (_dir, roster) = party();
    tk().args(["luck", "Kara Vell", "--roster", roster.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Kara Vell: Luck Check: Rolled ")
                .and(predicate::str::contains("vs Target 9")),
        );
}

#[test]
fn luck_of_100_is_always_lucky() {
    let (_dir, roster) = roster_with(
        r#"[{"id": "f", "name": "Fortuna", "type": "NPC", "stats": {"Luck": 100}}]"#,
    );
    tk().args(["luck", "Fortuna", "--roster", roster.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lucky!"));
}

// ---------------------------------------------------------------------------
// new
// ---------------------------------------------------------------------------

#[test]
fn new_creates_roster_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("characters.json");
    tk().args(["new", "Tam", "--kind", "npc", "--roster", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("NPC 'Tam'"));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved[0]["name"], "Tam");
    assert_eq!(saved[0]["type"], "NPC");
    assert_eq!(saved[0]["stats"]["Strength"], 10);
}

#[test]
fn new_appends_and_rejects_duplicates() {
    let (_dir, roster) = party();
    tk().args(["new", "Iris", "--roster", roster.to_str().unwrap()])
        .assert()
        .success();
    tk().args(["new", "brom", "--roster", roster.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&roster).unwrap()).unwrap();
    assert_eq!(saved.as_array().unwrap().len(), 3);
}

#[test]
fn new_character_can_roll_immediately() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("characters.json");
    tk().args(["new", "Tam", "--roster", path.to_str().unwrap()])
        .assert()
        .success();
    let out = stdout_of(&["check", "Tam", "per", "--roster", path.to_str().unwrap()]);
    assert!(out.contains("+0 (Perception Mod)"));
}

#[test]
fn new_rejects_unknown_kind() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("characters.json");
    tk().args(["new", "Tam", "--kind", "dragon", "--roster", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown character kind"));
    assert!(!path.exists());
}

#[test]
fn roster_path_from_environment() {
    let (_dir, roster) = party();
    tk().env("TK_ROSTER", &roster)
        .args(["luck", "Brom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Brom: Luck Check"));
}

// ---------------------------------------------------------------------------
// validate / selfcheck
// ---------------------------------------------------------------------------

#[test]
fn validate_passes_clean_roster() {
    let (_dir, roster) = party();
    tk().args(["validate", "--roster", roster.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 characters, no issues"));
}

#[test]
fn validate_reports_issues() {
    let (_dir, roster) = roster_with(
        r#"[
          {"id": "x", "name": "Rockslide", "type": "Event", "stats": {"Strength": 25}},
          {"id": "x", "name": "Echo", "type": "Event", "stats": {}}
        ]"#,
    );
    tk().args(["validate", "--roster", roster.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(
            predicate::str::contains(
                "Rockslide: stats.Strength: Strength must be between 1 and 20.",
            )
            .and(predicate::str::contains("Echo: id: duplicate id 'x'"))
            .and(predicate::str::contains(
                "Rockslide: health: Health must be a non-negative number.",
            )),
        )
        .stderr(predicate::str::contains("validation issues"));
}

#[test]
fn invalid_characters_still_roll() {
    let (_dir, roster) = roster_with(
        r#"[{"id": "e", "name": "Fog", "type": "Event", "stats": {"Perception": "thick"}}]"#,
    );
    let out = stdout_of(&["check", "Fog", "per", "--roster", roster.to_str().unwrap()]);
    assert!(out.contains("+0 (Perception Mod)"));
}

#[test]
fn selfcheck_passes() {
    tk().args(["selfcheck"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("6 categories, 33 actions")
                .and(predicate::str::contains("9 likelihoods")),
        );
}
