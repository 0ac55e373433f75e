use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn redistrict() -> Command {
    let mut cmd = Command::cargo_bin("redistrict").unwrap();
    cmd.env_remove("REDISTRICT_PLANS")
        .env_remove("REDISTRICT_DISTRICTS")
        .env_remove("REDISTRICT_CELLS_PER_DISTRICT")
        .env_remove("RUST_LOG");
    cmd
}

fn plan_file(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn rank_lists_tied_plans_in_survey_order() {
    redistrict()
        .arg("rank")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. Base Plan 3 [neutral]: avg PP = 0.590, cut edges = 16",
        ))
        .stdout(predicate::str::contains(
            "3. Base Plan 11 [hearts_representative]: avg PP = 0.590, cut edges = 16",
        ))
        .stdout(predicate::str::contains("20. Base Plan 18"));
}

#[test]
fn consensus_json_has_three_groups() {
    let output = redistrict()
        .args(["consensus", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let sections = value["consensus"].as_array().unwrap();
    assert_eq!(sections.len(), 3);
    assert_eq!(sections[0]["title"], "All Plans (n=20)");
    assert_eq!(sections[0]["compactness"]["cut_edges"], 16);
    assert_eq!(
        sections[0]["consensus"][0],
        serde_json::json!([0, 0, 0, 1, 2])
    );
}

#[test]
fn consensus_text_for_one_group() {
    redistrict()
        .args(["consensus", "--group", "neutral"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CONSENSUS MAP: Neutral Plans (n=10)"))
        .stdout(predicate::str::contains("Cut edges: 19"))
        .stdout(predicate::str::contains("All Plans").not());
}

#[test]
fn score_reads_plan_file() {
    let file = plan_file(
        r#"[{"name": "Stripes", "type": "neutral",
             "districts": [[0,0,0,0,0],[1,1,1,1,1],[2,2,2,2,2],[3,3,3,3,3],[4,4,4,4,4]]}]"#,
    );

    redistrict()
        .arg("score")
        .arg("--plans")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Compactness metrics for Stripes (neutral):"))
        .stdout(predicate::str::contains("Cut edges: 20"))
        .stdout(predicate::str::contains("District 0 (Blue): 0.436"));
}

#[test]
fn validate_reports_invalid_plans() {
    let file = plan_file(
        r#"[{"name": "Split", "type": "neutral",
             "districts": [[0,1,0,0,0],[1,1,1,1,0],[2,2,2,2,2],[3,3,3,3,3],[4,4,4,4,4]]}]"#,
    );

    redistrict()
        .args(["validate", "--plans"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Split: invalid"))
        .stdout(predicate::str::contains(
            "District 1 is not contiguous. All cells must connect by sides (not corners).",
        ));
}

#[test]
fn validate_builtin_shows_winners() {
    redistrict()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Base Plan 11: valid (Hearts 4, Clubs 1)"))
        .stdout(predicate::str::contains("invalid").not());
}

#[test]
fn malformed_plan_file_fails() {
    let file = plan_file("{ not json");

    redistrict()
        .args(["validate", "--plans"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn missing_plan_file_fails() {
    redistrict()
        .args(["rank", "--plans", "/nonexistent/plans.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/plans.json"));
}

#[test]
fn huge_rules_fail_cleanly() {
    redistrict()
        .args(["consensus", "--districts", "18446744073709551615", "--cells-per-district", "2"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Consensus error"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn mismatched_rules_fail_consensus() {
    redistrict()
        .args(["consensus", "--districts", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Consensus error"));
}
