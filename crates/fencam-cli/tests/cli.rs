use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

/// Orientation frame: one rook per corner square, board photographed
/// diamond-wise so every anchor wins exactly one image extreme.
const ROOK_LABELS: &str = "\
7 0.125 0.47 0.05 0.1
7 0.5 0.07 0.05 0.1
1 0.875 0.47 0.05 0.1
1 0.5 0.87 0.05 0.1
";

fn fencam() -> Command {
    Command::cargo_bin("fencam").expect("binary")
}

fn write_orientation(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let labels = dir.join("rooks.txt");
    fs::write(&labels, ROOK_LABELS).expect("write labels");
    let orientation = dir.join("orientation.json");

    fencam()
        .args(["orient", "--labels"])
        .arg(&labels)
        .args(["--width", "800", "--height", "800", "--out"])
        .arg(&orientation)
        .assert()
        .success()
        .stdout(predicate::str::contains("a8"));

    (orientation, labels)
}

#[test]
fn orient_then_recognize_reports_the_corner_rooks() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (orientation, labels) = write_orientation(dir.path());

    fencam()
        .args(["recognize", "--orientation"])
        .arg(&orientation)
        .arg("--labels")
        .arg(&labels)
        .assert()
        .success()
        .stdout(predicate::str::contains("r6r/8/8/8/8/8/8/R6R"));
}

#[test]
fn recognize_full_appends_metadata_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (orientation, labels) = write_orientation(dir.path());

    fencam()
        .args(["recognize", "--orientation"])
        .arg(&orientation)
        .arg("--labels")
        .arg(&labels)
        .args(["--full", "--turn", "b", "--castling", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("r6r/8/8/8/8/8/8/R6R b - - 0 1"));
}

#[test]
fn orient_fails_closed_on_a_bad_rook_count() {
    let dir = tempfile::tempdir().expect("tempdir");
    let labels = dir.path().join("two_rooks.txt");
    fs::write(&labels, "7 0.125 0.47 0.05 0.1\n1 0.875 0.47 0.05 0.1\n").expect("write labels");

    fencam()
        .args(["orient", "--labels"])
        .arg(&labels)
        .args(["--width", "800", "--height", "800", "--out"])
        .arg(dir.path().join("orientation.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("rook"));
}

#[test]
fn track_accepts_then_rejects_and_survives_missing_frames() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (orientation, labels) = write_orientation(dir.path());

    // Same frame twice: the first cycle is the session's initial sync
    // and is adopted, the identical second one is a non-move. A missing
    // label file only skips its own cycle.
    let output = fencam()
        .args(["track", "--orientation"])
        .arg(&orientation)
        .arg(&labels)
        .arg(&labels)
        .arg(dir.path().join("missing.txt"))
        .assert()
        .success();

    output
        .stdout(predicate::str::contains("accepted"))
        .stdout(predicate::str::contains("rejected (position unchanged)"))
        .stdout(predicate::str::contains("skipped"));
}
