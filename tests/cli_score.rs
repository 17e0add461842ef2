use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn command_score() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("smsa")?;
    let output = cmd.arg("score").arg("tests/seqs/aligned.txt").output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(stdout, "57\n");

    Ok(())
}

#[test]
fn command_score_columns() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("smsa")?;
    let output = cmd
        .arg("score")
        .arg("tests/seqs/aligned.txt")
        .arg("--columns")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 12);
    assert_eq!(lines[0], "57");
    assert_eq!(lines[1], "1\tTTT\t9\ttrue");
    assert_eq!(lines[2], "2\t-AG\t-5\tfalse");
    assert_eq!(lines[8], "8\tGG-\t-1\tfalse");

    Ok(())
}

#[test]
fn command_score_unequal() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("smsa")?;
    cmd.arg("score")
        .arg("stdin")
        .write_stdin("2\nAC-T\nACT\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("row 1 has length 3, expected 4"));

    Ok(())
}
