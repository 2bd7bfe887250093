use assert_cmd::Command;
use assert_fs::{prelude::PathAssert, prelude::PathChild, TempDir};
use predicates::prelude::predicate;

#[test]
fn test_encode_smt2_to_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("antler")?;
    cmd.arg("encode")
        .arg("-n")
        .arg("4")
        .arg("-k")
        .arg("2")
        .arg("-c")
        .arg("2");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("(declare-const x_1_1 Bool)"))
        .stdout(predicate::str::contains("(check-sat)"));
    Ok(())
}

#[test]
fn test_encode_smt2_to_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let out = dir.child("instance.smt2");
    let mut cmd = Command::cargo_bin("antler")?;
    cmd.arg("encode")
        .arg("-n")
        .arg("4")
        .arg("-k")
        .arg("2")
        .arg("-c")
        .arg("2")
        .arg("-o")
        .arg(out.path());
    cmd.assert().success();
    out.assert(predicate::str::contains("(exists ("));
    out.assert(predicate::str::contains("(check-sat)"));
    dir.close()?;
    Ok(())
}

#[test]
fn test_encode_dimacs_to_file_with_mapping() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let out = dir.child("instance.cnf");
    let mut cmd = Command::cargo_bin("antler")?;
    cmd.arg("encode")
        .arg("-n")
        .arg("4")
        .arg("-k")
        .arg("2")
        .arg("-c")
        .arg("2")
        .arg("--format")
        .arg("dimacs")
        .arg("-o")
        .arg(out.path());
    cmd.assert().success();
    out.assert(predicate::str::starts_with("p cnf "));
    dir.child("instance.cnf.map")
        .assert(predicate::str::contains("x_1_1 1\n"));
    dir.close()?;
    Ok(())
}

#[test]
fn test_encode_dimacs_to_stdout_skips_mapping() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("antler")?;
    cmd.arg("encode")
        .arg("-n")
        .arg("4")
        .arg("-k")
        .arg("2")
        .arg("-c")
        .arg("2")
        .arg("--format")
        .arg("dimacs");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("p cnf "))
        .stdout(predicate::str::contains("the variable mapping is not written"));
    Ok(())
}
