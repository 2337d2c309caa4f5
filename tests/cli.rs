use assert_cmd::Command;
use predicates::prelude::*;

fn gmlq() -> Command {
    let mut cmd = Command::cargo_bin("gmlq").unwrap();
    // Keep the host environment out of the tests.
    cmd.env_remove("GMLQ_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn no_argument_prints_usage_and_exits_zero() {
    gmlq().assert().success().stdout("usage: gmlq TERM\n");
}

#[test]
fn malformed_config_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gmlq.json");
    std::fs::write(&path, "{ this is not json").unwrap();

    gmlq()
        .env("GMLQ_CONFIG", &path)
        .arg("alice")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("malformed config file"));
}

#[test]
fn declared_but_missing_config_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.json");

    gmlq()
        .env("GMLQ_CONFIG", &path)
        .arg("alice")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot read config file"));
}

#[test]
fn incomplete_config_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gmlq.json");
    std::fs::write(&path, r#"{"search_base": "dc=example,dc=com"}"#).unwrap();

    gmlq()
        .env("GMLQ_CONFIG", &path)
        .arg("alice")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn unreachable_server_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gmlq.json");
    // Port 1 on loopback: nothing should be listening there.
    std::fs::write(
        &path,
        r#"{"uri": "127.0.0.1", "port": 1, "search_base": "dc=example,dc=com"}"#,
    )
    .unwrap();

    gmlq()
        .env("GMLQ_CONFIG", &path)
        .arg("alice")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot reach directory server"));
}
