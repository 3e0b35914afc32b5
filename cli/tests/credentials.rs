use assert_cmd::Command;
use predicates::prelude::*;

fn creds() -> Command {
    Command::cargo_bin("creds").unwrap()
}

#[test]
fn test_candid_marshal() {
    creds()
        .args(["candid", "marshal", "m"])
        .assert()
        .success()
        .stdout("{\"t\":\"macaroon\",\"v\":\"m\"}\n");
}

#[test]
fn test_candid_unmarshal_tagged() {
    creds()
        .args(["candid", "unmarshal"])
        .write_stdin("{\"t\":\"macaroon\",\"v\":\"m\"}\n")
        .assert()
        .success()
        .stdout("m\n");
}

#[test]
fn test_candid_unmarshal_opaque() {
    creds()
        .args(["candid", "unmarshal"])
        .write_stdin("abc123")
        .assert()
        .success()
        .stdout("abc123\n");
}

#[test]
fn test_candid_unmarshal_u1_credentials() {
    creds()
        .args(["candid", "unmarshal"])
        .write_stdin(r#"{"t":"u1-macaroon","v":{"r":"r","d":"d"}}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected valid Candid credentials"));
}

#[test]
fn test_u1_marshal() {
    creds()
        .args(["u1", "marshal", "--root", "R", "--discharge", "D"])
        .assert()
        .success()
        .stdout("{\"t\":\"u1-macaroon\",\"v\":{\"d\":\"D\",\"r\":\"R\"}}\n");
}

#[test]
fn test_u1_unmarshal_text() {
    creds()
        .args(["u1", "unmarshal"])
        .write_stdin(r#"{"r": "R", "d": "D"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("root: R"))
        .stdout(predicate::str::contains("discharge: D"));
}

#[test]
fn test_u1_unmarshal_json() {
    creds()
        .args(["u1", "unmarshal", "-o", "json"])
        .write_stdin(r#"{"t":"u1-macaroon","v":{"r":"R","d":"D"}}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"r\": \"R\""))
        .stdout(predicate::str::contains("\"d\": \"D\""));
}

#[test]
fn test_u1_unmarshal_not_json() {
    creds()
        .args(["u1", "unmarshal"])
        .write_stdin("not json")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Expected valid Ubuntu One credentials"));
}

#[test]
fn test_u1_refresh() {
    creds()
        .args(["u1", "refresh", "--discharge", "D2"])
        .write_stdin(r#"{"t":"u1-macaroon","v":{"r":"R","d":"D1"}}"#)
        .assert()
        .success()
        .stdout("{\"t\":\"u1-macaroon\",\"v\":{\"d\":\"D2\",\"r\":\"R\"}}\n");
}
