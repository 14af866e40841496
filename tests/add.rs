use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{TempDir, tempdir};

fn contact_book(dir: &TempDir) -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME"))?;
    cmd.env("CONTACTS_FILE", dir.path().join("contacts.json"));
    Ok(cmd)
}

#[test]
fn add_contact_with_blank_optional_fields() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    contact_book(&dir)?
        .args(["add", "--client", "Jo", "--phone", "555"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added successfully!"));

    let stored = fs::read_to_string(dir.path().join("contacts.json"))?;
    let value: serde_json::Value = serde_json::from_str(&stored)?;
    assert_eq!(
        value,
        serde_json::json!([
            {"company": "N/A", "client": "Jo", "phone": "555", "email": "N/A"}
        ])
    );

    Ok(())
}

#[test]
fn added_contacts_are_listed_in_order() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    contact_book(&dir)?
        .args([
            "add",
            "--company",
            "Acme",
            "--client",
            "Ann",
            "--phone",
            "08031234567",
            "--email",
            "ann@acme.com",
        ])
        .assert()
        .success();

    contact_book(&dir)?
        .args(["add", "--client", "Bob", "--phone", "08064879199"])
        .assert()
        .success();

    contact_book(&dir)?
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)  1\. Acme\s+Ann\s+08031234567\s+ann@acme.com.*  2\. N/A\s+Bob\s+08064879199\s+N/A")?);

    Ok(())
}

#[test]
fn add_without_required_fields_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    contact_book(&dir)?
        .args(["add", "--company", "Acme", "--phone", "555"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Validation failed: Client name and phone number are required!",
        ));

    contact_book(&dir)?
        .args(["add", "--client", "Jo", "--phone", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Client name and phone number are required!",
        ));

    // Nothing was written
    assert!(!dir.path().join("contacts.json").exists());

    contact_book(&dir)?
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts available."));

    Ok(())
}

#[test]
fn file_flag_overrides_environment() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let other = dir.path().join("other").join("book.json");

    contact_book(&dir)?
        .arg("--file")
        .arg(&other)
        .args(["add", "--client", "Jo", "--phone", "555"])
        .assert()
        .success();

    assert!(other.exists());
    assert!(!dir.path().join("contacts.json").exists());

    Ok(())
}

#[test]
fn corrupt_contacts_file_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("contacts.json"), "not json")?;

    contact_book(&dir)?
        .arg("list")
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "Error: Contacts file is not a valid contact list",
        ));

    Ok(())
}

#[test]
fn rejected_input_and_broken_file_exit_differently() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    contact_book(&dir)?
        .args(["add", "--client", "", "--phone", "555"])
        .assert()
        .code(1);

    fs::write(dir.path().join("contacts.json"), r#"[{"company":"A"}]"#)?;

    contact_book(&dir)?
        .args(["add", "--client", "Jo", "--phone", "555"])
        .assert()
        .code(3);

    // The broken file is left as it was
    assert_eq!(
        fs::read_to_string(dir.path().join("contacts.json"))?,
        r#"[{"company":"A"}]"#
    );

    Ok(())
}

#[test]
fn whitespace_client_is_accepted() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    contact_book(&dir)?
        .args(["add", "--client", " ", "--phone", "555", "--company", " "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added successfully!"));

    let stored = fs::read_to_string(dir.path().join("contacts.json"))?;
    let value: serde_json::Value = serde_json::from_str(&stored)?;
    assert_eq!(
        value,
        serde_json::json!([
            {"company": " ", "client": " ", "phone": "555", "email": "N/A"}
        ])
    );

    Ok(())
}
