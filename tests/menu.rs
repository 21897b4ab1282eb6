use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn address_book(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.current_dir(dir)
        .env_remove("CONTACTS_FILE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn add_list_remove_search_save_reload() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    // No contacts file yet: loading reports an error but the menu still runs
    address_book(dir.path())
        .write_stdin(
            "1\nAlice\n1234567890\nalice@x.com\n\
             1\nBob\n0987654321\nbob@y.co\n\
             4\n\
             2\nalice\n\
             3\nBob\n\
             5\n\
             6\n",
        )
        .assert()
        .success()
        .stderr(predicate::str::contains("Error loading contact data"))
        .stdout(predicate::str::contains(
            "All Contacts:\n\
            Name: Alice, Phone Number: 1234567890, Email: alice@x.com\n\
            Name: Bob, Phone Number: 0987654321, Email: bob@y.co\n",
        ))
        .stdout(predicate::str::contains("Contact with Name 'alice' removed."))
        .stdout(predicate::str::contains(
            "Contact found: Name: Bob, Phone Number: 0987654321, Email: bob@y.co",
        ))
        .stdout(predicate::str::contains("Exiting..."))
        .stdout(predicate::str::contains("Contact data saved to contacts.txt"));

    assert_eq!(
        fs::read_to_string(dir.path().join("contacts.txt"))?,
        "Bob,0987654321,bob@y.co\n"
    );

    // Second session picks the saved file back up
    let output = address_book(dir.path())
        .write_stdin("4\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact data loaded from contacts.txt"))
        .get_output()
        .stdout
        .clone();

    let output = String::from_utf8_lossy(&output);
    let listed: Vec<_> = output
        .lines()
        .filter(|line| line.starts_with("Name: "))
        .collect();

    assert_eq!(listed, vec!["Name: Bob, Phone Number: 0987654321, Email: bob@y.co"]);
    Ok(())
}

#[test]
fn empty_store_and_invalid_input() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("contacts.txt"), "")?;

    address_book(dir.path())
        .write_stdin(
            "4\n\
             8\n\
             1\nDave\n555-123-4567\n\
             1\nDave\n5551234567\ndave@example\n\
             4\n\
             6\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts to display."))
        .stdout(predicate::str::contains("Invalid option '8'. Please try again."))
        .stdout(predicate::str::contains(
            "Validation failed: Invalid phone number format. Please enter 10 digits.",
        ))
        .stdout(predicate::str::contains(
            "Validation failed: Invalid email address format.",
        ))
        .stdout(predicate::str::contains("Contact added successfully.").not())
        .stdout(predicate::str::contains("Name: Dave").not());

    assert_eq!(fs::read_to_string(dir.path().join("contacts.txt"))?, "");
    Ok(())
}

#[test]
fn removes_first_of_duplicate_names() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("contacts.txt"),
        "John,1111111111,one@x.com\n\
        Wayne,2222222222,wayne@x.com\n\
        john,3333333333,two@x.com\n",
    )?;

    address_book(dir.path())
        .write_stdin("2\nJOHN\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact with Name 'JOHN' removed."));

    assert_eq!(
        fs::read_to_string(dir.path().join("contacts.txt"))?,
        "Wayne,2222222222,wayne@x.com\njohn,3333333333,two@x.com\n"
    );
    Ok(())
}

#[test]
fn malformed_lines_are_dropped_on_load() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("book.txt");
    fs::write(
        &file,
        "Alice,1234567890,alice@x.com\n\
        garbage line\n\
        a,b,c,d\n\
        Trusted,123,not-validated\n",
    )?;

    address_book(dir.path())
        .arg("--file")
        .arg(&file)
        .write_stdin("6\n")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&file)?,
        "Alice,1234567890,alice@x.com\nTrusted,123,not-validated\n"
    );
    Ok(())
}

#[test]
fn contacts_file_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    address_book(dir.path())
        .env("CONTACTS_FILE", "data/people.txt")
        .write_stdin("1\nEve\n1112223333\neve@z.org\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact data saved to data/people.txt"));

    assert_eq!(
        fs::read_to_string(dir.path().join("data").join("people.txt"))?,
        "Eve,1112223333,eve@z.org\n"
    );
    Ok(())
}

#[test]
fn closed_stdin_saves_and_exits() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    address_book(dir.path())
        .write_stdin("1\nZoe\n9998887777\nzoe@q.io\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exiting..."));

    assert_eq!(
        fs::read_to_string(dir.path().join("contacts.txt"))?,
        "Zoe,9998887777,zoe@q.io\n"
    );
    Ok(())
}

#[test]
fn non_utf8_line_does_not_wipe_contacts() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.txt");
    fs::write(
        &file,
        b"Alice,1234567890,alice@x.com\n\
          Ren\xe9,1111111111,rene@x.com\n\
          Bob,0987654321,bob@y.co\n",
    )?;

    address_book(dir.path())
        .write_stdin("6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact data loaded from contacts.txt"))
        .stderr(predicate::str::contains("Error loading contact data").not());

    assert_eq!(
        fs::read_to_string(&file)?,
        "Alice,1234567890,alice@x.com\n\
        Ren\u{FFFD},1111111111,rene@x.com\n\
        Bob,0987654321,bob@y.co\n"
    );
    Ok(())
}
