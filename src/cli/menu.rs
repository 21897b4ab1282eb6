//! Interactive menu loop.
//!
//! Reads one line per prompt from any `BufRead` and writes to any `Write`,
//! so the binary can bind it to stdin/stdout and tests to in-memory buffers.
//! Storage failures are reported on stderr and never end the session.

use std::io::{BufRead, Write};

use crate::domain::contact::{validate_email, validate_name, validate_phone};
use crate::prelude::{AppError, Contact, ContactStore, MenuChoice, Persistence};
use tracing::{info, warn};

pub fn show_menu<W: Write>(out: &mut W) -> Result<(), AppError> {
    writeln!(out, "\nAddress Book System Menu:")?;
    writeln!(out, "1. Add Contact")?;
    writeln!(out, "2. Remove Contact")?;
    writeln!(out, "3. Search Contact")?;
    writeln!(out, "4. Display All Contacts")?;
    writeln!(out, "5. Save Data to File")?;
    writeln!(out, "6. Exit")?;
    write!(out, "Select an option: ")?;
    out.flush()?;
    Ok(())
}

/// Next trimmed line, or `None` once input is exhausted.
pub fn get_input<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> Result<Option<String>, AppError> {
    write!(out, "{}", message)?;
    out.flush()?;
    get_input(input)
}

/// Runs the menu until Exit (or end of input), then saves one last time.
pub fn run_menu<R: BufRead, W: Write>(
    store: &mut ContactStore,
    storage: &dyn Persistence,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    load_contacts(store, storage, out)?;

    loop {
        show_menu(out)?;

        let Some(action) = get_input(input)? else {
            info!("input closed, treating as exit");
            writeln!(out)?;
            return exit(store, storage, out);
        };

        match MenuChoice::from_input(&action) {
            Ok(MenuChoice::AddContact) => {
                if let Some(contact) = read_contact(input, out)? {
                    store.add_contact(contact);
                    writeln!(out, "Contact added successfully.")?;
                }
            }
            Ok(MenuChoice::RemoveContact) => {
                let Some(name) = prompt(input, out, "Enter the Name to remove a contact: ")? else {
                    continue;
                };

                match store.remove_by_name(&name) {
                    Ok(_) => writeln!(out, "Contact with Name '{}' removed.", name)?,
                    Err(_) => writeln!(out, "Contact with Name '{}' not found.", name)?,
                }
            }
            Ok(MenuChoice::SearchContact) => {
                let Some(name) = prompt(input, out, "Enter the Name to search for a contact: ")?
                else {
                    continue;
                };

                match store.search_by_name(&name) {
                    Some(contact) => writeln!(out, "Contact found: {}", contact)?,
                    None => writeln!(out, "Contact with Name '{}' not found.", name)?,
                }
            }
            Ok(MenuChoice::ListContacts) => display_contacts(store, out)?,
            Ok(MenuChoice::SaveContacts) => save_contacts(store, storage, out)?,
            Ok(MenuChoice::Exit) => return exit(store, storage, out),
            Err(e) => {
                // User entered invalid command
                writeln!(out, "{}", e)?;
            }
        }
    }
}

fn exit<W: Write>(
    store: &ContactStore,
    storage: &dyn Persistence,
    out: &mut W,
) -> Result<(), AppError> {
    writeln!(out, "Exiting...")?;
    save_contacts(store, storage, out)
}

/// Prompts for name, phone and email in turn.
///
/// Each field is checked as soon as it is entered; the first invalid one is
/// reported and the whole record is dropped.
pub fn read_contact<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Option<Contact>, AppError> {
    let Some(name) = prompt(input, out, "Enter Contact Name: ")? else {
        return Ok(None);
    };
    if !report_invalid(validate_name(&name), out)? {
        return Ok(None);
    }

    let Some(phone) = prompt(input, out, "Enter Phone Number: ")? else {
        return Ok(None);
    };
    if !report_invalid(validate_phone(&phone), out)? {
        return Ok(None);
    }

    let Some(email) = prompt(input, out, "Enter Email Address: ")? else {
        return Ok(None);
    };
    if !report_invalid(validate_email(&email), out)? {
        return Ok(None);
    }

    Ok(Some(Contact::new(&name, &phone, &email)?))
}

// true when the field is valid
fn report_invalid<W: Write>(check: Result<(), AppError>, out: &mut W) -> Result<bool, AppError> {
    match check {
        Ok(()) => Ok(true),
        Err(e @ AppError::Validation(_)) => {
            writeln!(out, "{}", e)?;
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

pub fn display_contacts<W: Write>(store: &ContactStore, out: &mut W) -> Result<(), AppError> {
    if store.is_empty() {
        writeln!(out, "No contacts to display.")?;
        return Ok(());
    }

    writeln!(out, "All Contacts:")?;
    for contact in store.contact_list() {
        writeln!(out, "{}", contact)?;
    }
    Ok(())
}

/// Loads the store from `storage`. A failure is reported, not returned.
pub fn load_contacts<W: Write>(
    store: &mut ContactStore,
    storage: &dyn Persistence,
    out: &mut W,
) -> Result<(), AppError> {
    match store.load(storage) {
        Ok(_) => writeln!(out, "Contact data loaded from {}", storage.location())?,
        Err(e) => {
            warn!(error = %e, "loading contacts failed");
            eprintln!("Error loading contact data: {}", e);
        }
    }
    Ok(())
}

/// Writes the store to `storage`. A failure is reported, not returned.
pub fn save_contacts<W: Write>(
    store: &ContactStore,
    storage: &dyn Persistence,
    out: &mut W,
) -> Result<(), AppError> {
    match store.save(storage) {
        Ok(()) => writeln!(out, "Contact data saved to {}", storage.location())?,
        Err(e) => {
            warn!(error = %e, "saving contacts failed");
            eprintln!("Error saving contact data: {}", e);
        }
    }
    Ok(())
}
