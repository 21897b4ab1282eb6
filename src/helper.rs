use std::io::BufRead;

use crate::domain::Contact;
use crate::errors::AppError;

pub const FIELD_DELIMITER: char = ',';

/// One `name,phone,email` line per contact. Commas inside a field are
/// written as-is and will break that row on the next load.
pub fn serialize_contacts(contacts: &[Contact]) -> String {
    let mut data = String::new();

    for contact in contacts {
        let ser_contact = format!(
            "{}{FIELD_DELIMITER}{}{FIELD_DELIMITER}{}\n",
            contact.name(),
            contact.phone(),
            contact.email()
        );

        data.push_str(&ser_contact);
    }
    data
}

pub fn deserialize_contacts_from_txt_buffer<R: BufRead>(
    buffer: R,
) -> Result<Vec<Contact>, AppError> {
    let mut contacts = Vec::new();

    // Lines are decoded one at a time so a stray non-UTF-8 byte only
    // affects its own row
    for bytes in buffer.split(b'\n') {
        let bytes = bytes?;
        let line = String::from_utf8_lossy(&bytes);
        let line = line.strip_suffix('\r').unwrap_or(&line);

        // Anything that is not exactly name,phone,email is dropped
        if let &[name, phone, email] = split_fields(&line).as_slice() {
            contacts.push(Contact::from_trusted(name, phone, email));
        }
    }

    Ok(contacts)
}

/// Splits a stored line on the delimiter, discarding trailing empty fields.
pub fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();

    while fields.len() > 1 && fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}
