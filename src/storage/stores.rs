use super::*;

use crate::helper;
use csv::{Reader, Writer};
use serde::Deserialize;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, Write};
use std::path::PathBuf;
use tracing::warn;

const IMPORT_PATH: &str = "./import_export/contacts.csv";
const EXPORT_PATH: &str = "./import_export/exported.csv";

/// The `contacts.txt` format: comma-joined fields, one contact per line.
pub struct TxtStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl TxtStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            medium: "txt".to_string(),
            path: path.into(),
        }
    }
}

impl Persistence for TxtStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        // A missing file is an error here; callers decide whether it is fatal
        let file = File::open(&self.path)?;

        let reader = BufReader::new(file);
        let contacts = helper::deserialize_contacts_from_txt_buffer(reader)?;
        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        let data = helper::serialize_contacts(contacts);
        file.write_all(data.as_bytes())?;
        file.flush()?;

        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

pub struct CsvStorage {
    pub medium: String,
    pub src: PathBuf,
    pub dest: PathBuf,
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    phone: String,
    email: String,
}

impl CsvStorage {
    pub fn new(src: Option<&str>, dest: Option<&str>) -> Result<Self, AppError> {
        let mut dest_path = PathBuf::from(dest.unwrap_or(EXPORT_PATH));

        if dest_path.is_dir() {
            dest_path = dest_path.join("exported.csv");
        } else if dest_path.extension().is_some_and(|ext| ext != "csv") {
            return Err(AppError::Validation(
                "Export file must be a .csv file".to_string(),
            ));
        }

        Ok(Self {
            medium: "csv".to_string(),
            src: PathBuf::from(src.unwrap_or(IMPORT_PATH)),
            dest: dest_path,
        })
    }
}

impl Persistence for CsvStorage {
    fn get_medium(&self) -> &str {
        &self.medium
    }

    // Exports are the only writes, so the destination is what users see
    fn location(&self) -> String {
        self.dest.display().to_string()
    }

    /// Reads `src`, keeping only rows that pass contact validation.
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !self.src.exists() {
            return Err(AppError::NotFound("CSV file".to_string()));
        }

        if self.src.extension().is_some_and(|ext| ext != "csv") {
            return Err(AppError::Validation("File not .csv".to_string()));
        }

        let mut reader = Reader::from_path(&self.src)?;

        let mut contacts: Vec<Contact> = Vec::new();

        for (line, result) in reader.deserialize().enumerate() {
            let row: CsvRow = match result {
                Ok(row) => row,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    // wrong field count or undecodable row
                    warn!(row = line + 2, error = %e, "skipping csv row");
                    continue;
                }
            };

            match Contact::new(&row.name, &row.phone, &row.email) {
                Ok(contact) => contacts.push(contact),
                Err(e) => {
                    // header is line 1
                    warn!(row = line + 2, name = %row.name, error = %e, "skipping csv row");
                }
            }
        }

        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.dest)?;

        let mut writer = Writer::from_path(&self.dest)?;

        if contacts.is_empty() {
            writer.write_record(["name", "phone", "email"])?;
        }

        for contact in contacts {
            writer.serialize(contact)?;
        }

        writer.flush()?;

        Ok(())
    }
}
