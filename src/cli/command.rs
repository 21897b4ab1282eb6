use clap::{Parser, Subcommand};

use crate::errors::AppError;
use crate::storage::DEFAULT_STORAGE_PATH;

#[derive(Parser, Debug)]
#[command(name = "address-book", version, about = "Simple Address Book")]
pub struct Cli {
    /// Contacts file (one name,phone,email line per contact)
    #[arg(long, env = "CONTACTS_FILE", default_value_t = String::from(DEFAULT_STORAGE_PATH))]
    pub file: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive menu (default)
    Menu,

    /// Import contacts from .csv file
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: Option<String>,
    },

    /// Export contacts to a .csv file
    Export {
        /// File path to the destination location for export file
        #[arg(short, long)]
        des: Option<String>,
    },
}

/// Entries of the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddContact,
    RemoveContact,
    SearchContact,
    ListContacts,
    SaveContacts,
    Exit,
}

impl MenuChoice {
    pub fn from_input(input: &str) -> Result<Self, AppError> {
        let input = input.trim();
        let choice = input
            .parse::<i32>()
            .map_err(|_| AppError::ParseCommand(input.to_string()))?;

        match choice {
            1 => Ok(MenuChoice::AddContact),
            2 => Ok(MenuChoice::RemoveContact),
            3 => Ok(MenuChoice::SearchContact),
            4 => Ok(MenuChoice::ListContacts),
            5 => Ok(MenuChoice::SaveContacts),
            6 => Ok(MenuChoice::Exit),
            _ => Err(AppError::ParseCommand(input.to_string())),
        }
    }
}
