use crate::prelude::{
    AppError, ContactStore, CsvStorage, Persistence, TxtStorage,
    command::{Cli, Commands},
    menu,
};
use clap::Parser;
use std::io::{self, Write};
use tracing::info;

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    let storage = TxtStorage::new(&cli.file);
    let mut store = ContactStore::new();

    info!(file = %cli.file, "using contacts file");

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut out = io::stdout().lock();

            menu::run_menu(&mut store, &storage, &mut input, &mut out)
        }

        // Import contacts into storage from .csv file
        Commands::Import { src } => {
            let mut out = io::stdout().lock();
            menu::load_contacts(&mut store, &storage, &mut out)?;

            let source = CsvStorage::new(src.as_deref(), None)?;
            let imported = source.load()?;
            let total = imported.len();

            store.extend(imported);
            store.save(&storage)?;

            writeln!(
                out,
                "Successfully imported {} contacts from {:?}.",
                total, source.src
            )?;
            Ok(())
        }

        Commands::Export { des } => {
            let mut out = io::stdout().lock();
            menu::load_contacts(&mut store, &storage, &mut out)?;

            let destination = CsvStorage::new(None, des.as_deref())?;
            store.save(&destination)?;

            writeln!(
                out,
                "Successfully exported {} contacts to {:?}.",
                store.len(),
                destination.dest
            )?;
            Ok(())
        }
    }
}
