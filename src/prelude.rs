pub use crate::cli::{command, command::MenuChoice, menu, run_app};
pub use crate::domain::{
    contact::{self, Contact},
    store::ContactStore,
};
pub use crate::errors::AppError;
pub use crate::storage::{self, CsvStorage, DEFAULT_STORAGE_PATH, Persistence, TxtStorage};
