//! Menu-driven address book.
//!
//! Contacts live in an insertion-ordered [`ContactStore`](domain::ContactStore)
//! for the session and are persisted to a flat `name,phone,email` text file.

pub mod cli;
pub mod domain;
pub mod errors;
pub mod helper;
pub mod prelude;
pub mod storage;
