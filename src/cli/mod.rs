pub mod command;
pub mod menu;
pub mod run;

pub use run::run_app;
