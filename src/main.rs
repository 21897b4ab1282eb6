use address_book::prelude::{AppError, run_app};
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), AppError> {
    dotenv().ok();

    // Logs go to stderr so they never mix with the menu on stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    run_app()
}
