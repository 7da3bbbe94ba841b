pub mod cli;
pub mod config;
pub mod error;
pub mod session;
pub mod telemetry;
pub mod tracker;

pub use error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
